use std::fmt;

// Domain-level errors for score workflows.
#[derive(Debug, PartialEq, Eq)]
pub enum ScoreError {
    MissingName,
    InvalidScore,
    StorageFailure,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::MissingName => f.write_str("name is required"),
            ScoreError::InvalidScore => f.write_str("score must be numeric"),
            ScoreError::StorageFailure => f.write_str("score storage unavailable"),
        }
    }
}

impl std::error::Error for ScoreError {}
