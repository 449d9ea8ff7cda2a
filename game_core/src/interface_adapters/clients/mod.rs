// Outbound clients for external services.

pub mod scores;

pub use scores::{ScoreClient, ScoreClientError};
