// Domain layer: simulation entities, rules and the score service port.

pub mod factories;
pub mod high_scores;
pub mod look;
pub mod physics;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use high_scores::{HighScoreEntry, SubmitScore};
pub use physics::FrameStep;
pub use state::{ActionInput, Bounds, Phase};
pub use tuning::GameTuning;
