// Use cases layer: the session, its phase machine and the async drivers around it.

pub mod frame;
pub mod game;
mod phase;
pub mod scores;
pub mod session;
pub mod types;

pub use frame::FrameClock;
pub use game::game_task;
pub use scores::{ScoreBackend, ScoreBoard, ScoreCommand, score_task};
pub use session::{GameSession, SessionConfig};
pub use types::{InitialsView, SessionSnapshot, ShipView};
