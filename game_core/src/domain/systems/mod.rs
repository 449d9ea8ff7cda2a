// Per-tick simulation systems. Each one mutates entity collections in place.

pub mod collisions;
pub mod movement;
pub mod particles;
pub mod projectiles;

pub use collisions::{Hit, HitReport, find_ship_collision, resolve_bullet_hits};
