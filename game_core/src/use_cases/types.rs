// Use-case level outputs of the frame driver.

use crate::domain::high_scores::HighScoreEntry;
use crate::domain::state::{Asteroid, Bullet, Particle, Phase, Ship};

/// How many times per second the ship flickers while invincible.
const BLINK_RATE: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipView {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub thrusting: bool,
    pub invincible_secs: f32,
    /// False outside `Playing` and on the off beats of the invincibility blink.
    pub visible: bool,
}

impl ShipView {
    pub fn new(ship: &Ship, phase: Phase) -> Self {
        let blink_off = ship.is_invincible()
            && ((ship.invincible_secs * BLINK_RATE).floor() as i64) % 2 == 0;
        Self {
            x: ship.x,
            y: ship.y,
            angle: ship.angle,
            thrusting: ship.thrusting,
            invincible_secs: ship.invincible_secs.max(0.0),
            visible: phase == Phase::Playing && !blink_off,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialsView {
    pub letters: String,
    pub slot: usize,
}

/// Read-only view of a session after one tick.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub tick: u64,
    pub phase: Phase,
    pub score: u32,
    pub lives: u32,
    pub round: u32,
    pub time_left: f32,
    pub ship: ShipView,
    pub death_position: Option<(f32, f32)>,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    pub particles: Vec<Particle>,
    pub high_scores: Vec<HighScoreEntry>,
    /// Present only while entering initials.
    pub initials: Option<InitialsView>,
}
