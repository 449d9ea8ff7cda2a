use serde::Deserialize;

/// Gameplay tuning for the player ship.
///
/// Speeds and accelerations are expressed per nominal 60 Hz frame; the frame
/// driver scales them by `dt`. Keep this separate from runtime configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    /// Rotation speed in degrees per frame.
    pub turn_speed: f32,

    /// Acceleration along the heading while thrusting.
    pub thrust: f32,

    /// Hard cap on speed magnitude after thrust.
    pub max_speed: f32,

    /// Multiplicative drag applied as `drag^dt`.
    pub drag: f32,

    /// Collision radius against asteroids.
    pub radius: f32,

    /// Invincibility window after a spawn or respawn, in seconds.
    pub invincible_seconds: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            turn_speed: 3.8,
            thrust: 0.26,
            max_speed: 7.0,
            drag: 0.989,
            radius: 13.0,
            invincible_seconds: 3.0,
        }
    }
}
