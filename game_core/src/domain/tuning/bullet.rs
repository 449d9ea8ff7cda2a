use serde::Deserialize;

/// Gameplay tuning for bullets.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    /// Muzzle speed along the ship heading, per frame.
    pub speed: f32,

    /// Lifetime in frames before the bullet is despawned.
    pub life: f32,

    /// Maximum bullets in flight at once.
    pub max_in_flight: usize,

    /// Frames between shots.
    pub cooldown: f32,

    /// Distance ahead of the ship centre where bullets appear.
    pub muzzle_offset: f32,

    /// Fraction of ship velocity inherited by a new bullet.
    pub inherit_velocity: f32,

    /// Extra reach added to the asteroid radius for hit tests.
    pub hit_pad: f32,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: 13.0,
            life: 50.0,
            max_in_flight: 6,
            cooldown: 10.0,
            muzzle_offset: 18.0,
            inherit_velocity: 0.25,
            hit_pad: 3.0,
        }
    }
}
