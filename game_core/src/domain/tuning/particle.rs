use serde::Deserialize;

/// Cosmetic particle tuning. None of these values affect gameplay.
///
/// Ranges are `[min, max]` and sampled uniformly.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    /// Per-frame velocity damping shared by every particle.
    pub damping: f32,

    pub exhaust_chance: f64,
    pub exhaust_offset: f32,
    pub exhaust_spread: f32,
    pub exhaust_speed: [f32; 2],
    pub exhaust_life: [f32; 2],
    pub exhaust_size: [f32; 2],

    pub debris_count: [u32; 2],
    pub debris_speed: [f32; 2],
    pub debris_life: [f32; 2],
    pub debris_size: [f32; 2],

    pub explosion_count: u32,
    pub explosion_speed: [f32; 2],
    pub explosion_life: [f32; 2],
    pub explosion_size: [f32; 2],
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            damping: 0.975,
            exhaust_chance: 0.6,
            exhaust_offset: 12.0,
            exhaust_spread: 0.55,
            exhaust_speed: [2.5, 5.0],
            exhaust_life: [14.0, 24.0],
            exhaust_size: [2.5, 4.5],
            debris_count: [14, 21],
            debris_speed: [1.2, 4.7],
            debris_life: [28.0, 60.0],
            debris_size: [1.5, 4.0],
            explosion_count: 24,
            explosion_speed: [2.0, 7.0],
            explosion_life: [35.0, 70.0],
            explosion_size: [2.0, 5.0],
        }
    }
}
