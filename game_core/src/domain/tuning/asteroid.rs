use crate::domain::state::AsteroidSize;
use serde::Deserialize;

/// One value per asteroid size class.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SizeTable<T> {
    pub big: T,
    pub mid: T,
    pub small: T,
}

impl<T: Copy> SizeTable<T> {
    pub fn get(&self, size: AsteroidSize) -> T {
        match size {
            AsteroidSize::Big => self.big,
            AsteroidSize::Mid => self.mid,
            AsteroidSize::Small => self.small,
        }
    }
}

/// Gameplay tuning for asteroid heads.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct AsteroidTuning {
    /// Collision radius per size class.
    pub radius: SizeTable<f32>,

    /// Score awarded for destroying each size class.
    pub points: SizeTable<u32>,

    /// Drift speed per frame before the round speed multiplier.
    pub base_speed: SizeTable<f32>,

    /// Minimum distance between a fresh big asteroid and the ship.
    pub spawn_clearance: f32,

    /// Placement attempts before the spawner settles for its best candidate.
    pub spawn_attempts: u32,

    /// Radius multiplier for touch-primary devices.
    pub touch_size_scale: f32,

    /// Full width of the random spin range, radians per frame.
    pub spin_range: f32,

    /// Vertex count range for the silhouette outline (inclusive).
    pub outline_vertices: [u32; 2],

    /// Per-vertex radius jitter as a fraction of the nominal radius.
    pub outline_jitter: [f32; 2],
}

impl Default for AsteroidTuning {
    fn default() -> Self {
        Self {
            radius: SizeTable {
                big: 52.0,
                mid: 26.0,
                small: 13.0,
            },
            points: SizeTable {
                big: 20,
                mid: 50,
                small: 100,
            },
            base_speed: SizeTable {
                big: 1.1,
                mid: 1.8,
                small: 2.7,
            },
            spawn_clearance: 160.0,
            spawn_attempts: 64,
            touch_size_scale: 0.75,
            spin_range: 0.045,
            outline_vertices: [8, 12],
            outline_jitter: [0.68, 1.0],
        }
    }
}
