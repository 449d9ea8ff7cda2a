// Constructors for ships, asteroids and bullets.

use crate::domain::look::{HEADS, PALETTE};
use crate::domain::physics::{distance, random_angle, sample, wrap};
use crate::domain::state::{
    Asteroid, AsteroidBody, AsteroidLook, AsteroidSize, Bounds, Bullet, Ship,
};
use crate::domain::tuning::{AsteroidTuning, BulletTuning};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Ship at the viewport centre, pointing up, at rest.
///
/// Pass `0.0` for the title-screen placeholder and the tuned window for real spawns.
pub fn make_ship(bounds: Bounds, invincible_secs: f32) -> Ship {
    let (x, y) = bounds.center();
    Ship {
        x,
        y,
        angle: -FRAC_PI_2,
        vx: 0.0,
        vy: 0.0,
        invincible_secs,
        thrusting: false,
    }
}

/// Bullet leaving the ship's nose.
pub fn make_bullet(ship: &Ship, cfg: &BulletTuning) -> Bullet {
    let (dir_x, dir_y) = (ship.angle.cos(), ship.angle.sin());
    Bullet {
        x: ship.x + dir_x * cfg.muzzle_offset,
        y: ship.y + dir_y * cfg.muzzle_offset,
        vx: dir_x * cfg.speed + ship.vx * cfg.inherit_velocity,
        vy: dir_y * cfg.speed + ship.vy * cfg.inherit_velocity,
        life: cfg.life,
    }
}

pub fn random_color(rng: &mut impl Rng) -> usize {
    rng.gen_range(0..PALETTE.len())
}

/// Builds asteroids for one round: speed multiplier and device scale are fixed
/// when the round starts.
#[derive(Debug, Clone, Copy)]
pub struct AsteroidFactory {
    tuning: AsteroidTuning,
    speed_mult: f32,
    size_scale: f32,
}

impl AsteroidFactory {
    pub fn new(tuning: AsteroidTuning, speed_mult: f32, touch_primary: bool) -> Self {
        let size_scale = if touch_primary {
            tuning.touch_size_scale
        } else {
            1.0
        };
        Self {
            tuning,
            speed_mult,
            size_scale,
        }
    }

    pub fn radius(&self, size: AsteroidSize) -> f32 {
        self.tuning.radius.get(size) * self.size_scale
    }

    pub fn points(&self, size: AsteroidSize) -> u32 {
        self.tuning.points.get(size)
    }

    pub fn speed(&self, size: AsteroidSize) -> f32 {
        self.tuning.base_speed.get(size) * self.speed_mult
    }

    /// Asteroid at `(x, y)` with a random heading and a fresh silhouette.
    pub fn make(
        &self,
        rng: &mut impl Rng,
        x: f32,
        y: f32,
        size: AsteroidSize,
        color: usize,
    ) -> Asteroid {
        let radius = self.radius(size);
        let speed = self.speed(size);
        let heading = random_angle(rng);

        Asteroid {
            body: AsteroidBody {
                x,
                y,
                vx: heading.cos() * speed,
                vy: heading.sin() * speed,
                radius,
                size,
            },
            look: AsteroidLook {
                rotation: random_angle(rng),
                spin: (rng.gen_range(0.0f32..1.0) - 0.5) * self.tuning.spin_range,
                outline: self.outline(rng, radius),
                color,
                head: rng.gen_range(0..HEADS.len()),
            },
        }
    }

    fn outline(&self, rng: &mut impl Rng, radius: f32) -> Vec<(f32, f32)> {
        let [min_vertices, max_vertices] = self.tuning.outline_vertices;
        let count = rng.gen_range(min_vertices..=max_vertices.max(min_vertices)).max(3);
        (0..count)
            .map(|i| {
                let angle = i as f32 / count as f32 * TAU;
                let len = radius * sample(rng, self.tuning.outline_jitter);
                (angle.cos() * len, angle.sin() * len)
            })
            .collect()
    }

    /// Big asteroid placed at least `spawn_clearance` away from `avoid`.
    ///
    /// Viewports too small to honour the clearance get the farthest candidate
    /// found within `spawn_attempts`.
    pub fn spawn_big(&self, rng: &mut impl Rng, bounds: Bounds, avoid: (f32, f32)) -> Asteroid {
        let mut best = (0.0, 0.0);
        let mut best_distance = f32::MIN;

        for _ in 0..self.tuning.spawn_attempts.max(1) {
            let x = wrap(rng.gen_range(0.0..bounds.width()), bounds.width());
            let y = wrap(rng.gen_range(0.0..bounds.height()), bounds.height());
            let d = distance(x, y, avoid.0, avoid.1);
            if d > best_distance {
                best = (x, y);
                best_distance = d;
            }
            if d >= self.tuning.spawn_clearance {
                break;
            }
        }

        let color = random_color(rng);
        self.make(rng, best.0, best.1, AsteroidSize::Big, color)
    }
}
