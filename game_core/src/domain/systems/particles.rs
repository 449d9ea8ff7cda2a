use crate::domain::look::{EXHAUST_COLORS, HULL_COLORS};
use crate::domain::physics::{random_angle, sample};
use crate::domain::state::{Particle, ParticleKind, Ship};
use crate::domain::tuning::ParticleTuning;
use rand::Rng;
use std::f32::consts::PI;

/// Ages every particle and drops the expired ones.
pub fn tick_particles(particles: &mut Vec<Particle>, dt: f32, damping: f32) {
    for p in particles.iter_mut() {
        p.x += p.vx * dt;
        p.y += p.vy * dt;
        p.vx *= damping;
        p.vy *= damping;
        p.life -= dt;
    }
    particles.retain(|p| p.life > 0.0);
}

/// Occasional flame puff behind a thrusting ship.
pub fn emit_exhaust(
    particles: &mut Vec<Particle>,
    ship: &Ship,
    rng: &mut impl Rng,
    cfg: &ParticleTuning,
) {
    if !rng.gen_bool(cfg.exhaust_chance.clamp(0.0, 1.0)) {
        return;
    }

    let back = ship.angle + PI;
    let angle = back + (rng.gen_range(0.0f32..1.0) - 0.5) * cfg.exhaust_spread;
    let speed = sample(rng, cfg.exhaust_speed);
    particles.push(Particle {
        x: ship.x + back.cos() * cfg.exhaust_offset,
        y: ship.y + back.sin() * cfg.exhaust_offset,
        vx: angle.cos() * speed,
        vy: angle.sin() * speed,
        life: sample(rng, cfg.exhaust_life),
        max_life: cfg.exhaust_life[1],
        size: sample(rng, cfg.exhaust_size),
        color: EXHAUST_COLORS[rng.gen_range(0..EXHAUST_COLORS.len())],
        kind: ParticleKind::Exhaust,
    });
}

/// Debris burst for a destroyed asteroid, tinted with its stroke colour.
pub fn emit_debris(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    color: &'static str,
    rng: &mut impl Rng,
    cfg: &ParticleTuning,
) {
    let [min, max] = cfg.debris_count;
    let count = rng.gen_range(min..=max.max(min));
    let shape = BurstShape {
        speed: cfg.debris_speed,
        life: cfg.debris_life,
        size: cfg.debris_size,
    };
    burst(particles, x, y, count, rng, shape, |_| color);
}

/// Ship break-up at the death position.
pub fn emit_ship_explosion(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    rng: &mut impl Rng,
    cfg: &ParticleTuning,
) {
    let shape = BurstShape {
        speed: cfg.explosion_speed,
        life: cfg.explosion_life,
        size: cfg.explosion_size,
    };
    burst(particles, x, y, cfg.explosion_count, rng, shape, |rng| {
        HULL_COLORS[rng.gen_range(0..HULL_COLORS.len())]
    });
}

struct BurstShape {
    speed: [f32; 2],
    life: [f32; 2],
    size: [f32; 2],
}

fn burst<R: Rng>(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    count: u32,
    rng: &mut R,
    shape: BurstShape,
    mut color: impl FnMut(&mut R) -> &'static str,
) {
    particles.reserve(count as usize);
    for _ in 0..count {
        let angle = random_angle(rng);
        let speed = sample(rng, shape.speed);
        particles.push(Particle {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            life: sample(rng, shape.life),
            max_life: shape.life[1],
            size: sample(rng, shape.size),
            color: color(rng),
            kind: ParticleKind::Debris,
        });
    }
}
