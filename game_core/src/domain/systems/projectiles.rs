use crate::domain::factories::make_bullet;
use crate::domain::physics::wrap;
use crate::domain::state::{Bounds, Bullet, Ship};
use crate::domain::tuning::BulletTuning;

/// Fires from the ship when allowed, then integrates and ages every bullet.
///
/// `cooldown` is in frames and persists between ticks. Returns true when a shot
/// left the muzzle this tick.
pub fn tick_bullets(
    ship: &Ship,
    bullets: &mut Vec<Bullet>,
    cooldown: &mut f32,
    fire: bool,
    dt: f32,
    bounds: Bounds,
    cfg: &BulletTuning,
) -> bool {
    if *cooldown > 0.0 {
        *cooldown -= dt;
    }

    let fired = fire && *cooldown <= 0.0 && bullets.len() < cfg.max_in_flight;
    if fired {
        bullets.push(make_bullet(ship, cfg));
        *cooldown = cfg.cooldown;
    }

    // Integrate projectile movement and lifetimes.
    for b in bullets.iter_mut() {
        b.x = wrap(b.x + b.vx * dt, bounds.width());
        b.y = wrap(b.y + b.vy * dt, bounds.height());
        b.life -= dt;
    }
    bullets.retain(|b| b.life > 0.0);

    fired
}
