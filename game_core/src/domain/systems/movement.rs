use crate::domain::physics::{FrameStep, apply_drag, clamp_speed, wrap};
use crate::domain::state::{ActionInput, Asteroid, Bounds, Ship};
use crate::domain::tuning::ShipTuning;

pub fn tick_ship(
    ship: &mut Ship,
    input: &ActionInput,
    step: FrameStep,
    bounds: Bounds,
    cfg: &ShipTuning,
) {
    let dt = step.dt;

    // rotation
    let turn = cfg.turn_speed.to_radians() * dt;
    if input.turn_left {
        ship.angle -= turn;
    }
    if input.turn_right {
        ship.angle += turn;
    }

    // thrust, capped right after acceleration
    ship.thrusting = input.thrust;
    if ship.thrusting {
        ship.vx += ship.angle.cos() * cfg.thrust * dt;
        ship.vy += ship.angle.sin() * cfg.thrust * dt;
        (ship.vx, ship.vy) = clamp_speed(ship.vx, ship.vy, cfg.max_speed);
    }

    (ship.vx, ship.vy) = apply_drag(ship.vx, ship.vy, cfg.drag, dt);

    // position integrate + world wrap
    ship.x = wrap(ship.x + ship.vx * dt, bounds.width());
    ship.y = wrap(ship.y + ship.vy * dt, bounds.height());

    if ship.invincible_secs > 0.0 {
        ship.invincible_secs -= step.dt_secs;
    }
}

/// Straight-line drift plus cosmetic spin.
pub fn drift_asteroids(asteroids: &mut [Asteroid], dt: f32, bounds: Bounds) {
    for a in asteroids.iter_mut() {
        a.body.x = wrap(a.body.x + a.body.vx * dt, bounds.width());
        a.body.y = wrap(a.body.y + a.body.vy * dt, bounds.height());
        a.look.rotation += a.look.spin * dt;
    }
}
