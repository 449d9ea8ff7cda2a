// Wrap-around coordinates, drag and frame-step helpers.

use rand::Rng;

/// Nominal frame rate the per-frame tuning values are expressed in.
pub const NOMINAL_FPS: f32 = 60.0;

/// Longest real-time gap fed into one physics step.
pub const MAX_FRAME_SECS: f32 = 0.1;

/// Elapsed time for one tick, in seconds and in nominal frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    pub dt_secs: f32,
    pub dt: f32,
}

impl FrameStep {
    /// Clamps elapsed time into `[0, MAX_FRAME_SECS]`; anything beyond is dropped.
    pub fn from_elapsed_secs(elapsed: f32) -> Self {
        let dt_secs = if elapsed.is_finite() {
            elapsed.clamp(0.0, MAX_FRAME_SECS)
        } else {
            0.0
        };
        Self {
            dt_secs,
            dt: dt_secs * NOMINAL_FPS,
        }
    }

    /// Exactly one nominal frame.
    pub fn nominal() -> Self {
        Self::from_elapsed_secs(1.0 / NOMINAL_FPS)
    }
}

/// Toroidal wrap into `[0, bound)`.
pub fn wrap(value: f32, bound: f32) -> f32 {
    if (0.0..bound).contains(&value) {
        return value;
    }
    let wrapped = value.rem_euclid(bound);
    // rem_euclid can round up to `bound` for tiny negative inputs.
    if wrapped >= bound { 0.0 } else { wrapped }
}

/// Frame-rate independent multiplicative drag.
pub fn apply_drag(vx: f32, vy: f32, drag: f32, dt: f32) -> (f32, f32) {
    let factor = drag.powf(dt);
    (vx * factor, vy * factor)
}

/// Rescales the vector to `max` when its magnitude exceeds it.
pub fn clamp_speed(vx: f32, vy: f32, max: f32) -> (f32, f32) {
    let speed = vx.hypot(vy);
    if speed > max {
        (vx / speed * max, vy / speed * max)
    } else {
        (vx, vy)
    }
}

pub fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    (ax - bx).hypot(ay - by)
}

/// Uniform sample from a `[min, max]` range; a degenerate range returns `min`.
pub fn sample(rng: &mut impl Rng, range: [f32; 2]) -> f32 {
    range[0] + rng.gen_range(0.0f32..1.0) * (range[1] - range[0])
}

pub fn random_angle(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..std::f32::consts::TAU)
}
