use crate::domain::physics::FrameStep;

/// Turns host frame timestamps into physics steps.
///
/// Stalls longer than `MAX_FRAME_SECS` are dropped rather than replayed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step since the previous timestamp; the first call yields a zero step.
    pub fn advance(&mut self, timestamp_ms: f64) -> FrameStep {
        let elapsed_ms = match self.last_ms {
            Some(last) => timestamp_ms - last,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        FrameStep::from_elapsed_secs((elapsed_ms / 1000.0) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::physics::MAX_FRAME_SECS;

    #[test]
    fn when_first_frame_arrives_then_step_is_zero() {
        let mut clock = FrameClock::new();

        let step = clock.advance(12_345.0);

        assert_eq!(step.dt_secs, 0.0);
        assert_eq!(step.dt, 0.0);
    }

    #[test]
    fn when_frames_arrive_at_sixty_hz_then_dt_is_one() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);

        let step = clock.advance(1000.0 / 60.0);

        assert!((step.dt - 1.0).abs() < 1e-4);
    }

    #[test]
    fn when_host_stalls_then_step_is_clamped() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);

        let step = clock.advance(5_000.0);

        assert_eq!(step.dt_secs, MAX_FRAME_SECS);
        assert!((step.dt - 6.0).abs() < 1e-4);
    }

    #[test]
    fn when_timestamps_go_backwards_then_step_is_zero() {
        let mut clock = FrameClock::new();
        clock.advance(100.0);

        let step = clock.advance(90.0);

        assert_eq!(step.dt_secs, 0.0);
        // The clock re-anchors on the latest timestamp.
        assert!((clock.advance(90.0 + 1000.0 / 60.0).dt - 1.0).abs() < 1e-4);
    }
}
