use serde::Deserialize;

/// Round pacing, lives and difficulty scaling.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct RoundTuning {
    /// Length of a round in seconds.
    pub round_seconds: f32,

    /// Lives at the start of a game.
    pub start_lives: u32,

    /// Delay between a ship death and the next phase, in seconds.
    pub respawn_delay: f32,

    /// Display delay after a round ends, in seconds.
    pub round_end_delay: f32,

    /// Big asteroids per round on top of the round number.
    pub base_asteroids: u32,

    /// Speed multiplier increase per round.
    pub speed_step: f32,
}

impl Default for RoundTuning {
    fn default() -> Self {
        Self {
            round_seconds: 60.0,
            start_lives: 5,
            respawn_delay: 2.2,
            round_end_delay: 3.2,
            base_asteroids: 3,
            speed_step: 0.22,
        }
    }
}

impl RoundTuning {
    pub fn speed_multiplier(&self, round: u32) -> f32 {
        1.0 + round.saturating_sub(1) as f32 * self.speed_step
    }

    pub fn asteroid_count(&self, round: u32) -> u32 {
        self.base_asteroids + round
    }
}
