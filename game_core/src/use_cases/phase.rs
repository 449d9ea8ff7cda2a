// Phase transitions and the timers that drive them.

use super::session::GameSession;
use crate::domain::factories::make_ship;
use crate::domain::high_scores::SubmitScore;
use crate::domain::physics::FrameStep;
use crate::domain::state::{ActionInput, Phase};
use crate::domain::systems::particles;
use tracing::info;

impl GameSession {
    /// Fresh game from the title or game-over screen.
    pub(super) fn start_game(&mut self) {
        self.score = 0;
        self.lives = self.tuning.round.start_lives;
        self.round = 1;
        info!(lives = self.lives, "game started");
        self.init_round();
    }

    /// Resets every collection and spawns the round's big asteroids.
    pub(super) fn init_round(&mut self) {
        let round = self.tuning.round;

        self.time_left = round.round_seconds;
        self.bullets.clear();
        self.particles.clear();
        self.asteroids.clear();
        self.shoot_cooldown = 0.0;
        self.death_position = None;
        self.speed_mult = round.speed_multiplier(self.round);
        self.ship = make_ship(self.bounds, self.tuning.ship.invincible_seconds);

        let count = round.asteroid_count(self.round);
        let factory = self.asteroid_factory();
        let avoid = (self.ship.x, self.ship.y);
        for _ in 0..count {
            let asteroid = factory.spawn_big(&mut self.rng, self.bounds, avoid);
            self.asteroids.push(asteroid);
        }

        info!(
            round = self.round,
            asteroids = count,
            speed_mult = self.speed_mult,
            "round started"
        );
        self.set_phase(Phase::Playing);
    }

    /// Timer expiry or early clear.
    pub(super) fn end_round(&mut self) {
        self.phase_timer = self.tuning.round.round_end_delay;
        info!(
            round = self.round,
            score = self.score,
            cleared = self.asteroids.is_empty(),
            "round over"
        );
        self.set_phase(Phase::RoundOver);
    }

    pub(super) fn kill_ship(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.death_position = Some((self.ship.x, self.ship.y));
        particles::emit_ship_explosion(
            &mut self.particles,
            self.ship.x,
            self.ship.y,
            &mut self.rng,
            &self.tuning.particle,
        );
        self.phase_timer = self.tuning.round.respawn_delay;
        self.set_phase(Phase::Dead);
    }

    pub(super) fn tick_dead(&mut self, step: FrameStep) {
        self.phase_timer -= step.dt_secs;
        if self.phase_timer > 0.0 {
            return;
        }

        if self.lives > 0 {
            self.ship = make_ship(self.bounds, self.tuning.ship.invincible_seconds);
            self.set_phase(Phase::Playing);
        } else if self.scores.qualifies(self.score) {
            self.initials.reset();
            self.set_phase(Phase::EnterInitials);
        } else {
            info!(score = self.score, round = self.round, "game over");
            self.set_phase(Phase::GameOver);
        }
    }

    pub(super) fn tick_round_over(&mut self, step: FrameStep) {
        self.phase_timer -= step.dt_secs;
        if self.phase_timer <= 0.0 {
            self.round += 1;
            self.init_round();
        }
    }

    /// Applies edge-triggered editor actions.
    pub(super) fn edit_initials(&mut self, pressed: &ActionInput) {
        if pressed.letter_up {
            self.initials.cycle(1);
        }
        if pressed.letter_down {
            self.initials.cycle(-1);
        }
        if pressed.slot_left {
            self.initials.move_left();
        }
        if pressed.slot_right {
            self.initials.move_right();
        }
        if pressed.confirm {
            self.confirm_initials();
        }
    }

    fn confirm_initials(&mut self) {
        let submission = SubmitScore {
            name: self.initials.letters(),
            score: self.score,
            round: self.round,
        };
        info!(
            initials = %submission.name,
            score = submission.score,
            round = submission.round,
            "submitting high score"
        );
        self.scores.submit(submission);
        self.initials.reset();
        self.set_phase(Phase::Title);
    }

    fn set_phase(&mut self, next: Phase) {
        if self.phase != next {
            info!(
                from = ?self.phase,
                to = ?next,
                score = self.score,
                lives = self.lives,
                round = self.round,
                "phase changed"
            );
        }
        self.phase = next;
    }
}
