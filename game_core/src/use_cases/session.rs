// One game session: entity collections, counters and the per-tick update.

use super::scores::ScoreBoard;
use super::types::{InitialsView, SessionSnapshot, ShipView};
use crate::domain::factories::{AsteroidFactory, make_ship};
use crate::domain::look::theme;
use crate::domain::physics::FrameStep;
use crate::domain::state::{
    ActionInput, Asteroid, Bounds, Bullet, InitialsEntry, Particle, Phase, Ship,
};
use crate::domain::systems::{collisions, movement, particles, projectiles};
use crate::domain::tuning::GameTuning;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub tuning: GameTuning,
    pub seed: u64,
    pub bounds: Bounds,
    pub touch_primary: bool,
}

/// Owns all mutable game state. Only `tick` and the phase handlers mutate it.
#[derive(Debug)]
pub struct GameSession {
    pub(super) tuning: GameTuning,
    pub(super) rng: ChaCha8Rng,
    pub(super) bounds: Bounds,
    pub(super) touch_primary: bool,

    pub(super) phase: Phase,
    pub(super) score: u32,
    pub(super) lives: u32,
    pub(super) round: u32,
    pub(super) speed_mult: f32,
    pub(super) time_left: f32,
    /// Countdown for `Dead` and `RoundOver`, in seconds.
    pub(super) phase_timer: f32,
    /// Frames until the next shot is allowed.
    pub(super) shoot_cooldown: f32,

    pub(super) ship: Ship,
    pub(super) death_position: Option<(f32, f32)>,
    pub(super) asteroids: Vec<Asteroid>,
    pub(super) bullets: Vec<Bullet>,
    pub(super) particles: Vec<Particle>,

    pub(super) initials: InitialsEntry,
    pub(super) previous_input: ActionInput,
    pub(super) scores: ScoreBoard,
    pub(super) ticks: u64,
}

impl GameSession {
    /// Session on the title screen. Asks the score service for the current table.
    pub fn new(config: SessionConfig, scores: ScoreBoard) -> Self {
        let tuning = config.tuning;
        scores.request_fetch();

        Self {
            tuning,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            bounds: config.bounds,
            touch_primary: config.touch_primary,
            phase: Phase::Title,
            score: 0,
            lives: tuning.round.start_lives,
            round: 1,
            speed_mult: 1.0,
            time_left: tuning.round.round_seconds,
            phase_timer: 0.0,
            shoot_cooldown: 0.0,
            ship: make_ship(config.bounds, 0.0),
            death_position: None,
            asteroids: Vec::new(),
            bullets: Vec::new(),
            particles: Vec::new(),
            initials: InitialsEntry::default(),
            previous_input: ActionInput::default(),
            scores,
            ticks: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Advances the session by one frame.
    ///
    /// `input` is the held state of every action; presses are derived from the
    /// previous tick. `bounds` may change between ticks.
    pub fn tick(&mut self, step: FrameStep, input: &ActionInput, bounds: Bounds) {
        self.bounds = bounds;
        self.ticks += 1;
        let pressed = input.pressed_since(&self.previous_input);
        self.previous_input = *input;

        particles::tick_particles(&mut self.particles, step.dt, self.tuning.particle.damping);

        match self.phase {
            Phase::Title | Phase::GameOver => {
                if pressed.start {
                    self.start_game();
                }
            }
            Phase::EnterInitials => self.edit_initials(&pressed),
            Phase::RoundOver => self.tick_round_over(step),
            Phase::Dead => self.tick_dead(step),
            Phase::Playing => self.tick_playing(step, input),
        }
    }

    fn tick_playing(&mut self, step: FrameStep, input: &ActionInput) {
        let tuning = self.tuning;

        self.time_left -= step.dt_secs;
        if self.time_left <= 0.0 {
            self.time_left = 0.0;
            self.end_round();
            return;
        }

        movement::tick_ship(&mut self.ship, input, step, self.bounds, &tuning.ship);
        if self.ship.thrusting {
            particles::emit_exhaust(
                &mut self.particles,
                &self.ship,
                &mut self.rng,
                &tuning.particle,
            );
        }

        projectiles::tick_bullets(
            &self.ship,
            &mut self.bullets,
            &mut self.shoot_cooldown,
            input.fire,
            step.dt,
            self.bounds,
            &tuning.bullet,
        );
        movement::drift_asteroids(&mut self.asteroids, step.dt, self.bounds);

        let factory = self.asteroid_factory();
        let report = collisions::resolve_bullet_hits(
            &mut self.bullets,
            &mut self.asteroids,
            &factory,
            &mut self.rng,
            tuning.bullet.hit_pad,
        );
        for hit in &report.hits {
            let stroke = theme(hit.color).stroke;
            particles::emit_debris(
                &mut self.particles,
                hit.x,
                hit.y,
                stroke,
                &mut self.rng,
                &tuning.particle,
            );
        }
        self.score = self.score.saturating_add(report.points());

        if self.asteroids.is_empty() {
            self.end_round();
            return;
        }

        let collision =
            collisions::find_ship_collision(&self.ship, &self.asteroids, tuning.ship.radius);
        if !self.ship.is_invincible() && collision.is_some() {
            self.kill_ship();
        }
    }

    pub(super) fn asteroid_factory(&self) -> AsteroidFactory {
        AsteroidFactory::new(self.tuning.asteroid, self.speed_mult, self.touch_primary)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            tick: self.ticks,
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            round: self.round,
            time_left: self.time_left.max(0.0),
            ship: ShipView::new(&self.ship, self.phase),
            death_position: self.death_position,
            asteroids: self.asteroids.clone(),
            bullets: self.bullets.clone(),
            particles: self.particles.clone(),
            high_scores: self.scores.table(),
            initials: (self.phase == Phase::EnterInitials).then(|| InitialsView {
                letters: self.initials.letters(),
                slot: self.initials.slot(),
            }),
        }
    }
}
