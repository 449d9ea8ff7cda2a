// Wire DTOs and conversions: the score service contract and the render
// surface offered to external hosts.

use crate::domain::high_scores::{HighScoreEntry, SubmitScore};
use crate::domain::look::{HEADS, theme};
use crate::domain::state::{Asteroid, Bullet, Particle, ParticleKind, Phase};
use crate::use_cases::{InitialsView, SessionSnapshot, ShipView};
use serde::{Deserialize, Serialize};

/// One row of the persisted high-score table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntryDto {
    pub initials: String,
    pub score: u32,
    #[serde(default = "first_round")]
    pub round: u32,
}

fn first_round() -> u32 {
    1
}

impl From<ScoreEntryDto> for HighScoreEntry {
    fn from(entry: ScoreEntryDto) -> Self {
        Self {
            initials: entry.initials,
            score: entry.score,
            round: entry.round,
        }
    }
}

impl From<&HighScoreEntry> for ScoreEntryDto {
    fn from(entry: &HighScoreEntry) -> Self {
        Self {
            initials: entry.initials.clone(),
            score: entry.score,
            round: entry.round,
        }
    }
}

/// Body of `POST /scores`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitScoreRequest {
    pub name: String,
    pub score: u32,
    pub round: u32,
}

impl From<SubmitScore> for SubmitScoreRequest {
    fn from(submission: SubmitScore) -> Self {
        Self {
            name: submission.name,
            score: submission.score,
            round: submission.round,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PhaseDto {
    Title,
    Playing,
    Dead,
    RoundOver,
    GameOver,
    EnterInitials,
}

impl From<Phase> for PhaseDto {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Title => PhaseDto::Title,
            Phase::Playing => PhaseDto::Playing,
            Phase::Dead => PhaseDto::Dead,
            Phase::RoundOver => PhaseDto::RoundOver,
            Phase::GameOver => PhaseDto::GameOver,
            Phase::EnterInitials => PhaseDto::EnterInitials,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShipDto {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub thrusting: bool,
    pub visible: bool,
}

impl From<&ShipView> for ShipDto {
    fn from(ship: &ShipView) -> Self {
        Self {
            x: ship.x,
            y: ship.y,
            angle: ship.angle,
            thrusting: ship.thrusting,
            visible: ship.visible,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AsteroidDto {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub size: &'static str,
    pub rotation: f32,
    pub outline: Vec<[f32; 2]>,
    pub stroke: &'static str,
    pub fill: &'static str,
    pub head: &'static str,
}

impl From<&Asteroid> for AsteroidDto {
    fn from(asteroid: &Asteroid) -> Self {
        let colors = theme(asteroid.look.color);
        Self {
            x: asteroid.body.x,
            y: asteroid.body.y,
            radius: asteroid.body.radius,
            size: asteroid.body.size.as_str(),
            rotation: asteroid.look.rotation,
            outline: asteroid.look.outline.iter().map(|&(x, y)| [x, y]).collect(),
            stroke: colors.stroke,
            fill: colors.fill,
            head: HEADS[asteroid.look.head % HEADS.len()],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BulletDto {
    pub x: f32,
    pub y: f32,
}

impl From<&Bullet> for BulletDto {
    fn from(bullet: &Bullet) -> Self {
        Self {
            x: bullet.x,
            y: bullet.y,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleDto {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: &'static str,
    pub alpha: f32,
    pub kind: &'static str,
}

impl From<&Particle> for ParticleDto {
    fn from(particle: &Particle) -> Self {
        Self {
            x: particle.x,
            y: particle.y,
            size: particle.size,
            color: particle.color,
            alpha: particle.alpha(),
            kind: match particle.kind {
                ParticleKind::Exhaust => "exhaust",
                ParticleKind::Debris => "debris",
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InitialsDto {
    pub letters: String,
    pub slot: usize,
}

impl From<&InitialsView> for InitialsDto {
    fn from(view: &InitialsView) -> Self {
        Self {
            letters: view.letters.clone(),
            slot: view.slot,
        }
    }
}

/// Render surface for one tick.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshotDto {
    pub tick: u64,
    pub phase: PhaseDto,
    pub score: u32,
    pub lives: u32,
    pub round: u32,
    pub time_left: f32,
    pub ship: ShipDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_position: Option<[f32; 2]>,
    pub asteroids: Vec<AsteroidDto>,
    pub bullets: Vec<BulletDto>,
    pub particles: Vec<ParticleDto>,
    pub high_scores: Vec<ScoreEntryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<InitialsDto>,
}

impl From<&SessionSnapshot> for SessionSnapshotDto {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            tick: snapshot.tick,
            phase: snapshot.phase.into(),
            score: snapshot.score,
            lives: snapshot.lives,
            round: snapshot.round,
            time_left: snapshot.time_left,
            ship: ShipDto::from(&snapshot.ship),
            death_position: snapshot.death_position.map(|(x, y)| [x, y]),
            asteroids: snapshot.asteroids.iter().map(AsteroidDto::from).collect(),
            bullets: snapshot.bullets.iter().map(BulletDto::from).collect(),
            particles: snapshot.particles.iter().map(ParticleDto::from).collect(),
            high_scores: snapshot.high_scores.iter().map(ScoreEntryDto::from).collect(),
            initials: snapshot.initials.as_ref().map(InitialsDto::from),
        }
    }
}
