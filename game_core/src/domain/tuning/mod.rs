// Gameplay tuning, grouped by concern.
//
// Runtime settings (frame rate, urls, channel sizes) live in frameworks::config.

pub mod asteroid;
pub mod bullet;
pub mod particle;
pub mod round;
pub mod ship;

pub use asteroid::{AsteroidTuning, SizeTable};
pub use bullet::BulletTuning;
pub use particle::ParticleTuning;
pub use round::RoundTuning;
pub use ship::ShipTuning;

use serde::Deserialize;
use std::fmt;

/// Immutable tuning data for one session.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct GameTuning {
    pub ship: ShipTuning,
    pub bullet: BulletTuning,
    pub asteroid: AsteroidTuning,
    pub round: RoundTuning,
    pub particle: ParticleTuning,
}

#[derive(Debug)]
pub enum TuningError {
    Read(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Read(err) => write!(f, "failed to read tuning file: {err}"),
            TuningError::Parse(err) => write!(f, "failed to parse tuning file: {err}"),
        }
    }
}

impl std::error::Error for TuningError {}

impl GameTuning {
    /// Parses a TOML document; missing tables and keys keep their defaults.
    pub fn from_toml(source: &str) -> Result<Self, TuningError> {
        toml::from_str(source).map_err(TuningError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_toml_is_empty_then_defaults_are_kept() {
        let tuning = GameTuning::from_toml("").expect("empty toml should parse");

        assert_eq!(tuning.ship.max_speed, 7.0);
        assert_eq!(tuning.bullet.max_in_flight, 6);
        assert_eq!(tuning.asteroid.points.small, 100);
        assert_eq!(tuning.round.start_lives, 5);
    }

    #[test]
    fn when_toml_overrides_a_subset_then_other_fields_keep_defaults() {
        let tuning = GameTuning::from_toml(
            r#"
            [ship]
            max_speed = 9.5

            [round]
            start_lives = 3
            "#,
        )
        .expect("partial toml should parse");

        assert_eq!(tuning.ship.max_speed, 9.5);
        assert_eq!(tuning.ship.thrust, 0.26);
        assert_eq!(tuning.round.start_lives, 3);
        assert_eq!(tuning.round.round_seconds, 60.0);
    }

    #[test]
    fn when_toml_has_wrong_types_then_returns_parse_error() {
        let result = GameTuning::from_toml("[ship]\nmax_speed = \"fast\"\n");

        assert!(matches!(result, Err(TuningError::Parse(_))));
    }

    #[test]
    fn when_round_advances_then_speed_and_count_scale() {
        let round = RoundTuning::default();

        assert_eq!(round.speed_multiplier(1), 1.0);
        assert!((round.speed_multiplier(3) - 1.44).abs() < 1e-6);
        assert_eq!(round.asteroid_count(1), 4);
        assert_eq!(round.asteroid_count(5), 8);
    }
}
