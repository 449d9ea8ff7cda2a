// Scripted input host for headless runs: aims at the nearest asteroid and fires,
// and taps through the menus.

use crate::domain::physics::distance;
use crate::domain::state::{ActionInput, Phase};
use crate::use_cases::SessionSnapshot;
use std::f32::consts::{PI, TAU};
use tokio::sync::{broadcast, watch};
use tracing::{debug, warn};

/// Heading error, in radians, below which the pilot stops turning.
const AIM_DEADBAND: f32 = 0.05;
/// Heading error, in radians, below which the pilot pulls the trigger.
const FIRE_CONE: f32 = 0.3;

#[derive(Debug, Default)]
pub struct Pilot {
    ticks: u64,
}

impl Pilot {
    /// Input for the tick after `snapshot`.
    ///
    /// Menu actions are edge-triggered, so the pilot alternates pressed and
    /// released frames.
    pub fn decide(&mut self, snapshot: &SessionSnapshot) -> ActionInput {
        self.ticks += 1;
        let tap = self.ticks % 2 == 0;

        match snapshot.phase {
            Phase::Title | Phase::GameOver => ActionInput {
                start: tap,
                ..Default::default()
            },
            Phase::EnterInitials => ActionInput {
                confirm: tap,
                ..Default::default()
            },
            Phase::Playing => self.aim(snapshot),
            Phase::Dead | Phase::RoundOver => ActionInput::default(),
        }
    }

    fn aim(&self, snapshot: &SessionSnapshot) -> ActionInput {
        let ship = &snapshot.ship;
        let target = snapshot.asteroids.iter().min_by(|a, b| {
            let da = distance(ship.x, ship.y, a.body.x, a.body.y);
            let db = distance(ship.x, ship.y, b.body.x, b.body.y);
            da.total_cmp(&db)
        });
        let Some(target) = target else {
            return ActionInput::default();
        };

        let wanted = (target.body.y - ship.y).atan2(target.body.x - ship.x);
        let error = heading_error(ship.angle, wanted);

        ActionInput {
            turn_left: error < -AIM_DEADBAND,
            turn_right: error > AIM_DEADBAND,
            fire: error.abs() < FIRE_CONE,
            ..Default::default()
        }
    }
}

/// Signed turn from `current` to `wanted`, normalised into `[-PI, PI)`.
fn heading_error(current: f32, wanted: f32) -> f32 {
    (wanted - current + PI).rem_euclid(TAU) - PI
}

/// Feeds pilot decisions back into the session's input channel.
pub async fn pilot_task(
    mut snapshot_rx: broadcast::Receiver<SessionSnapshot>,
    input_tx: watch::Sender<ActionInput>,
) {
    let mut pilot = Pilot::default();
    loop {
        match snapshot_rx.recv().await {
            Ok(snapshot) => {
                input_tx.send_replace(pilot.decide(&snapshot));
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "pilot lagged; skipping to latest snapshot");
            }
            Err(broadcast::error::RecvError::Closed) => {
                debug!("snapshot channel closed; pilot exiting");
                break;
            }
        }
    }
}
