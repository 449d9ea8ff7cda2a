use crate::domain::factories::{AsteroidFactory, random_color};
use crate::domain::physics::distance;
use crate::domain::state::{Asteroid, AsteroidSize, Bullet, Ship};
use rand::Rng;
use tracing::debug;

/// One asteroid destroyed by a bullet this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub x: f32,
    pub y: f32,
    pub size: AsteroidSize,
    pub color: usize,
    pub points: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitReport {
    pub hits: Vec<Hit>,
    pub spawned: usize,
}

impl HitReport {
    pub fn points(&self) -> u32 {
        self.hits.iter().map(|h| h.points).sum()
    }
}

/// Bullet vs asteroid resolution against the pre-frame asteroid set.
///
/// Bullets are scanned in order and each claims at most one asteroid; an
/// asteroid claimed earlier in the frame is skipped by later bullets, which
/// stay in flight. Fragments are appended after all removals, so they are never
/// targets in the frame that created them.
pub fn resolve_bullet_hits(
    bullets: &mut Vec<Bullet>,
    asteroids: &mut Vec<Asteroid>,
    factory: &AsteroidFactory,
    rng: &mut impl Rng,
    hit_pad: f32,
) -> HitReport {
    let mut dead_bullets = vec![false; bullets.len()];
    let mut dead_rocks = vec![false; asteroids.len()];
    let mut fragments = Vec::new();
    let mut report = HitReport::default();

    for (bi, b) in bullets.iter().enumerate() {
        for (ai, a) in asteroids.iter().enumerate() {
            if dead_rocks[ai] {
                continue;
            }
            let body = &a.body;
            if distance(b.x, b.y, body.x, body.y) >= body.radius + hit_pad {
                continue;
            }

            dead_bullets[bi] = true;
            dead_rocks[ai] = true;

            let points = factory.points(body.size);
            report.hits.push(Hit {
                x: body.x,
                y: body.y,
                size: body.size,
                color: a.look.color,
                points,
            });
            debug!(size = body.size.as_str(), points, bullet = bi, "asteroid destroyed");

            if let Some(next) = body.size.split_into() {
                let fresh = random_color(rng);
                fragments.push(factory.make(rng, body.x, body.y, next, a.look.color));
                fragments.push(factory.make(rng, body.x, body.y, next, fresh));
            }
            break;
        }
    }

    let mut index = 0;
    bullets.retain(|_| {
        let keep = !dead_bullets[index];
        index += 1;
        keep
    });
    let mut index = 0;
    asteroids.retain(|_| {
        let keep = !dead_rocks[index];
        index += 1;
        keep
    });

    report.spawned = fragments.len();
    asteroids.extend(fragments);
    report
}

/// Index of the first asteroid overlapping the ship, if any.
pub fn find_ship_collision(ship: &Ship, asteroids: &[Asteroid], ship_radius: f32) -> Option<usize> {
    asteroids.iter().position(|a| {
        distance(ship.x, ship.y, a.body.x, a.body.y) < a.body.radius + ship_radius
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factories::make_ship;
    use crate::domain::state::Bounds;
    use crate::domain::tuning::AsteroidTuning;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn factory() -> AsteroidFactory {
        AsteroidFactory::new(AsteroidTuning::default(), 1.0, false)
    }

    fn bullet_at(x: f32, y: f32) -> Bullet {
        Bullet {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            life: 10.0,
        }
    }

    fn rock(rng: &mut ChaCha8Rng, x: f32, y: f32, size: AsteroidSize, color: usize) -> Asteroid {
        factory().make(rng, x, y, size, color)
    }

    #[test]
    fn when_big_asteroid_is_hit_then_two_mids_replace_it() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut asteroids = vec![
            rock(&mut rng, 100.0, 100.0, AsteroidSize::Big, 2),
            rock(&mut rng, 500.0, 500.0, AsteroidSize::Small, 4),
        ];
        let mut bullets = vec![bullet_at(110.0, 100.0)];

        let report = resolve_bullet_hits(&mut bullets, &mut asteroids, &factory(), &mut rng, 3.0);

        assert!(bullets.is_empty());
        assert_eq!(report.hits.len(), 1);
        assert_eq!(report.points(), 20);
        assert_eq!(report.spawned, 2);
        // previous count - 1 destroyed + 2 replacements
        assert_eq!(asteroids.len(), 3);
        let mids: Vec<_> = asteroids
            .iter()
            .filter(|a| a.body.size == AsteroidSize::Mid)
            .collect();
        assert_eq!(mids.len(), 2);
        assert_eq!(mids[0].look.color, 2);
        for mid in mids {
            assert_eq!((mid.body.x, mid.body.y), (100.0, 100.0));
        }
    }

    #[test]
    fn when_mid_asteroid_is_hit_then_two_smalls_replace_it() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut asteroids = vec![rock(&mut rng, 100.0, 100.0, AsteroidSize::Mid, 0)];
        let mut bullets = vec![bullet_at(100.0, 100.0)];

        let report = resolve_bullet_hits(&mut bullets, &mut asteroids, &factory(), &mut rng, 3.0);

        assert_eq!(report.points(), 50);
        assert_eq!(asteroids.len(), 2);
        assert!(asteroids.iter().all(|a| a.body.size == AsteroidSize::Small));
    }

    #[test]
    fn when_small_asteroid_is_hit_then_nothing_replaces_it() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut asteroids = vec![rock(&mut rng, 100.0, 100.0, AsteroidSize::Small, 0)];
        let mut bullets = vec![bullet_at(100.0 + 13.0 + 2.9, 100.0)];

        let report = resolve_bullet_hits(&mut bullets, &mut asteroids, &factory(), &mut rng, 3.0);

        assert_eq!(report.points(), 100);
        assert_eq!(report.spawned, 0);
        assert!(asteroids.is_empty());
    }

    #[test]
    fn when_bullet_is_outside_padded_radius_then_nothing_happens() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut asteroids = vec![rock(&mut rng, 100.0, 100.0, AsteroidSize::Small, 0)];
        let mut bullets = vec![bullet_at(100.0 + 16.0, 100.0)];

        let report = resolve_bullet_hits(&mut bullets, &mut asteroids, &factory(), &mut rng, 3.0);

        assert!(report.hits.is_empty());
        assert_eq!(bullets.len(), 1);
        assert_eq!(asteroids.len(), 1);
    }

    #[test]
    fn when_two_bullets_hit_one_asteroid_then_first_bullet_scores_and_second_survives() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut asteroids = vec![rock(&mut rng, 100.0, 100.0, AsteroidSize::Small, 0)];
        let mut bullets = vec![bullet_at(101.0, 100.0), bullet_at(99.0, 100.0)];
        bullets[1].life = 7.0;

        let report = resolve_bullet_hits(&mut bullets, &mut asteroids, &factory(), &mut rng, 3.0);

        assert_eq!(report.hits.len(), 1);
        assert_eq!(report.points(), 100);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].life, 7.0);
    }

    #[test]
    fn when_one_bullet_overlaps_two_asteroids_then_it_destroys_only_the_first() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut asteroids = vec![
            rock(&mut rng, 100.0, 100.0, AsteroidSize::Small, 0),
            rock(&mut rng, 105.0, 100.0, AsteroidSize::Small, 1),
        ];
        let mut bullets = vec![bullet_at(102.0, 100.0)];

        let report = resolve_bullet_hits(&mut bullets, &mut asteroids, &factory(), &mut rng, 3.0);

        assert_eq!(report.hits.len(), 1);
        assert_eq!(asteroids.len(), 1);
        assert_eq!(asteroids[0].look.color, 1);
    }

    #[test]
    fn when_fragments_spawn_on_a_bullet_then_they_are_not_hit_in_the_same_frame() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut asteroids = vec![rock(&mut rng, 100.0, 100.0, AsteroidSize::Big, 0)];
        // Second bullet sits on the split point but only fragments are there.
        let mut bullets = vec![bullet_at(100.0, 100.0), bullet_at(100.0, 100.0)];

        let report = resolve_bullet_hits(&mut bullets, &mut asteroids, &factory(), &mut rng, 3.0);

        assert_eq!(report.hits.len(), 1);
        assert_eq!(asteroids.len(), 2);
        assert_eq!(bullets.len(), 1);
    }

    #[test]
    fn ship_collision_uses_sum_of_radii() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let ship = make_ship(Bounds::new(800.0, 600.0), 0.0);
        let near = rock(&mut rng, ship.x + 13.0 + 26.0 - 0.5, ship.y, AsteroidSize::Mid, 0);
        let far = rock(&mut rng, ship.x + 13.0 + 26.0 + 0.5, ship.y, AsteroidSize::Mid, 0);

        assert_eq!(find_ship_collision(&ship, &[far.clone()], 13.0), None);
        assert_eq!(find_ship_collision(&ship, &[far, near], 13.0), Some(1));
    }
}
