//! Frame-counted spawning of hazards, collectibles and stars

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Collectible, GameState, Hazard, Rect, Star};
use crate::consts::*;

/// Counters for the three spawners
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTimers {
    pub hazard: u32,
    pub collectible: u32,
    pub star: u32,
}

/// Increment `counter`; if it now exceeds `threshold` reset it and report a spawn
fn advance(counter: &mut u32, threshold: u32) -> bool {
    *counter += 1;
    if *counter > threshold {
        *counter = 0;
        true
    } else {
        false
    }
}

/// Advance all spawn counters by one tick and append whatever fires
pub fn run_spawners(state: &mut GameState, rng: &mut impl Rng) {
    if advance(&mut state.spawn.star, STAR_SPAWN_THRESHOLD) {
        state.stars.push(spawn_star(rng));
    }
    if advance(&mut state.spawn.hazard, HAZARD_SPAWN_THRESHOLD) {
        let id = state.next_entity_id();
        let rect = hazard_rect(rng);
        log::trace!("Spawned hazard {} ({}x{} at y={})", id, rect.w, rect.h, rect.y);
        state.hazards.push(Hazard { id, rect });
    }
    if advance(&mut state.spawn.collectible, COLLECTIBLE_SPAWN_THRESHOLD) {
        let id = state.next_entity_id();
        let rect = collectible_rect(rng);
        log::trace!("Spawned collectible {} at y={}", id, rect.y);
        state.collectibles.push(Collectible { id, rect });
    }
}

fn lane_y(rng: &mut impl Rng) -> i32 {
    rng.random_range(SPAWN_MARGIN..=PLAYFIELD_HEIGHT - SPAWN_MARGIN)
}

/// Random hazard at the right edge: a wide flat card a quarter of the time,
/// otherwise a square one
pub fn hazard_rect(rng: &mut impl Rng) -> Rect {
    let (w, h) = if rng.random_bool(WIDE_HAZARD_CHANCE) {
        let w = rng.random_range(WIDE_HAZARD_WIDTH.0..=WIDE_HAZARD_WIDTH.1);
        let h = rng.random_range(WIDE_HAZARD_HEIGHT.0..=WIDE_HAZARD_HEIGHT.1);
        (w, h)
    } else {
        let s = rng.random_range(SQUARE_HAZARD_SIZE.0..=SQUARE_HAZARD_SIZE.1);
        (s, s)
    };
    Rect::new(PLAYFIELD_WIDTH, lane_y(rng), w, h)
}

pub fn collectible_rect(rng: &mut impl Rng) -> Rect {
    Rect::new(
        PLAYFIELD_WIDTH,
        lane_y(rng),
        COLLECTIBLE_SIZE,
        COLLECTIBLE_SIZE,
    )
}

pub fn spawn_star(rng: &mut impl Rng) -> Star {
    Star {
        pos: IVec2::new(PLAYFIELD_WIDTH, rng.random_range(0..=PLAYFIELD_HEIGHT)),
        speed: rng.random_range(STAR_SPEED.0..=STAR_SPEED.1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ticks_until_first(threshold: u32) -> u32 {
        let mut counter = 0;
        let mut ticks = 0;
        loop {
            ticks += 1;
            if advance(&mut counter, threshold) {
                return ticks;
            }
        }
    }

    #[test]
    fn test_spawn_intervals() {
        assert_eq!(ticks_until_first(HAZARD_SPAWN_THRESHOLD), 56);
        assert_eq!(ticks_until_first(COLLECTIBLE_SPAWN_THRESHOLD), 121);
        assert_eq!(ticks_until_first(STAR_SPAWN_THRESHOLD), 16);
    }

    #[test]
    fn test_counter_resets_after_firing() {
        let mut counter = HAZARD_SPAWN_THRESHOLD;
        assert!(advance(&mut counter, HAZARD_SPAWN_THRESHOLD));
        assert_eq!(counter, 0);
    }

    #[test]
    fn test_run_spawners_over_time() {
        let mut state = GameState::new();
        state.start_run();
        let mut rng = Pcg32::seed_from_u64(42);

        for _ in 0..242 {
            run_spawners(&mut state, &mut rng);
        }

        // 242 ticks: hazards at 56/112/168/224, collectibles at 121/242, stars every 16
        assert_eq!(state.hazards.len(), 4);
        assert_eq!(state.collectibles.len(), 2);
        assert_eq!(state.stars.len(), 15);

        let mut ids: Vec<u32> = state
            .hazards
            .iter()
            .map(|h| h.id)
            .chain(state.collectibles.iter().map(|c| c.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6, "entity ids are unique");
    }

    #[test]
    fn test_hazard_geometry_classes() {
        let mut rng = Pcg32::seed_from_u64(1234);
        let mut wide = 0;
        for _ in 0..2000 {
            let r = hazard_rect(&mut rng);
            assert_eq!(r.x, PLAYFIELD_WIDTH);
            assert!((40..=440).contains(&r.y));
            if r.w == r.h && (25..=40).contains(&r.w) {
                continue;
            }
            assert!((60..=110).contains(&r.w), "wide width {}", r.w);
            assert!((18..=26).contains(&r.h), "wide height {}", r.h);
            wide += 1;
        }
        // ~25% wide
        assert!((350..650).contains(&wide), "wide count {wide}");
    }

    #[test]
    fn test_collectible_and_star_geometry() {
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..500 {
            let c = collectible_rect(&mut rng);
            assert_eq!((c.x, c.w, c.h), (800, 26, 26));
            assert!((40..=440).contains(&c.y));

            let s = spawn_star(&mut rng);
            assert_eq!(s.pos.x, 800);
            assert!((0..=480).contains(&s.pos.y));
            assert!((2..=5).contains(&s.speed));
        }
    }

    #[test]
    fn test_spawning_is_deterministic() {
        let mut a = Pcg32::seed_from_u64(5);
        let mut b = Pcg32::seed_from_u64(5);
        for _ in 0..50 {
            assert_eq!(hazard_rect(&mut a), hazard_rect(&mut b));
        }
    }
}
