//! Scoring and progression
//!
//! Reacts to hits and pickups: lives, score, speed, streak and the toon
//! mode unlock. Banners raised while resolving one pickup compete for a
//! single slot; the highest ranked one is shown.

use rand::Rng;

use super::state::{GameEvent, GamePhase, GameState, ParticleKind};
use crate::consts::*;

/// Banner notifications, lowest rank first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    SpeedUp { speed: i32 },
    Streak { streak: u32 },
    ToonModeUnlocked,
    Milestone { score: u32 },
}

impl BannerKind {
    /// Milestone > Unlock > Streak > Speed-Up
    pub fn rank(&self) -> u8 {
        match self {
            BannerKind::SpeedUp { .. } => 0,
            BannerKind::Streak { .. } => 1,
            BannerKind::ToonModeUnlocked => 2,
            BannerKind::Milestone { .. } => 3,
        }
    }

    pub fn text(&self) -> String {
        match self {
            BannerKind::SpeedUp { speed } => format!("Speed Up! {speed}"),
            BannerKind::Streak { streak } => format!("Streak +1! ({streak})"),
            BannerKind::ToonModeUnlocked => "TOON MODE UNLOCKED! +1 Life".to_string(),
            BannerKind::Milestone { score } => format!("Milestone: {score}!"),
        }
    }
}

/// Single-slot banner awaiting display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingBanner(Option<BannerKind>);

impl PendingBanner {
    /// Keep `kind` unless a higher ranked banner is already waiting
    pub fn offer(&mut self, kind: BannerKind) {
        match self.0 {
            Some(current) if current.rank() > kind.rank() => {}
            _ => self.0 = Some(kind),
        }
    }

    pub fn get(&self) -> Option<BannerKind> {
        self.0
    }

    pub fn take(&mut self) -> Option<BannerKind> {
        self.0.take()
    }
}

/// The player ran into a hazard.
///
/// Does nothing while invincible. Returns `true` if the hit landed.
pub fn hit(state: &mut GameState, rng: &mut impl Rng) -> bool {
    if state.effects.is_invincible() {
        return false;
    }

    state.run.lives = state.run.lives.saturating_sub(1);
    state.run.streak = 0;
    state.effects.start_hit_recovery();
    let center = state.player.center();
    state.emit_particles(center, ParticleKind::Hit, rng);

    log::debug!("Hit! {} lives left", state.run.lives);
    state.events.push(GameEvent::Hit {
        lives_left: state.run.lives,
    });

    if state.run.lives == 0 {
        end_run(state);
    }
    true
}

fn end_run(state: &mut GameState) {
    let score = state.run.score;
    let new_best = score > state.best_score;
    if new_best {
        state.best_score = score;
    }
    state.phase = GamePhase::GameOver;

    log::info!(
        "Game over: score {} (best {}{})",
        score,
        state.best_score,
        if new_best { ", new best" } else { "" }
    );
    state.events.push(GameEvent::GameOver {
        score,
        best_score: state.best_score,
        new_best,
    });
}

/// The player picked up a collectible.
///
/// Awards the point, then the speed-up, streak bonus and milestone checks
/// in that order. The speed-up check sees the score before the streak
/// bonus; the milestone check sees it after.
pub fn collect(state: &mut GameState, banner: &mut PendingBanner, rng: &mut impl Rng) {
    state.run.score += 1;
    state.run.streak += 1;
    let center = state.player.center();
    state.emit_particles(center, ParticleKind::Collect, rng);
    state.events.push(GameEvent::Collected {
        score: state.run.score,
        streak: state.run.streak,
    });

    if state.run.score % SPEED_UP_EVERY == 0 {
        state.run.speed += 1;
        log::debug!("Speed up to {}", state.run.speed);
        state.events.push(GameEvent::SpeedUp {
            speed: state.run.speed,
        });
        banner.offer(BannerKind::SpeedUp {
            speed: state.run.speed,
        });
    }

    let streak = state.run.streak;
    if streak > 0 && streak % STREAK_BONUS_EVERY == 0 {
        state.run.score += 1;
        log::debug!("Streak bonus at {}", streak);
        state.events.push(GameEvent::StreakBonus { streak });
        banner.offer(BannerKind::Streak { streak });
    }

    let score = state.run.score;
    if score > 0 && score % MILESTONE_EVERY == 0 {
        state.events.push(GameEvent::Milestone { score });
        banner.offer(BannerKind::Milestone { score });
    }
}

/// One-way toon mode unlock once the score reaches the threshold.
///
/// Returns `true` on the tick it unlocks.
pub fn unlock(state: &mut GameState, banner: &mut PendingBanner) -> bool {
    if state.run.toon_mode || state.run.score < TOON_MODE_SCORE {
        return false;
    }

    state.run.toon_mode = true;
    state.run.lives += TOON_MODE_EXTRA_LIVES;
    state.run.speed += TOON_MODE_EXTRA_SPEED;

    log::info!("Toon mode unlocked at score {}", state.run.score);
    state.events.push(GameEvent::ToonModeUnlocked);
    banner.offer(BannerKind::ToonModeUnlocked);
    true
}

/// Resolve one pickup end to end: collect, unlock check, then show the
/// winning banner
pub fn pick_up(state: &mut GameState, rng: &mut impl Rng) {
    let mut banner = PendingBanner::default();
    collect(state, &mut banner, rng);
    unlock(state, &mut banner);
    if let Some(kind) = banner.take() {
        state.effects.show_banner(kind.text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn playing() -> (GameState, Pcg32) {
        let mut state = GameState::new();
        state.start_run();
        state.events.clear();
        (state, Pcg32::seed_from_u64(3))
    }

    #[test]
    fn test_hit_costs_a_life() {
        let (mut state, mut rng) = playing();
        state.run.streak = 7;

        assert!(hit(&mut state, &mut rng));
        assert_eq!(state.run.lives, 2);
        assert_eq!(state.run.streak, 0);
        assert_eq!(state.effects.invincibility, 90);
        assert_eq!(state.effects.shake, 12);
        assert_eq!(state.particles.len(), 10);
        assert!(state.particles.iter().all(|p| p.kind == ParticleKind::Hit));
        assert!(state.particles.iter().all(|p| p.pos == state.player.center()));
        assert_eq!(state.phase, GamePhase::Play);
    }

    #[test]
    fn test_hit_while_invincible_is_noop() {
        let (mut state, mut rng) = playing();
        state.effects.invincibility = 1;
        state.run.streak = 3;

        assert!(!hit(&mut state, &mut rng));
        assert_eq!(state.run.lives, 3);
        assert_eq!(state.run.streak, 3);
        assert!(state.particles.is_empty());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_last_life_ends_run() {
        let (mut state, mut rng) = playing();
        state.run.lives = 1;
        state.run.score = 9;
        state.best_score = 4;

        hit(&mut state, &mut rng);
        assert_eq!(state.run.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.best_score, 9);
        assert!(state.events.contains(&GameEvent::GameOver {
            score: 9,
            best_score: 9,
            new_best: true
        }));
    }

    #[test]
    fn test_game_over_keeps_higher_best() {
        let (mut state, mut rng) = playing();
        state.run.lives = 1;
        state.run.score = 3;
        state.best_score = 11;

        hit(&mut state, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.best_score, 11);
    }

    #[test]
    fn test_plain_collect() {
        let (mut state, mut rng) = playing();
        pick_up(&mut state, &mut rng);
        assert_eq!(state.run.score, 1);
        assert_eq!(state.run.streak, 1);
        assert_eq!(state.run.speed, 5);
        assert_eq!(state.effects.active_banner(), None);
        assert!(state.particles.iter().all(|p| p.kind == ParticleKind::Collect));
    }

    #[test]
    fn test_speed_up_on_fifth_point() {
        let (mut state, mut rng) = playing();
        state.run.score = 4;
        state.run.streak = 1;
        pick_up(&mut state, &mut rng);
        assert_eq!(state.run.score, 5);
        assert_eq!(state.run.speed, 6);
        assert_eq!(state.effects.active_banner(), Some("Speed Up! 6"));
    }

    #[test]
    fn test_streak_bonus_overrides_speed_up() {
        let (mut state, mut rng) = playing();
        state.run.score = 4;
        state.run.streak = 4;
        pick_up(&mut state, &mut rng);

        assert_eq!(state.run.score, 6);
        assert_eq!(state.run.streak, 5);
        assert_eq!(state.run.speed, 6);
        assert_eq!(state.effects.active_banner(), Some("Streak +1! (5)"));
    }

    #[test]
    fn test_streak_bonus_does_not_retrigger_speed_up() {
        let (mut state, mut rng) = playing();
        state.run.score = 3;
        state.run.streak = 4;
        pick_up(&mut state, &mut rng);

        // 3 -> 4 -> bonus 5: no speed-up for the bonus point
        assert_eq!(state.run.score, 5);
        assert_eq!(state.run.speed, 5);
        assert_eq!(state.effects.active_banner(), Some("Streak +1! (5)"));
    }

    #[test]
    fn test_milestone_beats_streak() {
        let (mut state, mut rng) = playing();
        state.run.score = 8;
        state.run.streak = 9;
        pick_up(&mut state, &mut rng);

        assert_eq!(state.run.score, 10);
        assert_eq!(state.run.streak, 10);
        assert_eq!(state.effects.active_banner(), Some("Milestone: 10!"));
    }

    #[test]
    fn test_milestone_beats_speed_up() {
        let (mut state, mut rng) = playing();
        state.run.score = 9;
        state.run.streak = 1;
        pick_up(&mut state, &mut rng);

        assert_eq!(state.run.score, 10);
        assert_eq!(state.run.speed, 6);
        assert_eq!(state.effects.active_banner(), Some("Milestone: 10!"));
    }

    #[test]
    fn test_unlock_grants_life_and_speed_once() {
        let (mut state, mut rng) = playing();
        state.run.score = 14;
        state.run.streak = 1;
        state.run.speed = 7;
        pick_up(&mut state, &mut rng);

        assert!(state.run.toon_mode);
        assert_eq!(state.run.score, 15);
        assert_eq!(state.run.lives, 4);
        // +1 speed-up, +2 toon mode
        assert_eq!(state.run.speed, 10);
        assert_eq!(
            state.effects.active_banner(),
            Some("TOON MODE UNLOCKED! +1 Life")
        );

        pick_up(&mut state, &mut rng);
        assert_eq!(state.run.lives, 4);
        assert_eq!(state.run.speed, 10);
        let unlocks = state
            .events
            .iter()
            .filter(|e| **e == GameEvent::ToonModeUnlocked)
            .count();
        assert_eq!(unlocks, 1);
    }

    #[test]
    fn test_unlock_banner_outranks_streak() {
        let (mut state, mut rng) = playing();
        state.run.score = 13;
        state.run.streak = 4;
        pick_up(&mut state, &mut rng);

        assert_eq!(state.run.score, 15);
        assert_eq!(state.run.streak, 5);
        assert!(state.run.toon_mode);
        assert!(state.events.contains(&GameEvent::StreakBonus { streak: 5 }));
        assert_eq!(
            state.effects.active_banner(),
            Some("TOON MODE UNLOCKED! +1 Life")
        );
    }

    #[test]
    fn test_unlock_below_threshold() {
        let (mut state, _) = playing();
        state.run.score = 14;
        let mut banner = PendingBanner::default();
        assert!(!unlock(&mut state, &mut banner));
        assert!(!state.run.toon_mode);
        assert_eq!(banner.get(), None);
    }

    #[test]
    fn test_pending_banner_ranking() {
        let mut banner = PendingBanner::default();
        banner.offer(BannerKind::Milestone { score: 20 });
        banner.offer(BannerKind::SpeedUp { speed: 9 });
        banner.offer(BannerKind::ToonModeUnlocked);
        assert_eq!(banner.get(), Some(BannerKind::Milestone { score: 20 }));

        let mut banner = PendingBanner::default();
        banner.offer(BannerKind::ToonModeUnlocked);
        banner.offer(BannerKind::Streak { streak: 5 });
        assert_eq!(banner.get(), Some(BannerKind::ToonModeUnlocked));

        let mut banner = PendingBanner::default();
        banner.offer(BannerKind::SpeedUp { speed: 6 });
        banner.offer(BannerKind::SpeedUp { speed: 7 });
        assert_eq!(banner.take(), Some(BannerKind::SpeedUp { speed: 7 }));
        assert_eq!(banner.get(), None);
    }
}
