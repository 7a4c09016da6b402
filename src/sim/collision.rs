//! Motion and collision resolution
//!
//! Each pass moves its entities, drops the ones that left the pitch, and
//! hands back whatever touched the player. Removal is done with `retain`
//! so no element is skipped or visited twice while the list shrinks.

use super::state::{Collectible, Hazard, Particle, Rect, Star};

/// Scroll stars by their own speed; remove those past the left edge
pub fn advance_stars(stars: &mut Vec<Star>) {
    stars.retain_mut(|star| {
        star.pos.x -= star.speed;
        star.pos.x >= 0
    });
}

/// Move hazards left by `speed` and resolve contact with the player.
///
/// Returns the hazard that struck the player, already removed from the
/// list. While `invincible`, overlapping hazards are left in place and may
/// touch again once invincibility ends. A hit starts invincibility, so at
/// most one hazard can strike per pass.
pub fn advance_hazards(
    hazards: &mut Vec<Hazard>,
    player: &Rect,
    speed: i32,
    invincible: bool,
) -> Option<Hazard> {
    let mut struck: Option<Hazard> = None;
    hazards.retain_mut(|hazard| {
        hazard.rect.x -= speed;
        if hazard.rect.right() < 0 {
            return false;
        }
        if !invincible && struck.is_none() && player.intersects(&hazard.rect) {
            struck = Some(hazard.clone());
            return false;
        }
        true
    });
    struck
}

/// Move collectibles left by `speed`; returns every one the player picked
/// up this pass, in list order
pub fn advance_collectibles(
    collectibles: &mut Vec<Collectible>,
    player: &Rect,
    speed: i32,
) -> Vec<Collectible> {
    let mut picked = Vec::new();
    collectibles.retain_mut(|item| {
        item.rect.x -= speed;
        if item.rect.right() < 0 {
            return false;
        }
        if player.intersects(&item.rect) {
            picked.push(item.clone());
            return false;
        }
        true
    });
    picked
}

/// Integrate particle motion and age them by one tick
pub fn advance_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|p| {
        p.pos += p.vel;
        p.life = p.life.saturating_sub(1);
        p.life > 0
    });
}
