//! Damage application helpers shared by every system that hurts zombies.
//!
//! Marking a zombie dead and emitting its kill event happen in the same
//! call that brings its health to zero, so no later system in the tick can
//! hit it again or see it alive.

use hecs::{Entity, World};

use horde_core::components::{Health, Zombie};
use horde_core::enums::ZombieState;
use horde_core::events::GameEvent;
use horde_core::profiles::zombie_profile;
use horde_core::types::Position;

/// Result of hitting a zombie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Target missing or already dead. Nothing changed.
    Ignored,
    Wounded,
    Killed,
}

/// Apply `amount` damage to a zombie. Wakes idle zombies; on the killing
/// blow, flips the zombie to `Dead` and emits exactly one `ZombieKilled`.
pub fn damage_zombie(
    world: &World,
    entity: Entity,
    amount: f32,
    events: &mut Vec<GameEvent>,
) -> HitOutcome {
    let mut zombie = match world.get::<&mut Zombie>(entity) {
        Ok(z) => z,
        Err(_) => return HitOutcome::Ignored,
    };
    if zombie.state == ZombieState::Dead {
        return HitOutcome::Ignored;
    }
    let mut health = match world.get::<&mut Health>(entity) {
        Ok(h) => h,
        Err(_) => return HitOutcome::Ignored,
    };

    health.current = (health.current - amount.max(0.0)).max(0.0);
    if zombie.state == ZombieState::Idle {
        zombie.state = ZombieState::Chase;
    }
    if health.current > 0.0 {
        return HitOutcome::Wounded;
    }

    zombie.state = ZombieState::Dead;
    let position = world
        .get::<&Position>(entity)
        .map(|p| p.0)
        .unwrap_or_default();
    let reward = zombie_profile(zombie.kind).reward;
    log::debug!("zombie {:?} ({:?}) killed", entity, zombie.kind);
    events.push(GameEvent::ZombieKilled {
        kind: zombie.kind,
        reward,
        position,
    });
    HitOutcome::Killed
}

/// Blast damage at `distance` from the center of an explosion of `radius`:
/// `base * (1 - distance / radius)`, floored, and zero at or beyond the edge.
pub fn explosion_damage(base: f32, distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 || distance >= radius {
        return 0.0;
    }
    (base * (1.0 - distance / radius)).max(0.0).floor()
}

/// Whether the zombie is still in play.
pub fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<&Zombie>(entity)
        .map(|z| z.state != ZombieState::Dead)
        .unwrap_or(false)
}
