//! Cleanup system: despawns everything flagged during the tick.

use hecs::{Entity, World};

use horde_core::components::Zombie;
use horde_core::enums::ZombieState;

/// Remove dead zombies plus every entity queued by other systems.
/// Uses a pre-allocated buffer to avoid per-tick allocation. An entity
/// queued twice is harmless: the second despawn is a no-op.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for (entity, zombie) in world.query_mut::<&Zombie>() {
        if zombie.state == ZombieState::Dead {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
