//! Fire zone system: burning areas that hurt zombies standing in them.

use glam::Vec2;
use hecs::{Entity, World};

use horde_core::components::{FireZone, Zombie};
use horde_core::constants::DT;
use horde_core::enums::ZombieState;
use horde_core::types::Position;
use horde_vfx::VfxRequest;

use crate::systems::damage::damage_zombie;
use crate::systems::TickContext;

pub fn run(world: &mut World, ctx: &mut TickContext) {
    let mut burning: Vec<(Vec2, f32, f32)> = Vec::new();
    for (entity, (zone, pos)) in world.query_mut::<(&FireZone, &Position)>() {
        if ctx.now >= zone.expires_at_secs {
            ctx.despawn.push(entity);
            continue;
        }
        burning.push((pos.0, zone.radius, zone.damage_per_sec * DT as f32));
        ctx.vfx.push(VfxRequest::Flames {
            position: pos.0,
            radius: zone.radius,
        });
    }
    if burning.is_empty() {
        return;
    }

    let zombies: Vec<(Entity, Vec2)> = world
        .query::<(&Zombie, &Position)>()
        .iter()
        .filter(|(_, (z, _))| z.state != ZombieState::Dead)
        .map(|(e, (_, pos))| (e, pos.0))
        .collect();

    for (center, radius, damage) in burning {
        for &(zombie, pos) in &zombies {
            if pos.distance(center) <= radius {
                damage_zombie(world, zombie, damage, ctx.events);
            }
        }
    }
}
