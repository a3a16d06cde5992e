//! Bullet system: straight-line motion, zombie hits, and off-view culling.
//!
//! All bullets move first, then each is tested against the zombies still
//! alive at that point, in spawn order.

use glam::Vec2;
use hecs::{Entity, World};

use horde_core::components::{Bullet, Hitbox, Trail, Zombie};
use horde_core::constants::{BLOOD_ON_ZOMBIE_HIT, BULLET_HITBOX};
use horde_core::enums::ZombieState;
use horde_core::profiles::trail_style;
use horde_core::types::{Aabb, Position, Velocity};
use horde_vfx::VfxRequest;

use crate::systems::damage::{damage_zombie, HitOutcome};
use crate::systems::TickContext;

/// True once a bullet is more than a full view width/height beyond the
/// logical camera view.
pub fn out_of_play(pos: Vec2, view: &Aabb) -> bool {
    let margin = view.half_extents * 2.0;
    let min = view.min() - margin;
    let max = view.max() + margin;
    pos.x < min.x || pos.y < min.y || pos.x > max.x || pos.y > max.y
}

pub fn run(world: &mut World, ctx: &mut TickContext) {
    // 1. Move.
    let mut moved: Vec<(Entity, Vec2, Vec2)> = Vec::new();
    for (entity, (bullet, pos, vel, trail)) in
        world.query_mut::<(&Bullet, &mut Position, &Velocity, &mut Trail)>()
    {
        trail.0.push(pos.0);
        pos.0 += vel.0;
        let (color, _) = trail_style(bullet.tier);
        ctx.vfx.push(VfxRequest::BulletTrail {
            position: pos.0,
            velocity: vel.0,
            color,
        });
        moved.push((entity, pos.0, vel.0));
    }

    // 2. Collide against live zombies.
    let mut zombies: Vec<(Entity, Aabb, Vec2)> = world
        .query::<(&Zombie, &Position, &Hitbox)>()
        .iter()
        .filter(|(_, (z, _, _))| z.state != ZombieState::Dead)
        .map(|(e, (_, pos, hitbox))| (e, Aabb::from_center(pos.0, hitbox.size), pos.0))
        .collect();

    for (bullet_entity, pos, vel) in moved {
        let hitbox = Aabb::from_center(pos, Vec2::splat(BULLET_HITBOX));
        let hit = zombies
            .iter()
            .position(|(_, body, _)| hitbox.intersects(body));

        if let Some(index) = hit {
            let (zombie, _, center) = zombies[index];
            let damage = world.get::<&Bullet>(bullet_entity).map(|b| b.damage).unwrap_or(0.0);
            ctx.vfx.push(VfxRequest::Blood {
                position: center,
                direction: vel,
                amount: BLOOD_ON_ZOMBIE_HIT,
            });
            if damage_zombie(world, zombie, damage, ctx.events) == HitOutcome::Killed {
                zombies.remove(index);
            }
            ctx.despawn.push(bullet_entity);
            continue;
        }

        // 3. Cull.
        if out_of_play(pos, &ctx.view) {
            ctx.despawn.push(bullet_entity);
        }
    }
}
