//! Zombie system: state machine, pursuit, blocking, and attacks.
//!
//! IDLE zombies wake when the player comes within detection range, after a
//! short awaken delay, or when hurt. Chasing zombies walk straight at the
//! player. Overlapping the player, or being blocked by a wall or turret,
//! switches them to ATTACK, which deals damage on a cooldown.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use horde_core::components::{Health, Hitbox, Player, Structure, Trail, Zombie};
use horde_core::constants::*;
use horde_core::enums::ZombieState;
use horde_core::events::GameEvent;
use horde_core::types::{Aabb, Position};
use horde_vfx::VfxRequest;

use crate::systems::damage::HitOutcome;
use crate::systems::player::damage_player;
use crate::systems::TickContext;

/// Base speed scaled by every active slow.
pub fn effective_speed(zombie: &Zombie) -> f32 {
    zombie
        .slows
        .iter()
        .fold(zombie.base_speed, |speed, slow| speed * slow.factor)
}

enum Strike {
    Player { damage: f32, from: Vec2 },
    Structure { target: Entity, damage: f32 },
}

pub fn run(world: &mut World, ctx: &mut TickContext) {
    let Some(player_box) = world
        .query::<(&Player, &Position, &Hitbox)>()
        .iter()
        .next()
        .map(|(_, (_, pos, hitbox))| Aabb::from_center(pos.0, hitbox.size))
    else {
        return;
    };
    let player_pos = player_box.center;

    let blockers: Vec<(Entity, Aabb)> = world
        .query::<(&Structure, &Position, &Hitbox, &Health)>()
        .iter()
        .filter(|(_, (s, _, _, h))| s.kind.blocks_zombies() && h.current > 0.0)
        .map(|(e, (_, pos, hitbox, _))| (e, Aabb::from_center(pos.0, hitbox.size)))
        .collect();

    let mut strikes: Vec<Strike> = Vec::new();
    let mut footsteps: Vec<Vec2> = Vec::new();

    for (_e, (zombie, pos, hitbox, health, trail)) in
        world.query_mut::<(&mut Zombie, &mut Position, &Hitbox, &Health, &mut Trail)>()
    {
        if zombie.state == ZombieState::Dead {
            continue;
        }
        trail.0.push(pos.0);

        let to_player = player_pos - pos.0;
        if zombie.state == ZombieState::Idle {
            let spotted = to_player.length() <= zombie.detection_range;
            let restless = ctx.now - zombie.spawned_at_secs >= ZOMBIE_AWAKEN_SECS;
            let hurt = health.current < health.max;
            if !(spotted || restless || hurt) {
                continue;
            }
            zombie.state = ZombieState::Chase;
        }
        if to_player != Vec2::ZERO {
            zombie.facing = to_player.y.atan2(to_player.x);
        }

        let cooled = zombie
            .last_attack_secs
            .map_or(true, |last| ctx.now - last >= zombie.attack_cooldown_secs);

        let body = Aabb::from_center(pos.0, hitbox.size);
        if body.intersects(&player_box) {
            zombie.state = ZombieState::Attack;
            if cooled {
                zombie.last_attack_secs = Some(ctx.now);
                strikes.push(Strike::Player {
                    damage: zombie.damage,
                    from: pos.0,
                });
            }
            continue;
        }

        let step = to_player.normalize_or_zero() * effective_speed(zombie);
        let next = Aabb::from_center(pos.0 + step, hitbox.size);
        if let Some(&(target, _)) = blockers.iter().find(|(_, b)| next.intersects(b)) {
            zombie.state = ZombieState::Attack;
            if cooled {
                zombie.last_attack_secs = Some(ctx.now);
                strikes.push(Strike::Structure {
                    target,
                    damage: zombie.damage,
                });
            }
            continue;
        }

        pos.0 += step;
        zombie.state = ZombieState::Chase;
        if ctx.fx_rng.gen_bool(ZOMBIE_FOOTSTEP_CHANCE) {
            footsteps.push(pos.0 + Vec2::new(0.0, hitbox.size.y * 0.5));
        }
    }

    for strike in strikes {
        match strike {
            Strike::Player { damage, from } => {
                if damage_player(world, damage, ctx.events) != HitOutcome::Ignored {
                    ctx.vfx.push(VfxRequest::Blood {
                        position: player_pos,
                        direction: from - player_pos,
                        amount: BLOOD_ON_PLAYER_HIT,
                    });
                    ctx.request_shake(SHAKE_PLAYER_HIT);
                }
            }
            Strike::Structure { target, damage } => damage_structure(world, ctx, target, damage),
        }
    }

    for position in footsteps {
        ctx.vfx.push(VfxRequest::Footstep {
            position,
            color: ZOMBIE_FOOTSTEP_COLOR,
        });
    }
}

/// Hurt a structure; on reaching zero it is queued for removal once.
pub fn damage_structure(world: &World, ctx: &mut TickContext, target: Entity, damage: f32) {
    let Ok(mut health) = world.get::<&mut Health>(target) else {
        return;
    };
    if health.current <= 0.0 {
        return;
    }
    health.current = (health.current - damage).max(0.0);
    if health.current > 0.0 {
        return;
    }

    let kind = world.get::<&Structure>(target).map(|s| s.kind);
    let position = world.get::<&Position>(target).map(|p| p.0).unwrap_or_default();
    if let Ok(kind) = kind {
        log::debug!("{kind:?} destroyed at {position}");
        ctx.events.push(GameEvent::StructureDestroyed { kind, position });
    }
    ctx.despawn.push(target);
}
