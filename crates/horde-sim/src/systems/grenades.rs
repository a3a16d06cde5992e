//! Grenade system: flight, fuse, and the one-time blast.
//!
//! ARMED grenades fly straight until their fuse burns out, whatever they
//! touch. The ARMED to EXPLODED transition applies falloff damage exactly
//! once; the EXPLODED grenade then lingers only as a visual.

use glam::Vec2;
use hecs::{Entity, World};

use horde_core::components::{Grenade, Zombie};
use horde_core::constants::*;
use horde_core::enums::{GrenadeKind, GrenadeState, ZombieState};
use horde_core::events::GameEvent;
use horde_core::profiles::grenade_profile;
use horde_core::types::{Position, Velocity};
use horde_vfx::{ExplosionParams, VfxRequest};

use crate::systems::damage::{damage_zombie, explosion_damage, HitOutcome};
use crate::systems::TickContext;
use crate::world_setup;

struct Detonation {
    kind: GrenadeKind,
    position: Vec2,
    radius: f32,
    damage: f32,
}

pub fn run(world: &mut World, ctx: &mut TickContext) {
    let mut detonations: Vec<Detonation> = Vec::new();

    for (entity, (grenade, pos, vel)) in
        world.query_mut::<(&mut Grenade, &mut Position, &mut Velocity)>()
    {
        match grenade.state {
            GrenadeState::Armed => {
                pos.0 = (pos.0 + vel.0).clamp(Vec2::ZERO, ctx.world_size);
                if ctx.now - grenade.thrown_at_secs >= grenade.fuse_secs {
                    grenade.state = GrenadeState::Exploded;
                    grenade.exploded_at_secs = Some(ctx.now);
                    vel.0 = Vec2::ZERO;
                    detonations.push(Detonation {
                        kind: grenade.kind,
                        position: pos.0,
                        radius: grenade.radius,
                        damage: grenade.damage,
                    });
                }
            }
            GrenadeState::Exploded => {
                let since = grenade
                    .exploded_at_secs
                    .map_or(f64::INFINITY, |at| ctx.now - at);
                if since >= EXPLOSION_VISUAL_SECS {
                    ctx.despawn.push(entity);
                }
            }
        }
    }

    for blast in detonations {
        let hits = detonate(world, ctx, &blast);
        log::debug!(
            "{:?} detonated at {}, {} zombies hit",
            blast.kind,
            blast.position,
            hits
        );
        ctx.vfx.push(VfxRequest::Explosion {
            position: blast.position,
            params: ExplosionParams::grenade(),
        });
        ctx.request_shake(SHAKE_EXPLOSION);
        ctx.events.push(GameEvent::GrenadeExploded {
            kind: blast.kind,
            position: blast.position,
            zombies_hit: hits,
        });

        if let Some((lifetime, dps)) = grenade_profile(blast.kind).fire_zone {
            world_setup::spawn_fire_zone(world, blast.position, blast.radius, lifetime, dps, ctx.now);
        }
    }
}

/// Apply falloff damage to every live zombie inside the blast. Returns the
/// number of zombies that took damage.
fn detonate(world: &World, ctx: &mut TickContext, blast: &Detonation) -> usize {
    let targets: Vec<(Entity, f32)> = world
        .query::<(&Zombie, &Position)>()
        .iter()
        .filter(|(_, (z, _))| z.state != ZombieState::Dead)
        .map(|(e, (_, pos))| (e, explosion_damage(blast.damage, pos.0.distance(blast.position), blast.radius)))
        .filter(|&(_, damage)| damage > 0.0)
        .collect();

    targets
        .into_iter()
        .filter(|&(entity, damage)| damage_zombie(world, entity, damage, ctx.events) != HitOutcome::Ignored)
        .count()
}
