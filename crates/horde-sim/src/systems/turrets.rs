//! Turret system: nearest-target acquisition and fire-rate gated shots.
//!
//! Targets are re-acquired from scratch every tick; a stored target is only
//! a handle for display and is never trusted across ticks.

use glam::Vec2;
use hecs::{Entity, World};

use horde_core::components::{Turret, Zombie};
use horde_core::enums::{BulletOwner, ZombieState};
use horde_core::events::GameEvent;
use horde_core::types::Position;
use horde_vfx::VfxRequest;

use crate::systems::TickContext;
use crate::world_setup;

/// Nearest candidate within `range` of `origin`. Ties go to the first
/// candidate seen at the minimum distance.
pub fn select_target(
    origin: Vec2,
    range: f32,
    candidates: impl IntoIterator<Item = (Entity, Vec2)>,
) -> Option<(Entity, Vec2)> {
    let mut best: Option<(Entity, Vec2, f32)> = None;
    for (entity, pos) in candidates {
        let d = origin.distance(pos);
        if d > range {
            continue;
        }
        if best.map_or(true, |(_, _, best_d)| d < best_d) {
            best = Some((entity, pos, d));
        }
    }
    best.map(|(e, p, _)| (e, p))
}

/// Aim and fire every turret.
pub fn run(world: &mut World, ctx: &mut TickContext) {
    let zombies: Vec<(Entity, Vec2)> = world
        .query::<(&Zombie, &Position)>()
        .iter()
        .filter(|(_, (z, _))| z.state != ZombieState::Dead)
        .map(|(e, (_, pos))| (e, pos.0))
        .collect();

    let mut shots: Vec<(Vec2, f32, f32)> = Vec::new();
    for (_e, (turret, pos)) in world.query_mut::<(&mut Turret, &Position)>() {
        let target = select_target(pos.0, turret.range, zombies.iter().copied());
        turret.target = target.map(|(e, _)| e);

        let Some((_, target_pos)) = target else {
            continue;
        };
        let d = target_pos - pos.0;
        turret.aim_angle = d.y.atan2(d.x);

        let ready = turret
            .last_shot_secs
            .map_or(true, |last| ctx.now - last >= turret.fire_interval_secs);
        if ready {
            turret.last_shot_secs = Some(ctx.now);
            shots.push((pos.0, turret.aim_angle, turret.damage));
        }
    }

    for (origin, angle, damage) in shots {
        world_setup::spawn_bullet(world, origin, angle, damage, BulletOwner::Turret);
        ctx.vfx.push(VfxRequest::MuzzleFlash {
            position: origin + Vec2::new(angle.cos(), angle.sin()) * 20.0,
            angle,
        });
        ctx.events.push(GameEvent::TurretFired { position: origin });
    }
}
