//! Snapshot system: builds the read-only `GameStateSnapshot` for the frontend.

use hecs::World;

use horde_core::components::*;
use horde_core::constants::EXPLOSION_VISUAL_SECS;
use horde_core::enums::{GamePhase, GrenadeState, ShopItem};
use horde_core::events::GameEvent;
use horde_core::state::*;
use horde_core::types::{Position, SimTime, Velocity};
use horde_vfx::ParticleSystem;

use crate::camera::Camera;
use crate::weapon::Loadout;

/// Everything outside the world the snapshot needs.
pub struct SnapshotInputs<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub cash: u32,
    pub camera: &'a Camera,
    pub particles: &'a ParticleSystem,
    pub inventory: &'a [ShopItem],
    pub events: Vec<GameEvent>,
}

fn fraction(health: &Health) -> f32 {
    if health.max > 0.0 {
        (health.current / health.max).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(world: &World, inputs: SnapshotInputs) -> GameStateSnapshot {
    let now = inputs.time.elapsed_secs;
    let camera = inputs.camera;

    let player = world
        .query::<(&Player, &Position, &Health, &Loadout)>()
        .iter()
        .next()
        .map(|(_, (player, pos, health, loadout))| {
            let weapon = loadout.active();
            PlayerView {
                position: pos.0,
                aim_angle: player.aim_angle,
                health_fraction: fraction(health),
                weapon: weapon.kind,
                ammo_fraction: weapon.ammo_fraction(),
                ammo: weapon.ammo,
                reloading: weapon.reloading,
                reload_progress: weapon.reload_progress(now),
                frag_grenades: player.frag_grenades,
                molotovs: player.molotovs,
                selected_grenade: player.selected_grenade,
                is_moving: player.is_moving,
            }
        })
        .unwrap_or_default();

    let mut zombies = Vec::new();
    let mut radar = Vec::new();
    for (entity, (zombie, pos, health, tint, trail)) in world
        .query::<(&Zombie, &Position, &Health, &Tint, &Trail)>()
        .iter()
    {
        let id = entity.id();
        zombies.push(ZombieView {
            id,
            kind: zombie.kind,
            state: zombie.state,
            position: pos.0,
            facing: zombie.facing,
            health_fraction: fraction(health),
            color: tint.0,
            slowed: !zombie.slows.is_empty(),
            trail: trail.0.to_vec(),
        });
        radar.extend(camera.radar_blip(id, pos.0));
    }

    let bullets = world
        .query::<(&Bullet, &Position, &Velocity, &Trail)>()
        .iter()
        .map(|(entity, (bullet, pos, vel, trail))| BulletView {
            id: entity.id(),
            position: pos.0,
            angle: vel.heading(),
            tier: bullet.tier,
            owner: bullet.owner,
            trail: trail.0.to_vec(),
        })
        .collect();

    let grenades = world
        .query::<(&Grenade, &Position)>()
        .iter()
        .map(|(entity, (grenade, pos))| {
            let progress = match (grenade.state, grenade.exploded_at_secs) {
                (GrenadeState::Exploded, Some(at)) => (now - at) / EXPLOSION_VISUAL_SECS,
                _ if grenade.fuse_secs > 0.0 => (now - grenade.thrown_at_secs) / grenade.fuse_secs,
                _ => 1.0,
            };
            GrenadeView {
                id: entity.id(),
                kind: grenade.kind,
                state: grenade.state,
                position: pos.0,
                progress: progress.clamp(0.0, 1.0) as f32,
                radius: grenade.radius,
            }
        })
        .collect();

    let fire_zones = world
        .query::<(&FireZone, &Position)>()
        .iter()
        .map(|(_, (zone, pos))| FireZoneView {
            position: pos.0,
            radius: zone.radius,
            remaining_secs: (zone.expires_at_secs - now).max(0.0),
        })
        .collect();

    let structures = world
        .query::<(&Structure, &Position, &Hitbox, &Health, Option<&Turret>, Option<&Trap>)>()
        .iter()
        .map(|(entity, (structure, pos, hitbox, health, turret, trap))| StructureView {
            id: entity.id(),
            kind: structure.kind,
            position: pos.0,
            size: hitbox.size,
            health_fraction: fraction(health),
            aim_angle: turret.map(|t| t.aim_angle),
            armed: trap.map_or(true, |t| now >= t.ready_at_secs),
        })
        .collect();

    let particles = inputs
        .particles
        .particles()
        .iter()
        .map(|p| ParticleView {
            position: p.position,
            color: p.color,
            alpha: p.alpha,
            size: p.size,
            glow: p.glow,
            trail: p.trail.to_vec(),
        })
        .collect();

    let decals = inputs
        .particles
        .decals()
        .iter()
        .map(|d| DecalView {
            position: d.position,
            color: d.color,
            size: d.size,
            alpha: d.alpha,
        })
        .collect();

    GameStateSnapshot {
        time: inputs.time,
        phase: inputs.phase,
        wave: inputs.wave,
        cash: inputs.cash,
        player,
        zombies,
        bullets,
        grenades,
        fire_zones,
        structures,
        particles,
        decals,
        camera: camera.view_state(),
        radar,
        inventory: inputs.inventory.to_vec(),
        events: inputs.events,
    }
}
