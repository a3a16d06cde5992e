//! Entity spawn factories.
//!
//! Builds the component bundle for each entity kind so systems and the
//! engine never assemble bundles by hand.

use glam::Vec2;
use hecs::{Entity, World};

use horde_core::components::*;
use horde_core::constants::*;
use horde_core::enums::*;
use horde_core::profiles::*;
use horde_core::types::{Position, TrailBuffer, Velocity};

use crate::weapon::Loadout;

/// Spawn the player at `at` with the standard loadout.
pub fn spawn_player(world: &mut World, at: Vec2) -> Entity {
    world.spawn((
        Player {
            speed: PLAYER_SPEED,
            aim_angle: 0.0,
            firing: false,
            has_fired_once: false,
            is_moving: false,
            frag_grenades: PLAYER_STARTING_GRENADES,
            molotovs: PLAYER_STARTING_MOLOTOVS,
            selected_grenade: GrenadeKind::Frag,
            last_grenade_secs: None,
        },
        Position(at),
        Health {
            current: PLAYER_MAX_HEALTH,
            max: PLAYER_MAX_HEALTH,
        },
        Hitbox {
            size: Vec2::splat(PLAYER_SIZE),
        },
        Loadout::standard(),
    ))
}

/// Spawn a zombie of the given type, idle, at `at`.
pub fn spawn_zombie(world: &mut World, kind: ZombieType, at: Vec2, now: f64) -> Entity {
    let profile = zombie_profile(kind);
    world.spawn((
        Zombie {
            kind,
            state: ZombieState::Idle,
            base_speed: profile.speed,
            damage: profile.damage,
            detection_range: ZOMBIE_DETECTION_RANGE,
            attack_cooldown_secs: ZOMBIE_ATTACK_COOLDOWN_SECS,
            last_attack_secs: None,
            spawned_at_secs: now,
            facing: 0.0,
            slows: Vec::new(),
        },
        Position(at),
        Health {
            current: profile.max_health,
            max: profile.max_health,
        },
        Hitbox {
            size: Vec2::splat(ZOMBIE_SIZE),
        },
        Tint(profile.color),
        Trail(TrailBuffer::new(ZOMBIE_TRAIL_LENGTH)),
    ))
}

/// Spawn a bullet travelling along `angle`.
pub fn spawn_bullet(
    world: &mut World,
    origin: Vec2,
    angle: f32,
    damage: f32,
    owner: BulletOwner,
) -> Entity {
    let tier = trail_tier(damage);
    let (_, trail_len) = trail_style(tier);
    world.spawn((
        Bullet {
            damage,
            owner,
            tier,
        },
        Position(origin),
        Velocity::from_angle(angle, BULLET_SPEED),
        Trail(TrailBuffer::new(trail_len)),
    ))
}

/// Spawn an armed grenade thrown from `origin` toward `target`.
pub fn spawn_grenade(
    world: &mut World,
    kind: GrenadeKind,
    origin: Vec2,
    target: Vec2,
    now: f64,
) -> Entity {
    let profile = grenade_profile(kind);
    let direction = (target - origin).normalize_or_zero();
    world.spawn((
        Grenade {
            kind,
            state: GrenadeState::Armed,
            thrown_at_secs: now,
            fuse_secs: profile.fuse_secs,
            radius: profile.radius,
            damage: profile.damage,
            exploded_at_secs: None,
        },
        Position(origin),
        Velocity(direction * GRENADE_SPEED),
    ))
}

/// Spawn a burning area.
pub fn spawn_fire_zone(
    world: &mut World,
    at: Vec2,
    radius: f32,
    lifetime_secs: f64,
    damage_per_sec: f32,
    now: f64,
) -> Entity {
    world.spawn((
        FireZone {
            radius,
            damage_per_sec,
            expires_at_secs: now + lifetime_secs,
        },
        Position(at),
    ))
}

/// Spawn a structure with its behavior component.
pub fn spawn_structure(world: &mut World, kind: StructureKind, at: Vec2) -> Entity {
    let profile = structure_profile(kind);
    let base = (
        Structure { kind },
        Position(at),
        Health {
            current: profile.max_health,
            max: profile.max_health,
        },
        Hitbox {
            size: Vec2::new(profile.width, profile.height),
        },
    );

    match profile.behavior {
        StructureBehavior::Barrier => world.spawn(base),
        StructureBehavior::Spike {
            damage,
            cooldown_secs,
        } => {
            let entity = world.spawn(base);
            attach(world, entity, trap(TrapEffect::Spike { damage }, cooldown_secs));
            entity
        }
        StructureBehavior::Slow {
            factor,
            duration_secs,
            cooldown_secs,
        } => {
            let entity = world.spawn(base);
            let effect = TrapEffect::Slow {
                factor,
                duration_secs,
            };
            attach(world, entity, trap(effect, cooldown_secs));
            entity
        }
        StructureBehavior::Turret {
            damage,
            fire_interval_secs,
            range,
        } => {
            let entity = world.spawn(base);
            let turret = Turret {
                damage,
                fire_interval_secs,
                range,
                aim_angle: 0.0,
                last_shot_secs: None,
                target: None,
            };
            attach(world, entity, turret);
            entity
        }
    }
}

fn trap(effect: TrapEffect, cooldown_secs: f64) -> Trap {
    Trap {
        effect,
        cooldown_secs,
        ready_at_secs: 0.0,
        affected: Vec::new(),
    }
}

fn attach<C: hecs::Component>(world: &mut World, entity: Entity, component: C) {
    if world.insert_one(entity, component).is_err() {
        log::warn!("structure {entity:?} vanished before its behavior was attached");
    }
}
