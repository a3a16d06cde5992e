//! Player system: movement, aim, weapon timers, firing, and grenades.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use horde_core::components::{Health, Hitbox, Player, Zombie};
use horde_core::constants::*;
use horde_core::enums::{BulletOwner, GrenadeKind, WeaponType, ZombieState};
use horde_core::events::GameEvent;
use horde_core::types::Position;
use horde_vfx::VfxRequest;

use crate::systems::damage::{damage_zombie, HitOutcome};
use crate::systems::TickContext;
use crate::weapon::{BulletSpawn, Loadout, ReloadProgress};
use crate::world_setup;

/// Muzzle distance from the player's center.
const MUZZLE_OFFSET: f32 = 25.0;

/// Latest logical input. Movement intent is held until changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    pub move_x: i8,
    pub move_y: i8,
    /// Pointer in world coordinates.
    pub pointer: Vec2,
}

/// Per-tick displacement for an axis intent. Diagonals are scaled by
/// 1/sqrt(2) so they are no faster than a single axis.
pub fn movement_delta(move_x: i8, move_y: i8, speed: f32) -> Vec2 {
    let dx = move_x.signum() as f32 * speed;
    let dy = move_y.signum() as f32 * speed;
    if dx != 0.0 && dy != 0.0 {
        Vec2::new(dx, dy) * FRAC_1_SQRT_2
    } else {
        Vec2::new(dx, dy)
    }
}

/// Find the player entity.
pub fn find_player(world: &World) -> Option<Entity> {
    world.query::<&Player>().iter().next().map(|(e, _)| e)
}

/// Player position, if the player exists.
pub fn player_position(world: &World) -> Option<Vec2> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| pos.0)
}

struct Shot {
    origin: Vec2,
    aim: f32,
    bullets: Vec<BulletSpawn>,
    shake: f32,
    weapon: WeaponType,
}

/// Advance the player one tick.
pub fn run(world: &mut World, ctx: &mut TickContext, input: &PlayerInput) {
    let Some(entity) = find_player(world) else {
        return;
    };

    let mut melee_strike: Option<(Vec2, f32, f32, f32)> = None;
    let mut shot: Option<Shot> = None;
    let mut footstep_at: Option<Vec2> = None;

    if let Ok((player, pos, hitbox, loadout)) =
        world.query_one_mut::<(&mut Player, &mut Position, &Hitbox, &mut Loadout)>(entity)
    {
        // Movement, clamped so the body stays inside the world.
        let delta = movement_delta(input.move_x, input.move_y, player.speed);
        let half = hitbox.size * 0.5;
        let max = (ctx.world_size - half).max(half);
        pos.0 = (pos.0 + delta).clamp(half, max);
        player.is_moving = delta != Vec2::ZERO;

        // Aim.
        let to_pointer = input.pointer - pos.0;
        if to_pointer != Vec2::ZERO {
            player.aim_angle = to_pointer.y.atan2(to_pointer.x);
        }

        // Reload clock.
        let weapon = loadout.active_mut();
        match weapon.update(ctx.now) {
            Some(ReloadProgress::Finished) => {
                ctx.events.push(GameEvent::ReloadFinished {
                    weapon: weapon.kind,
                });
            }
            Some(ReloadProgress::Cancelled) => {
                log::warn!("{:?} reload stalled; cancelled", weapon.kind);
                ctx.events.push(GameEvent::ReloadCancelled {
                    weapon: weapon.kind,
                });
            }
            Some(ReloadProgress::Stage) | None => {}
        }

        // Trigger.
        if player.firing {
            if weapon.is_melee() {
                let reach = to_pointer.length();
                if weapon.swing(ctx.now, reach) {
                    melee_strike = Some((
                        pos.0,
                        weapon.profile.range,
                        weapon.profile.damage,
                        weapon.profile.shake,
                    ));
                }
            } else if weapon.profile.automatic || !player.has_fired_once {
                let bullets = weapon.fire(pos.0, player.aim_angle, ctx.now, &mut *ctx.rng);
                if !bullets.is_empty() {
                    if !weapon.profile.automatic {
                        player.has_fired_once = true;
                    }
                    shot = Some(Shot {
                        origin: pos.0,
                        aim: player.aim_angle,
                        bullets,
                        shake: weapon.profile.shake,
                        weapon: weapon.kind,
                    });
                }
            }
        }

        if player.is_moving && ctx.fx_rng.gen_bool(PLAYER_FOOTSTEP_CHANCE) {
            footstep_at = Some(pos.0 + Vec2::new(0.0, half.y));
        }
    }

    if let Some((origin, range, damage, shake)) = melee_strike {
        let hits = strike_zombies(world, origin, range, damage, ctx.events);
        ctx.events.push(GameEvent::MeleeSwing { hits });
        ctx.request_shake(shake);
    }

    if let Some(shot) = shot {
        let count = shot.bullets.len();
        for b in &shot.bullets {
            world_setup::spawn_bullet(world, b.origin, b.angle, b.damage, BulletOwner::Player);
        }
        let muzzle = shot.origin + Vec2::new(shot.aim.cos(), shot.aim.sin()) * MUZZLE_OFFSET;
        ctx.vfx.push(VfxRequest::MuzzleFlash {
            position: muzzle,
            angle: shot.aim,
        });
        ctx.request_shake(shot.shake);
        ctx.events.push(GameEvent::ShotFired {
            weapon: shot.weapon,
            bullets: count,
        });
    }

    if let Some(position) = footstep_at {
        ctx.vfx.push(VfxRequest::Footstep {
            position,
            color: PLAYER_FOOTSTEP_COLOR,
        });
    }
}

/// Damage every live zombie within `range` of `origin`. Returns the number hit.
pub(crate) fn strike_zombies(
    world: &World,
    origin: Vec2,
    range: f32,
    damage: f32,
    events: &mut Vec<GameEvent>,
) -> usize {
    let targets: Vec<Entity> = world
        .query::<(&Zombie, &Position)>()
        .iter()
        .filter(|(_, (z, pos))| z.state != ZombieState::Dead && pos.0.distance(origin) <= range)
        .map(|(e, _)| e)
        .collect();
    for &target in &targets {
        damage_zombie(world, target, damage, events);
    }
    targets.len()
}

/// Press or release the trigger. Releasing re-arms semi-automatic weapons.
pub fn set_trigger(world: &mut World, held: bool) {
    for (_e, player) in world.query_mut::<&mut Player>() {
        player.firing = held;
        if !held {
            player.has_fired_once = false;
        }
    }
}

/// Equip the next weapon. Trigger state does not carry across weapons.
pub fn cycle_weapon(world: &mut World, now: f64, events: &mut Vec<GameEvent>) {
    for (_e, (player, loadout)) in world.query_mut::<(&mut Player, &mut Loadout)>() {
        let weapon = loadout.cycle(now);
        player.firing = false;
        player.has_fired_once = false;
        events.push(GameEvent::WeaponSwitched { weapon });
    }
}

/// Start reloading the active weapon. Returns false when rejected.
pub fn request_reload(world: &mut World, now: f64, events: &mut Vec<GameEvent>) -> bool {
    let mut started = false;
    for (_e, (_player, loadout)) in world.query_mut::<(&Player, &mut Loadout)>() {
        let weapon = loadout.active_mut();
        if weapon.start_reload(now) {
            events.push(GameEvent::ReloadStarted {
                weapon: weapon.kind,
            });
            started = true;
        }
    }
    started
}

/// Switch between frag and molotov.
pub fn cycle_grenade(world: &mut World) {
    for (_e, player) in world.query_mut::<&mut Player>() {
        player.selected_grenade = player.selected_grenade.next();
    }
}

/// Throw the selected grenade toward `target`. Rejected when out of that
/// kind or still on cooldown.
pub fn throw_grenade(
    world: &mut World,
    now: f64,
    target: Vec2,
    events: &mut Vec<GameEvent>,
) -> bool {
    let Some(entity) = find_player(world) else {
        return false;
    };
    let thrown = match world.query_one_mut::<(&mut Player, &Position)>(entity) {
        Ok((player, pos)) => {
            let ready = player
                .last_grenade_secs
                .map_or(true, |last| now - last >= GRENADE_THROW_COOLDOWN_SECS);
            let kind = player.selected_grenade;
            let stock = match kind {
                GrenadeKind::Frag => &mut player.frag_grenades,
                GrenadeKind::Molotov => &mut player.molotovs,
            };
            if !ready || *stock == 0 {
                None
            } else {
                *stock -= 1;
                player.last_grenade_secs = Some(now);
                Some((kind, pos.0))
            }
        }
        Err(_) => None,
    };

    match thrown {
        Some((kind, origin)) => {
            world_setup::spawn_grenade(world, kind, origin, target, now);
            events.push(GameEvent::GrenadeThrown { kind });
            true
        }
        None => false,
    }
}

/// Hurt the player. `Killed` is reported only for the blow that takes
/// health to zero; a dead player ignores further hits.
pub fn damage_player(world: &World, amount: f32, events: &mut Vec<GameEvent>) -> HitOutcome {
    let Some(entity) = find_player(world) else {
        return HitOutcome::Ignored;
    };
    let Ok(mut health) = world.get::<&mut Health>(entity) else {
        return HitOutcome::Ignored;
    };
    if health.current <= 0.0 {
        return HitOutcome::Ignored;
    }
    health.current = (health.current - amount).max(0.0);
    events.push(GameEvent::PlayerDamaged {
        amount,
        remaining: health.current,
    });
    if health.current <= 0.0 {
        events.push(GameEvent::PlayerDied);
        return HitOutcome::Killed;
    }
    HitOutcome::Wounded
}

/// Heal the player up to max health. Returns the amount actually restored.
pub fn heal_player(world: &World, amount: f32) -> f32 {
    let Some(entity) = find_player(world) else {
        return 0.0;
    };
    match world.get::<&mut Health>(entity) {
        Ok(mut health) => {
            let before = health.current;
            health.current = (health.current + amount).min(health.max);
            health.current - before
        }
        Err(_) => 0.0,
    }
}
