//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Rgb, TrailBuffer};

/// Hit points. Clamped to `[0, max]` by the systems that change it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

/// Collision box size, centered on the entity's position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub size: Vec2,
}

/// Base render color.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tint(pub Rgb);

/// Recent positions for motion-trail rendering.
#[derive(Debug, Clone)]
pub struct Trail(pub TrailBuffer);

/// The player singleton. The weapon loadout lives alongside it as a
/// separate component owned by the simulation crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Movement speed (pixels per tick, per axis).
    pub speed: f32,
    /// Facing angle toward the pointer (radians).
    pub aim_angle: f32,
    /// Trigger held.
    pub firing: bool,
    /// A semi-automatic weapon already fired during this trigger hold.
    pub has_fired_once: bool,
    /// Moved during the last tick.
    pub is_moving: bool,
    pub frag_grenades: u32,
    pub molotovs: u32,
    pub selected_grenade: GrenadeKind,
    /// Time of the last successful throw.
    pub last_grenade_secs: Option<f64>,
}

/// Speed multiplier held by a zombie, keyed by the trap that applied it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlowDebuff {
    pub source: Entity,
    pub factor: f32,
}

/// Zombie actor state.
#[derive(Debug, Clone)]
pub struct Zombie {
    pub kind: ZombieType,
    pub state: ZombieState,
    /// Undebuffed speed (pixels per tick).
    pub base_speed: f32,
    pub damage: f32,
    pub detection_range: f32,
    pub attack_cooldown_secs: f64,
    pub last_attack_secs: Option<f64>,
    pub spawned_at_secs: f64,
    /// Facing angle (radians).
    pub facing: f32,
    /// Active slow multipliers. Effective speed is base times their product.
    pub slows: Vec<SlowDebuff>,
}

/// Straight-line projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub damage: f32,
    pub owner: BulletOwner,
    pub tier: TrailTier,
}

/// Thrown explosive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Grenade {
    pub kind: GrenadeKind,
    pub state: GrenadeState,
    pub thrown_at_secs: f64,
    pub fuse_secs: f64,
    pub radius: f32,
    pub damage: f32,
    pub exploded_at_secs: Option<f64>,
}

/// Burning area left by a molotov.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireZone {
    pub radius: f32,
    pub damage_per_sec: f32,
    pub expires_at_secs: f64,
}

/// Any placed defensive structure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
}

/// What a trap does to the zombie that triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrapEffect {
    Spike { damage: f32 },
    Slow { factor: f32, duration_secs: f64 },
}

/// A zombie currently under this trap's slow, with its expiry time.
#[derive(Debug, Clone, Copy)]
pub struct SlowMark {
    pub zombie: Entity,
    pub expires_at_secs: f64,
}

/// Cooldown-gated trap.
#[derive(Debug, Clone)]
pub struct Trap {
    pub effect: TrapEffect,
    pub cooldown_secs: f64,
    /// Earliest time the trap may trigger again.
    pub ready_at_secs: f64,
    /// Zombies under an active slow from this trap (slow traps only).
    pub affected: Vec<SlowMark>,
}

/// Auto-targeting turret.
#[derive(Debug, Clone, Copy)]
pub struct Turret {
    pub damage: f32,
    pub fire_interval_secs: f64,
    pub range: f32,
    pub aim_angle: f32,
    pub last_shot_secs: Option<f64>,
    /// Target chosen this tick. Re-validated every tick.
    pub target: Option<Entity>,
}
