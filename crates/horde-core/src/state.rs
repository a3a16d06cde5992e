//! Game state snapshot: the complete visible state sent to the frontend each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Rgb, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub cash: u32,
    pub player: PlayerView,
    pub zombies: Vec<ZombieView>,
    pub bullets: Vec<BulletView>,
    pub grenades: Vec<GrenadeView>,
    pub fire_zones: Vec<FireZoneView>,
    pub structures: Vec<StructureView>,
    pub particles: Vec<ParticleView>,
    pub decals: Vec<DecalView>,
    pub camera: CameraView,
    /// Markers for zombies outside the viewport.
    pub radar: Vec<RadarBlip>,
    /// Purchased structures waiting to be placed, by slot.
    pub inventory: Vec<ShopItem>,
    pub events: Vec<GameEvent>,
}

/// Wave scheduler status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub number: u32,
    pub phase: WavePhase,
    pub remaining_to_spawn: u32,
    pub alive: u32,
    pub is_boss_wave: bool,
}

/// Player status for the HUD and sprite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub aim_angle: f32,
    /// 0.0 - 1.0.
    pub health_fraction: f32,
    pub weapon: WeaponType,
    /// 0.0 - 1.0. Always 1.0 for melee.
    pub ammo_fraction: f32,
    pub ammo: Option<u32>,
    pub reloading: bool,
    /// 0.0 - 1.0 across all reload stages.
    pub reload_progress: f32,
    pub frag_grenades: u32,
    pub molotovs: u32,
    pub selected_grenade: GrenadeKind,
    pub is_moving: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZombieView {
    pub id: u32,
    pub kind: ZombieType,
    pub state: ZombieState,
    pub position: Vec2,
    pub facing: f32,
    pub health_fraction: f32,
    pub color: Rgb,
    pub slowed: bool,
    pub trail: Vec<Vec2>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub id: u32,
    pub position: Vec2,
    pub angle: f32,
    pub tier: TrailTier,
    pub owner: BulletOwner,
    pub trail: Vec<Vec2>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrenadeView {
    pub id: u32,
    pub kind: GrenadeKind,
    pub state: GrenadeState,
    pub position: Vec2,
    /// 0.0 - 1.0 of the fuse burned (armed), or of the blast visual elapsed.
    pub progress: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireZoneView {
    pub position: Vec2,
    pub radius: f32,
    pub remaining_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureView {
    pub id: u32,
    pub kind: StructureKind,
    pub position: Vec2,
    pub size: Vec2,
    pub health_fraction: f32,
    /// Turret barrel angle.
    pub aim_angle: Option<f32>,
    /// Trap cooling down.
    pub armed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec2,
    pub color: Rgb,
    pub alpha: u8,
    pub size: f32,
    pub glow: bool,
    pub trail: Vec<Vec2>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecalView {
    pub position: Vec2,
    pub color: Rgb,
    pub size: f32,
    pub alpha: u8,
}

/// Camera state. `position` is the logical top-left of the view;
/// `shake_offset` is added only when drawing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Vec2,
    pub shake_offset: Vec2,
    pub viewport: Vec2,
}

/// Off-screen zombie indicator, in screen coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarBlip {
    pub zombie_id: u32,
    pub screen_position: Vec2,
    /// 0.2 - 1.0, larger when closer.
    pub scale: f32,
}
