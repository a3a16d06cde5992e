//! Events emitted by the simulation for audio, UI and economy feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Discrete things that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    // --- Waves ---
    WaveStarted { wave: u32, zombies: u32 },
    /// Reported once per wave.
    WaveComplete { wave: u32 },

    // --- Zombies ---
    ZombieSpawned { id: u32, kind: ZombieType },
    /// Emitted exactly once per zombie, in the tick it dies.
    ZombieKilled {
        kind: ZombieType,
        reward: u32,
        position: Vec2,
    },

    // --- Player ---
    PlayerDamaged { amount: f32, remaining: f32 },
    PlayerHealed { amount: f32 },
    PlayerDied,

    // --- Weapons ---
    ShotFired { weapon: WeaponType, bullets: usize },
    MeleeSwing { hits: usize },
    ReloadStarted { weapon: WeaponType },
    ReloadFinished { weapon: WeaponType },
    /// A reload stage stalled and the reload was abandoned.
    ReloadCancelled { weapon: WeaponType },
    WeaponSwitched { weapon: WeaponType },
    GrenadeThrown { kind: GrenadeKind },
    GrenadeExploded {
        kind: GrenadeKind,
        position: Vec2,
        zombies_hit: usize,
    },

    // --- Structures ---
    StructurePlaced { kind: StructureKind, position: Vec2 },
    StructureDestroyed { kind: StructureKind, position: Vec2 },
    TurretFired { position: Vec2 },
    TrapTriggered { kind: StructureKind },

    // --- Economy ---
    Purchased { item: ShopItem, cash: u32 },
    CashGranted { amount: u32, cash: u32 },

    // --- Phase ---
    GameOver { wave: u32 },
}
