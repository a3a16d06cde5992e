//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Between waves: shop purchases and structure placement are allowed.
    #[default]
    Shopping,
    /// A wave is live and the clock runs.
    Playing,
    /// Playing, but frozen. Time does not advance.
    Paused,
    /// The player died. Terminal.
    GameOver,
}

/// Player weapon types, in loadout order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    /// Semi-automatic sidearm. Equipped at the start of a run.
    #[default]
    Pistol,
    /// Melee. Direct damage to everything within reach.
    Knife,
    /// Fully automatic, long range.
    AssaultRifle,
    /// Fully automatic, fast and light.
    Smg,
    /// Pellet spread, shell-fed.
    Shotgun,
    /// Heavy semi-automatic, longest range.
    BattleRifle,
}

impl WeaponType {
    /// Fixed loadout order used by weapon cycling.
    pub const ALL: [WeaponType; 6] = [
        WeaponType::Pistol,
        WeaponType::Knife,
        WeaponType::AssaultRifle,
        WeaponType::Smg,
        WeaponType::Shotgun,
        WeaponType::BattleRifle,
    ];
}

/// How a weapon takes ammunition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedKind {
    /// No ammunition at all.
    Melee,
    /// Whole magazine swapped; empty during reload, full after the last stage.
    Magazine,
    /// One round loaded per completed reload stage.
    Shell,
}

/// Zombie variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZombieType {
    #[default]
    Normal,
    Fast,
    Tank,
}

impl ZombieType {
    pub const ALL: [ZombieType; 3] = [ZombieType::Normal, ZombieType::Fast, ZombieType::Tank];
}

/// Zombie behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZombieState {
    /// Just spawned, shambling in place.
    #[default]
    Idle,
    /// Moving toward the player.
    Chase,
    /// Overlapping the player or a blocking structure.
    Attack,
    /// Health reached zero. Awaiting cleanup.
    Dead,
}

/// Throwable kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrenadeKind {
    #[default]
    Frag,
    /// Smaller blast that leaves a burning zone behind.
    Molotov,
}

impl GrenadeKind {
    pub fn next(self) -> GrenadeKind {
        match self {
            GrenadeKind::Frag => GrenadeKind::Molotov,
            GrenadeKind::Molotov => GrenadeKind::Frag,
        }
    }
}

/// Placeable defensive structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Wall,
    SpikeTrap,
    SlowTrap,
    BasicTurret,
    AdvancedTurret,
}

impl StructureKind {
    /// Whether zombies are stopped by this structure (and attack it).
    pub fn blocks_zombies(self) -> bool {
        matches!(
            self,
            StructureKind::Wall | StructureKind::BasicTurret | StructureKind::AdvancedTurret
        )
    }
}

/// Items sold in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopItem {
    Wall,
    SpikeTrap,
    SlowTrap,
    BasicTurret,
    AdvancedTurret,
    Grenade,
    Molotov,
    Medkit,
}

impl ShopItem {
    pub const ALL: [ShopItem; 8] = [
        ShopItem::Wall,
        ShopItem::SpikeTrap,
        ShopItem::SlowTrap,
        ShopItem::BasicTurret,
        ShopItem::AdvancedTurret,
        ShopItem::Grenade,
        ShopItem::Molotov,
        ShopItem::Medkit,
    ];

    /// The structure this item places, if it is placeable.
    pub fn structure(self) -> Option<StructureKind> {
        match self {
            ShopItem::Wall => Some(StructureKind::Wall),
            ShopItem::SpikeTrap => Some(StructureKind::SpikeTrap),
            ShopItem::SlowTrap => Some(StructureKind::SlowTrap),
            ShopItem::BasicTurret => Some(StructureKind::BasicTurret),
            ShopItem::AdvancedTurret => Some(StructureKind::AdvancedTurret),
            ShopItem::Grenade | ShopItem::Molotov | ShopItem::Medkit => None,
        }
    }
}

/// Wave scheduler phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    #[default]
    AwaitingStart,
    /// Zombies still left to spawn.
    Spawning,
    /// Everything spawned, some still alive.
    Draining,
    /// Everything spawned and dead.
    Complete,
}

/// Who fired a bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Turret,
}

/// Bullet visual tier, derived from damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrailTier {
    Light,
    Medium,
    Heavy,
}

/// World edge a zombie enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Top,
        SpawnEdge::Right,
        SpawnEdge::Bottom,
        SpawnEdge::Left,
    ];
}

/// Grenade lifecycle. Removal follows the explosion visual window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrenadeState {
    /// In flight, fuse burning.
    #[default]
    Armed,
    /// Blast damage already applied; only the visual remains.
    Exploded,
}
