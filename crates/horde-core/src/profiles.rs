//! Per-type tuning profiles.
//!
//! Consolidates the weapon, zombie, structure, grenade and shop tables.
//! Every lookup is a pure function of the type.

use crate::constants::*;
use crate::enums::*;
use crate::types::Rgb;

/// Fixed stats for a weapon type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponProfile {
    /// Damage per bullet (per pellet for the shotgun, per hit for melee).
    pub damage: f32,
    /// Minimum seconds between shots.
    pub fire_interval_secs: f64,
    /// Reach in pixels (melee reach, or nominal bullet range).
    pub range: f32,
    pub automatic: bool,
    pub feed: FeedKind,
    /// Rounds per full load. None for melee.
    pub capacity: Option<u32>,
    /// Full reload time in seconds across all stages.
    pub reload_secs: f64,
    pub reload_stages: u32,
    /// Bullets spawned per trigger pull.
    pub pellets: usize,
    /// Screen shake multiplier per shot (or per landed swing).
    pub shake: f32,
}

impl WeaponProfile {
    pub fn is_melee(&self) -> bool {
        self.feed == FeedKind::Melee
    }

    /// Expected duration of one reload stage.
    pub fn stage_secs(&self) -> f64 {
        if self.reload_stages == 0 {
            0.0
        } else {
            self.reload_secs / self.reload_stages as f64
        }
    }
}

/// Get the profile for a weapon type.
pub fn weapon_profile(weapon: WeaponType) -> WeaponProfile {
    match weapon {
        WeaponType::Knife => WeaponProfile {
            damage: 50.0,
            fire_interval_secs: 1.0,
            range: 50.0,
            automatic: false,
            feed: FeedKind::Melee,
            capacity: None,
            reload_secs: 0.0,
            reload_stages: 0,
            pellets: 0,
            shake: 0.5,
        },
        WeaponType::Pistol => WeaponProfile {
            damage: 25.0,
            fire_interval_secs: 0.25,
            range: 400.0,
            automatic: false,
            feed: FeedKind::Magazine,
            capacity: Some(12),
            reload_secs: 1.5,
            reload_stages: 3,
            pellets: 1,
            shake: 0.7,
        },
        WeaponType::AssaultRifle => WeaponProfile {
            damage: 15.0,
            fire_interval_secs: 0.1,
            range: 600.0,
            automatic: true,
            feed: FeedKind::Magazine,
            capacity: Some(30),
            reload_secs: 2.5,
            reload_stages: 3,
            pellets: 1,
            shake: 0.5,
        },
        WeaponType::Smg => WeaponProfile {
            damage: 12.0,
            fire_interval_secs: 0.08,
            range: 400.0,
            automatic: true,
            feed: FeedKind::Magazine,
            capacity: Some(35),
            reload_secs: 1.8,
            reload_stages: 3,
            pellets: 1,
            shake: 0.3,
        },
        WeaponType::Shotgun => WeaponProfile {
            damage: 10.0,
            fire_interval_secs: 0.75,
            range: 200.0,
            automatic: false,
            feed: FeedKind::Shell,
            capacity: Some(6),
            reload_secs: 2.0,
            reload_stages: 6,
            pellets: SHOTGUN_PELLETS,
            shake: 1.2,
        },
        WeaponType::BattleRifle => WeaponProfile {
            damage: 45.0,
            fire_interval_secs: 0.2,
            range: 800.0,
            automatic: false,
            feed: FeedKind::Magazine,
            capacity: Some(20),
            reload_secs: 2.2,
            reload_stages: 4,
            pellets: 1,
            shake: 0.9,
        },
    }
}

/// Fixed stats for a zombie type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZombieProfile {
    /// Movement speed (pixels per tick).
    pub speed: f32,
    pub max_health: f32,
    /// Damage per attack.
    pub damage: f32,
    pub color: Rgb,
    /// Cash granted on kill.
    pub reward: u32,
}

/// Get the profile for a zombie type.
pub fn zombie_profile(kind: ZombieType) -> ZombieProfile {
    match kind {
        ZombieType::Normal => ZombieProfile {
            speed: 2.0,
            max_health: 100.0,
            damage: 10.0,
            color: Rgb::new(0, 255, 0),
            reward: 25,
        },
        ZombieType::Fast => ZombieProfile {
            speed: 4.0,
            max_health: 50.0,
            damage: 5.0,
            color: Rgb::new(255, 100, 100),
            reward: 20,
        },
        ZombieType::Tank => ZombieProfile {
            speed: 1.0,
            max_health: 200.0,
            damage: 20.0,
            color: Rgb::new(100, 100, 255),
            reward: 50,
        },
    }
}

/// Behavior-specific parameters of a structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StructureBehavior {
    /// Passive blocker.
    Barrier,
    Spike {
        damage: f32,
        cooldown_secs: f64,
    },
    Slow {
        factor: f32,
        duration_secs: f64,
        cooldown_secs: f64,
    },
    Turret {
        damage: f32,
        fire_interval_secs: f64,
        range: f32,
    },
}

/// Fixed stats for a structure kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructureProfile {
    pub width: f32,
    pub height: f32,
    pub max_health: f32,
    pub behavior: StructureBehavior,
}

/// Get the profile for a structure kind.
pub fn structure_profile(kind: StructureKind) -> StructureProfile {
    match kind {
        StructureKind::Wall => StructureProfile {
            width: 20.0,
            height: 60.0,
            max_health: 200.0,
            behavior: StructureBehavior::Barrier,
        },
        StructureKind::SpikeTrap => StructureProfile {
            width: 40.0,
            height: 40.0,
            max_health: 100.0,
            behavior: StructureBehavior::Spike {
                damage: 20.0,
                cooldown_secs: 0.5,
            },
        },
        StructureKind::SlowTrap => StructureProfile {
            width: 40.0,
            height: 40.0,
            max_health: 100.0,
            behavior: StructureBehavior::Slow {
                factor: 0.5,
                duration_secs: 2.0,
                cooldown_secs: 1.0,
            },
        },
        StructureKind::BasicTurret => StructureProfile {
            width: 32.0,
            height: 32.0,
            max_health: 150.0,
            behavior: StructureBehavior::Turret {
                damage: 10.0,
                fire_interval_secs: 1.0,
                range: 200.0,
            },
        },
        StructureKind::AdvancedTurret => StructureProfile {
            width: 32.0,
            height: 32.0,
            max_health: 150.0,
            behavior: StructureBehavior::Turret {
                damage: 15.0,
                fire_interval_secs: 0.5,
                range: 300.0,
            },
        },
    }
}

/// Fixed stats for a throwable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrenadeProfile {
    pub radius: f32,
    pub damage: f32,
    pub fuse_secs: f64,
    /// Burning zone left behind: (lifetime seconds, damage per second).
    pub fire_zone: Option<(f64, f32)>,
}

pub fn grenade_profile(kind: GrenadeKind) -> GrenadeProfile {
    match kind {
        GrenadeKind::Frag => GrenadeProfile {
            radius: FRAG_RADIUS,
            damage: FRAG_DAMAGE,
            fuse_secs: GRENADE_FUSE_SECS,
            fire_zone: None,
        },
        GrenadeKind::Molotov => GrenadeProfile {
            radius: MOLOTOV_RADIUS,
            damage: MOLOTOV_DAMAGE,
            fuse_secs: GRENADE_FUSE_SECS,
            fire_zone: Some((FIRE_ZONE_SECS, FIRE_ZONE_DPS)),
        },
    }
}

/// Shop price in cash.
pub fn shop_price(item: ShopItem) -> u32 {
    match item {
        ShopItem::Wall => 100,
        ShopItem::SpikeTrap => 150,
        ShopItem::SlowTrap => 200,
        ShopItem::BasicTurret => 300,
        ShopItem::AdvancedTurret => 500,
        ShopItem::Grenade => 50,
        ShopItem::Molotov => 75,
        ShopItem::Medkit => 100,
    }
}

/// Bullet visual tier for a damage value.
pub fn trail_tier(damage: f32) -> TrailTier {
    if damage >= TRAIL_HEAVY_DAMAGE {
        TrailTier::Heavy
    } else if damage >= TRAIL_MEDIUM_DAMAGE {
        TrailTier::Medium
    } else {
        TrailTier::Light
    }
}

/// Trail color and ring length for a bullet tier.
pub fn trail_style(tier: TrailTier) -> (Rgb, usize) {
    match tier {
        TrailTier::Heavy => (Rgb::new(255, 100, 100), 15),
        TrailTier::Medium => (Rgb::new(100, 255, 255), 12),
        TrailTier::Light => (Rgb::new(255, 255, 100), 8),
    }
}
