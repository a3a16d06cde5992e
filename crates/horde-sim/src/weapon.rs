//! Weapon model: per-type stats, fire gating, spread, and staged reloads.
//!
//! A `Weapon` is plain runtime state plus its immutable profile. The player
//! system drives it once per tick: `update` advances reload stages, then
//! `fire` (or `swing` for melee) is attempted while the trigger is held.

use glam::Vec2;
use rand::Rng;

use horde_core::constants::*;
use horde_core::enums::{FeedKind, WeaponType};
use horde_core::profiles::{weapon_profile, WeaponProfile};

/// A bullet the weapon wants spawned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletSpawn {
    pub origin: Vec2,
    /// Travel direction (radians).
    pub angle: f32,
    pub damage: f32,
}

/// What happened to a reload during `Weapon::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadProgress {
    /// One stage done, more to go.
    Stage,
    /// Fully loaded.
    Finished,
    /// A stage overran its budget and the reload was dropped.
    Cancelled,
}

/// Runtime state of one weapon.
#[derive(Debug, Clone)]
pub struct Weapon {
    pub kind: WeaponType,
    pub profile: WeaponProfile,
    /// Rounds loaded. None for melee.
    pub ammo: Option<u32>,
    pub reloading: bool,
    /// Stages completed in the current reload.
    pub reload_stage: u32,
    /// Stages the current reload needs.
    pub reload_stages_needed: u32,
    pub stage_started_secs: f64,
    /// Set while the weapon is put away. A holstered reload is paused.
    pub holstered_secs: Option<f64>,
    pub last_shot_secs: Option<f64>,
    /// Consecutive shots fired without the trigger going idle.
    pub sustained_shots: u32,
}

impl Weapon {
    /// A fully loaded weapon of the given type.
    pub fn new(kind: WeaponType) -> Self {
        let profile = Self::configure(kind);
        Self {
            kind,
            profile,
            ammo: profile.capacity,
            reloading: false,
            reload_stage: 0,
            reload_stages_needed: 0,
            stage_started_secs: 0.0,
            holstered_secs: None,
            last_shot_secs: None,
            sustained_shots: 0,
        }
    }

    /// Fixed stats for a weapon type.
    pub fn configure(kind: WeaponType) -> WeaponProfile {
        weapon_profile(kind)
    }

    pub fn is_melee(&self) -> bool {
        self.profile.is_melee()
    }

    /// Fire-rate interval elapsed since the last shot.
    pub fn cooled_down(&self, now: f64) -> bool {
        match self.last_shot_secs {
            Some(last) => now - last >= self.profile.fire_interval_secs,
            None => true,
        }
    }

    /// Whether a ranged `fire` would succeed right now.
    pub fn can_fire(&self, now: f64) -> bool {
        !self.is_melee()
            && !self.reloading
            && self.ammo.map_or(true, |a| a > 0)
            && self.cooled_down(now)
    }

    /// Pull the trigger. Returns the bullets to spawn, or an empty list when
    /// the shot is rejected (melee, reloading, empty, or still cooling down).
    /// Ammo drops by one per successful pull regardless of pellet count.
    pub fn fire<R: Rng>(
        &mut self,
        origin: Vec2,
        aim_angle: f32,
        now: f64,
        rng: &mut R,
    ) -> Vec<BulletSpawn> {
        if !self.can_fire(now) {
            return Vec::new();
        }

        if self.profile.automatic {
            let idle_limit = self.profile.fire_interval_secs * SUSTAINED_RESET_FACTOR;
            let sustained = self.last_shot_secs.is_some_and(|last| now - last <= idle_limit);
            self.sustained_shots = if sustained { self.sustained_shots + 1 } else { 0 };
        }

        let bullets = if self.profile.pellets > 1 {
            self.pellet_spread(origin, aim_angle, rng)
        } else {
            let jitter = self.current_spread();
            let angle = aim_angle + rng.gen_range(-jitter..=jitter);
            vec![BulletSpawn {
                origin,
                angle,
                damage: self.profile.damage,
            }]
        };

        if let Some(ammo) = self.ammo.as_mut() {
            *ammo -= 1;
        }
        self.last_shot_secs = Some(now);
        bullets
    }

    /// Current single-bullet jitter half-width (radians).
    pub fn current_spread(&self) -> f32 {
        if self.profile.automatic {
            let bonus = (self.sustained_shots as f32 * SUSTAINED_SPREAD_STEP).min(SUSTAINED_SPREAD_MAX);
            BASE_SPREAD + bonus
        } else {
            BASE_SPREAD
        }
    }

    /// Pellets evenly fanned across the cone, each nudged by a little
    /// jitter and clamped back inside it.
    fn pellet_spread<R: Rng>(&self, origin: Vec2, aim_angle: f32, rng: &mut R) -> Vec<BulletSpawn> {
        let count = self.profile.pellets;
        let step = 2.0 * SHOTGUN_CONE / (count - 1) as f32;
        (0..count)
            .map(|i| {
                let base = -SHOTGUN_CONE + step * i as f32;
                let jitter = rng.gen_range(-SHOTGUN_PELLET_JITTER..=SHOTGUN_PELLET_JITTER);
                let offset = (base + jitter).clamp(-SHOTGUN_CONE, SHOTGUN_CONE);
                BulletSpawn {
                    origin,
                    angle: aim_angle + offset,
                    damage: self.profile.damage,
                }
            })
            .collect()
    }

    /// Melee gate. Returns true when the swing lands: the cooldown has
    /// elapsed and the target point is within reach. The cooldown restarts
    /// on every attempt that passes the fire-rate check, hit or miss.
    pub fn swing(&mut self, now: f64, target_distance: f32) -> bool {
        if !self.is_melee() || !self.cooled_down(now) {
            return false;
        }
        self.last_shot_secs = Some(now);
        target_distance <= self.profile.range
    }

    /// Begin a staged reload. Rejected for melee, while already reloading,
    /// or when the weapon is already full.
    pub fn start_reload(&mut self, now: f64) -> bool {
        let (Some(ammo), Some(capacity)) = (self.ammo, self.profile.capacity) else {
            return false;
        };
        if self.reloading || ammo >= capacity {
            return false;
        }

        self.reload_stages_needed = match self.profile.feed {
            FeedKind::Magazine => {
                self.ammo = Some(0);
                self.profile.reload_stages
            }
            FeedKind::Shell => capacity - ammo,
            FeedKind::Melee => return false,
        };
        self.reloading = true;
        self.reload_stage = 0;
        self.stage_started_secs = now;
        true
    }

    /// Advance the reload clock. At most one stage completes per call.
    pub fn update(&mut self, now: f64) -> Option<ReloadProgress> {
        if !self.reloading {
            return None;
        }

        let stage_secs = self.profile.stage_secs();
        let elapsed = now - self.stage_started_secs;

        if elapsed > stage_secs * RELOAD_STUCK_FACTOR {
            self.cancel_reload();
            return Some(ReloadProgress::Cancelled);
        }
        if elapsed < stage_secs {
            return None;
        }

        self.reload_stage += 1;
        self.stage_started_secs = now;
        if self.profile.feed == FeedKind::Shell {
            if let (Some(ammo), Some(capacity)) = (self.ammo.as_mut(), self.profile.capacity) {
                *ammo = (*ammo + 1).min(capacity);
            }
        }

        if self.reload_stage >= self.reload_stages_needed {
            self.ammo = self.profile.capacity;
            self.reloading = false;
            self.reload_stage = 0;
            Some(ReloadProgress::Finished)
        } else {
            Some(ReloadProgress::Stage)
        }
    }

    /// Put the weapon away. The reload clock stops until `draw`.
    pub fn holster(&mut self, now: f64) {
        if self.holstered_secs.is_none() {
            self.holstered_secs = Some(now);
        }
    }

    /// Take the weapon back out. A paused reload resumes where it stopped.
    pub fn draw(&mut self, now: f64) {
        if let Some(since) = self.holstered_secs.take() {
            if self.reloading {
                self.stage_started_secs += (now - since).max(0.0);
            }
        }
    }

    /// Drop an in-progress reload. Shells already loaded stay loaded.
    pub fn cancel_reload(&mut self) {
        self.reloading = false;
        self.reload_stage = 0;
        self.reload_stages_needed = 0;
    }

    /// Loaded fraction, 1.0 for melee.
    pub fn ammo_fraction(&self) -> f32 {
        match (self.ammo, self.profile.capacity) {
            (Some(ammo), Some(capacity)) if capacity > 0 => ammo as f32 / capacity as f32,
            _ => 1.0,
        }
    }

    /// Progress across all stages of the current reload, 0.0 when idle.
    pub fn reload_progress(&self, now: f64) -> f32 {
        if !self.reloading || self.reload_stages_needed == 0 {
            return 0.0;
        }
        let stage_secs = self.profile.stage_secs();
        let partial = if stage_secs > 0.0 {
            ((now - self.stage_started_secs) / stage_secs).clamp(0.0, 1.0)
        } else {
            0.0
        };
        ((self.reload_stage as f64 + partial) / self.reload_stages_needed as f64).clamp(0.0, 1.0)
            as f32
    }
}

/// The player's fixed, ordered set of weapons.
#[derive(Debug, Clone)]
pub struct Loadout {
    pub weapons: Vec<Weapon>,
    pub active: usize,
}

impl Loadout {
    /// Every weapon type, fully loaded, pistol equipped.
    pub fn standard() -> Self {
        Self {
            weapons: WeaponType::ALL.iter().map(|&kind| Weapon::new(kind)).collect(),
            active: 0,
        }
    }

    pub fn active(&self) -> &Weapon {
        &self.weapons[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Weapon {
        &mut self.weapons[self.active]
    }

    /// Equip the next weapon (wrapping). Returns the new weapon type.
    /// The outgoing weapon is holstered so its reload pauses.
    pub fn cycle(&mut self, now: f64) -> WeaponType {
        if !self.weapons.is_empty() {
            self.active_mut().holster(now);
            self.active = (self.active + 1) % self.weapons.len();
            self.active_mut().draw(now);
        }
        self.active().kind
    }
}
