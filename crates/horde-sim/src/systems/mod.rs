//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are functions over `&mut World` plus a [`TickContext`]. They do
//! not own state: all state lives in components. Side effects that cross
//! system boundaries (events, visual effects, despawns, shake) go through
//! the context's output queues.

pub mod bullets;
pub mod cleanup;
pub mod damage;
pub mod fire_zones;
pub mod grenades;
pub mod player;
pub mod snapshot;
pub mod traps;
pub mod turrets;
pub mod wave_spawner;
pub mod zombies;

use glam::Vec2;
use hecs::Entity;
use rand_chacha::ChaCha8Rng;

use horde_core::events::GameEvent;
use horde_core::types::Aabb;
use horde_vfx::VfxRequest;

/// Everything a system may read or emit during one tick.
pub struct TickContext<'a> {
    /// Simulation time at the start of this tick (seconds).
    pub now: f64,
    pub world_size: Vec2,
    /// Logical camera view used for culling.
    pub view: Aabb,
    /// Gameplay randomness (spread, spawn positions, zombie types).
    pub rng: &'a mut ChaCha8Rng,
    /// Presentation randomness (footstep rolls). Never feeds gameplay.
    pub fx_rng: &'a mut ChaCha8Rng,
    pub events: &'a mut Vec<GameEvent>,
    pub vfx: &'a mut Vec<VfxRequest>,
    pub despawn: &'a mut Vec<Entity>,
    /// Strongest shake requested this tick.
    pub shake: Option<f32>,
}

impl TickContext<'_> {
    pub fn request_shake(&mut self, multiplier: f32) {
        self.shake = Some(self.shake.map_or(multiplier, |s| s.max(multiplier)));
    }
}
