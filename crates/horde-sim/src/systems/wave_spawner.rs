//! Wave scheduler: pacing, zombie type selection, and completion.
//!
//! AWAITING_START -> `start_next_wave` -> SPAWNING -> DRAINING -> COMPLETE.
//! One zombie spawns per spawn-delay interval at a random world edge.
//! Completion is latched and reported once per wave.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use horde_core::components::Zombie;
use horde_core::constants::*;
use horde_core::enums::{SpawnEdge, WavePhase, ZombieState, ZombieType};
use horde_core::events::GameEvent;
use horde_core::state::WaveView;

use crate::systems::TickContext;
use crate::world_setup;

/// Pure completion rule: nothing left to spawn and nothing left alive.
pub fn wave_complete(remaining_to_spawn: u32, alive: u32) -> bool {
    remaining_to_spawn == 0 && alive == 0
}

/// Zombies in a given wave.
pub fn wave_size(wave: u32) -> u32 {
    WAVE_BASE_ZOMBIES + wave.saturating_sub(1) * WAVE_ZOMBIE_INCREMENT
}

pub fn is_boss_wave(wave: u32) -> bool {
    wave > 0 && wave % BOSS_WAVE_INTERVAL == 0
}

#[derive(Debug, Clone)]
pub struct WaveScheduler {
    /// Current wave number (0 before the first wave).
    pub wave: u32,
    pub remaining_to_spawn: u32,
    pub spawn_delay_secs: f64,
    pub last_spawn_secs: Option<f64>,
    started: bool,
    completion_reported: bool,
}

impl Default for WaveScheduler {
    fn default() -> Self {
        Self {
            wave: 0,
            remaining_to_spawn: 0,
            spawn_delay_secs: WAVE_SPAWN_DELAY_SECS,
            last_spawn_secs: None,
            started: false,
            completion_reported: false,
        }
    }
}

impl WaveScheduler {
    /// Advance to the next wave and size it. Returns the new wave number.
    pub fn start_next_wave(&mut self) -> u32 {
        self.wave += 1;
        self.remaining_to_spawn = wave_size(self.wave);
        self.last_spawn_secs = None;
        self.started = true;
        self.completion_reported = false;
        self.wave
    }

    pub fn phase(&self, alive: u32) -> WavePhase {
        if !self.started {
            WavePhase::AwaitingStart
        } else if self.remaining_to_spawn > 0 {
            WavePhase::Spawning
        } else if alive > 0 {
            WavePhase::Draining
        } else {
            WavePhase::Complete
        }
    }

    /// Type for the next spawn. Boss waves are all tanks; otherwise an
    /// elevated type turns up at a fixed chance.
    pub fn choose_type(&self, rng: &mut ChaCha8Rng) -> ZombieType {
        if is_boss_wave(self.wave) {
            return ZombieType::Tank;
        }
        if rng.gen_bool(WAVE_SPECIAL_CHANCE) {
            if rng.gen_bool(0.5) {
                ZombieType::Fast
            } else {
                ZombieType::Tank
            }
        } else {
            ZombieType::Normal
        }
    }

    /// Latch completion. Returns true only on the first call that sees the
    /// wave complete.
    pub fn check_complete(&mut self, alive: u32) -> bool {
        if !self.started || self.completion_reported {
            return false;
        }
        if wave_complete(self.remaining_to_spawn, alive) {
            self.completion_reported = true;
            return true;
        }
        false
    }

    pub fn view(&self, alive: u32) -> WaveView {
        WaveView {
            number: self.wave,
            phase: self.phase(alive),
            remaining_to_spawn: self.remaining_to_spawn,
            alive,
            is_boss_wave: is_boss_wave(self.wave),
        }
    }
}

/// A point just outside a random world edge.
pub fn spawn_position(rng: &mut ChaCha8Rng, world_size: Vec2) -> Vec2 {
    let edge = SpawnEdge::ALL[rng.gen_range(0..SpawnEdge::ALL.len())];
    let m = SPAWN_EDGE_MARGIN;
    match edge {
        SpawnEdge::Top => Vec2::new(rng.gen_range(0.0..=world_size.x), -m),
        SpawnEdge::Bottom => Vec2::new(rng.gen_range(0.0..=world_size.x), world_size.y + m),
        SpawnEdge::Left => Vec2::new(-m, rng.gen_range(0.0..=world_size.y)),
        SpawnEdge::Right => Vec2::new(world_size.x + m, rng.gen_range(0.0..=world_size.y)),
    }
}

/// Zombies not yet dead.
pub fn alive_zombies(world: &World) -> u32 {
    world
        .query::<&Zombie>()
        .iter()
        .filter(|(_, z)| z.state != ZombieState::Dead)
        .count() as u32
}

/// Spawn the next zombie if due, then check for completion.
/// Returns the wave number the first time that wave completes.
pub fn run(world: &mut World, ctx: &mut TickContext, scheduler: &mut WaveScheduler) -> Option<u32> {
    if !scheduler.started {
        return None;
    }

    if scheduler.remaining_to_spawn > 0 {
        let due = scheduler
            .last_spawn_secs
            .map_or(true, |last| ctx.now - last >= scheduler.spawn_delay_secs);
        if due {
            let kind = scheduler.choose_type(ctx.rng);
            let at = spawn_position(ctx.rng, ctx.world_size);
            let entity = world_setup::spawn_zombie(world, kind, at, ctx.now);
            scheduler.remaining_to_spawn -= 1;
            scheduler.last_spawn_secs = Some(ctx.now);
            log::debug!("wave {}: spawned {kind:?} at {at}", scheduler.wave);
            ctx.events.push(GameEvent::ZombieSpawned {
                id: entity.id(),
                kind,
            });
        }
    }

    if scheduler.check_complete(alive_zombies(world)) {
        ctx.events.push(GameEvent::WaveComplete {
            wave: scheduler.wave,
        });
        return Some(scheduler.wave);
    }
    None
}
