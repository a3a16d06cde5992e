//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use horde_core::commands::PlayerCommand;
use horde_core::components::{Hitbox, Player, Structure};
use horde_core::constants::*;
use horde_core::enums::{GamePhase, ShopItem};
use horde_core::events::GameEvent;
use horde_core::state::GameStateSnapshot;
use horde_core::types::{Aabb, Position, SimTime};
use horde_vfx::{ParticleSystem, VfxRequest};

use crate::camera::Camera;
use crate::shop::Shop;
use crate::systems;
use crate::systems::player::PlayerInput;
use crate::systems::snapshot::SnapshotInputs;
use crate::systems::wave_spawner::WaveScheduler;
use crate::systems::TickContext;
use crate::world_setup;

/// Seed offset for the presentation RNG so it never mirrors gameplay draws.
const FX_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for starting a new simulation. Every field has a default,
/// so a host can load a partial JSON object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub screen_width: f32,
    pub screen_height: f32,
    pub starting_cash: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            starting_cash: STARTING_CASH,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// The world is a fixed multiple of the screen on each axis.
    pub fn world_size(&self) -> Vec2 {
        self.viewport() * WORLD_SCALE
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    fx_rng: ChaCha8Rng,
    world_size: Vec2,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    vfx_queue: Vec<VfxRequest>,
    input: PlayerInput,
    particles: ParticleSystem,
    camera: Camera,
    shop: Shop,
    waves: WaveScheduler,
}

impl SimulationEngine {
    /// Create a new engine in the shopping phase with the player at the
    /// world center.
    pub fn new(config: SimConfig) -> Self {
        let world_size = config.world_size();
        let mut world = World::new();
        let center = world_size * 0.5;
        world_setup::spawn_player(&mut world, center);

        let mut camera = Camera::new(config.viewport(), world_size);
        camera.snap_to(center);

        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            fx_rng: ChaCha8Rng::seed_from_u64(config.seed ^ FX_SEED_SALT),
            world_size,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            vfx_queue: Vec::new(),
            input: PlayerInput {
                pointer: center,
                ..PlayerInput::default()
            },
            particles: ParticleSystem::new(config.seed.wrapping_add(1)),
            camera,
            shop: Shop::new(config.starting_cash),
            waves: WaveScheduler::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.time.advance();
        } else {
            self.particles.handle_all(self.vfx_queue.drain(..));
        }

        let alive = systems::wave_spawner::alive_zombies(&self.world);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotInputs {
                time: self.time,
                phase: self.phase,
                wave: self.waves.view(alive),
                cash: self.shop.cash(),
                camera: &self.camera,
                particles: &self.particles,
                inventory: self.shop.inventory(),
                events: std::mem::take(&mut self.events),
            },
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn cash(&self) -> u32 {
        self.shop.cash()
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn wave(&self) -> &WaveScheduler {
        &self.waves
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a zombie directly (for tests needing precise placement).
    #[cfg(test)]
    pub fn spawn_test_zombie(
        &mut self,
        kind: horde_core::enums::ZombieType,
        at: Vec2,
    ) -> Entity {
        world_setup::spawn_zombie(&mut self.world, kind, at, self.time.elapsed_secs)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.phase == GamePhase::GameOver {
            log::debug!("ignoring {command:?}: game over");
            return;
        }
        let now = self.time.elapsed_secs;
        let playing = self.phase == GamePhase::Playing;

        match command {
            PlayerCommand::SetMoveIntent { x, y } => {
                self.input.move_x = x.signum();
                self.input.move_y = y.signum();
            }
            PlayerCommand::SetPointer { x, y } => {
                self.input.pointer = Vec2::new(x, y);
            }
            PlayerCommand::FireDown => {
                if playing {
                    systems::player::set_trigger(&mut self.world, true);
                }
            }
            PlayerCommand::FireUp => {
                systems::player::set_trigger(&mut self.world, false);
            }
            PlayerCommand::Reload => {
                if !playing || !systems::player::request_reload(&mut self.world, now, &mut self.events) {
                    log::debug!("reload rejected");
                }
            }
            PlayerCommand::CycleWeapon => {
                systems::player::cycle_weapon(&mut self.world, now, &mut self.events);
            }
            PlayerCommand::ThrowGrenade => {
                let target = self.input.pointer;
                if !playing
                    || !systems::player::throw_grenade(&mut self.world, now, target, &mut self.events)
                {
                    log::debug!("grenade throw rejected");
                }
            }
            PlayerCommand::CycleGrenade => {
                systems::player::cycle_grenade(&mut self.world);
            }
            PlayerCommand::Purchase { item } => {
                if self.phase == GamePhase::Shopping {
                    self.purchase(item);
                } else {
                    log::debug!("purchase of {item:?} outside the shop");
                }
            }
            PlayerCommand::Place { slot, x, y } => {
                if self.phase == GamePhase::Shopping {
                    self.place(slot, Vec2::new(x, y));
                } else {
                    log::debug!("placement outside the shop");
                }
            }
            PlayerCommand::StartNextWave => {
                if self.phase == GamePhase::Shopping {
                    let wave = self.waves.start_next_wave();
                    let zombies = self.waves.remaining_to_spawn;
                    log::info!("wave {wave} started: {zombies} zombies");
                    self.events.push(GameEvent::WaveStarted { wave, zombies });
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::Pause => {
                if playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
        }
    }

    fn purchase(&mut self, item: ShopItem) {
        if let Err(err) = self.shop.purchase(item) {
            log::debug!("purchase of {item:?} rejected: {err}");
            return;
        }
        log::info!("bought {item:?}, {} cash left", self.shop.cash());
        self.events.push(GameEvent::Purchased {
            item,
            cash: self.shop.cash(),
        });

        match item {
            ShopItem::Grenade | ShopItem::Molotov => {
                for (_e, player) in self.world.query_mut::<&mut Player>() {
                    if item == ShopItem::Grenade {
                        player.frag_grenades += 1;
                    } else {
                        player.molotovs += 1;
                    }
                }
            }
            ShopItem::Medkit => {
                let healed = systems::player::heal_player(&self.world, MEDKIT_HEAL);
                if let Some(position) = systems::player::player_position(&self.world) {
                    self.vfx_queue.push(VfxRequest::Heal { position });
                }
                self.events.push(GameEvent::PlayerHealed { amount: healed });
            }
            _ => {}
        }
    }

    fn place(&mut self, slot: usize, at: Vec2) {
        let occupied: Vec<Aabb> = self
            .world
            .query::<(&Structure, &Position, &Hitbox)>()
            .iter()
            .map(|(_, (_, pos, hitbox))| Aabb::from_center(pos.0, hitbox.size))
            .collect();

        match self.shop.take_for_placement(slot, at, self.world_size, &occupied) {
            Ok(kind) => {
                world_setup::spawn_structure(&mut self.world, kind, at);
                log::info!("placed {kind:?} at {at}");
                self.events.push(GameEvent::StructurePlaced { kind, position: at });
            }
            Err(err) => log::debug!("placement rejected: {err}"),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let first_new_event = self.events.len();
        let mut ctx = TickContext {
            now: self.time.elapsed_secs,
            world_size: self.world_size,
            view: self.camera.view(),
            rng: &mut self.rng,
            fx_rng: &mut self.fx_rng,
            events: &mut self.events,
            vfx: &mut self.vfx_queue,
            despawn: &mut self.despawn_buffer,
            shake: None,
        };

        // 1. Player (movement, aim, weapon timers, fire/melee)
        systems::player::run(&mut self.world, &mut ctx, &self.input);
        // 2. Turrets
        systems::turrets::run(&mut self.world, &mut ctx);
        // 3. Bullets (move, hit zombies, cull)
        systems::bullets::run(&mut self.world, &mut ctx);
        // 4. Zombies (AI, movement, attacks)
        systems::zombies::run(&mut self.world, &mut ctx);
        // 5. Traps
        systems::traps::run(&mut self.world, &mut ctx);
        // 6. Grenades (fuse, blast damage)
        systems::grenades::run(&mut self.world, &mut ctx);
        // 7. Fire zones
        systems::fire_zones::run(&mut self.world, &mut ctx);
        // 8. Rewards
        let mut player_died = false;
        let mut rewards = Vec::new();
        for event in &ctx.events[first_new_event..] {
            match event {
                GameEvent::ZombieKilled { reward, .. } => rewards.push(*reward),
                GameEvent::PlayerDied => player_died = true,
                _ => {}
            }
        }
        for amount in rewards {
            self.shop.grant(amount);
            ctx.events.push(GameEvent::CashGranted {
                amount,
                cash: self.shop.cash(),
            });
        }
        // 9. Wave scheduler
        let completed = systems::wave_spawner::run(&mut self.world, &mut ctx, &mut self.waves);
        let shake = ctx.shake;

        if player_died {
            log::info!("player died on wave {}", self.waves.wave);
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                wave: self.waves.wave,
            });
        } else if let Some(wave) = completed {
            log::info!("wave {wave} complete, {} cash", self.shop.cash());
            self.phase = GamePhase::Shopping;
        }

        // 10. Camera
        if let Some(target) = systems::player::player_position(&self.world) {
            self.camera.follow(target);
        }
        if let Some(multiplier) = shake {
            self.camera.add_shake(multiplier);
        }
        self.camera.update_shake(&mut self.fx_rng);

        // 11. VFX
        let pad = Vec2::splat(AMBIENT_PADDING);
        self.particles
            .create_ambient(self.camera.position - pad, self.camera.viewport + pad * 2.0);
        self.particles.handle_all(self.vfx_queue.drain(..));
        self.particles.update();

        // 12. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
