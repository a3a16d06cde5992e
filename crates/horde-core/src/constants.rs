//! Simulation constants and tuning parameters.

use crate::types::Rgb;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Screen and world ---

/// Default viewport width in pixels.
pub const SCREEN_WIDTH: f32 = 1280.0;

/// Default viewport height in pixels.
pub const SCREEN_HEIGHT: f32 = 720.0;

/// World size as a multiple of the screen size on each axis.
pub const WORLD_SCALE: f32 = 3.0;

// --- Player ---

/// Player movement speed (pixels per tick, per axis).
pub const PLAYER_SPEED: f32 = 7.0;

pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Player collision box edge (square).
pub const PLAYER_SIZE: f32 = 32.0;

/// Frag grenades carried at the start of a run.
pub const PLAYER_STARTING_GRENADES: u32 = 3;

pub const PLAYER_STARTING_MOLOTOVS: u32 = 0;

/// Minimum seconds between grenade throws.
pub const GRENADE_THROW_COOLDOWN_SECS: f64 = 2.0;

// --- Weapons ---

/// Bullet travel speed (pixels per tick).
pub const BULLET_SPEED: f32 = 15.0;

/// Edge of the reduced square hitbox used for bullet collision.
pub const BULLET_HITBOX: f32 = 4.0;

/// Random aim jitter for single-bullet weapons (radians, symmetric).
pub const BASE_SPREAD: f32 = 0.02;

/// Extra jitter per consecutive sustained shot on automatic weapons.
pub const SUSTAINED_SPREAD_STEP: f32 = 0.01;

/// Cap on the sustained-fire jitter bonus.
pub const SUSTAINED_SPREAD_MAX: f32 = 0.08;

/// Idle time (in multiples of the fire interval) that resets sustained fire.
pub const SUSTAINED_RESET_FACTOR: f64 = 2.0;

/// Pellets per shotgun trigger pull.
pub const SHOTGUN_PELLETS: usize = 5;

/// Half-width of the shotgun cone (radians).
pub const SHOTGUN_CONE: f32 = 0.2;

/// Per-pellet jitter inside the shotgun cone (radians, symmetric).
pub const SHOTGUN_PELLET_JITTER: f32 = 0.03;

/// A reload stage taking longer than this multiple of its expected
/// duration cancels the reload.
pub const RELOAD_STUCK_FACTOR: f64 = 3.0;

/// Damage thresholds for bullet trail tiers.
pub const TRAIL_HEAVY_DAMAGE: f32 = 40.0;
pub const TRAIL_MEDIUM_DAMAGE: f32 = 20.0;

// --- Zombies ---

/// Zombie collision box edge (square).
pub const ZOMBIE_SIZE: f32 = 32.0;

/// Player distance at which an idle zombie starts chasing.
pub const ZOMBIE_DETECTION_RANGE: f32 = 400.0;

/// Seconds after spawning before an idle zombie chases regardless of range.
pub const ZOMBIE_AWAKEN_SECS: f64 = 1.0;

/// Minimum seconds between attacks from one zombie.
pub const ZOMBIE_ATTACK_COOLDOWN_SECS: f64 = 1.0;

/// Zombie motion trail length (points).
pub const ZOMBIE_TRAIL_LENGTH: usize = 5;

// --- Waves ---

pub const WAVE_BASE_ZOMBIES: u32 = 5;
pub const WAVE_ZOMBIE_INCREMENT: u32 = 2;

/// Seconds between spawns within a wave.
pub const WAVE_SPAWN_DELAY_SECS: f64 = 2.0;

/// Chance that a non-boss spawn is an elevated type.
pub const WAVE_SPECIAL_CHANCE: f64 = 0.2;

/// Every Nth wave is a boss wave.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Distance outside the world edge at which zombies appear.
pub const SPAWN_EDGE_MARGIN: f32 = 50.0;

// --- Grenades ---

/// Grenade travel speed (pixels per tick).
pub const GRENADE_SPEED: f32 = 10.0;

pub const GRENADE_FUSE_SECS: f64 = 2.0;

/// How long the explosion stays visible after detonation.
pub const EXPLOSION_VISUAL_SECS: f64 = 0.5;

pub const FRAG_RADIUS: f32 = 100.0;
pub const FRAG_DAMAGE: f32 = 100.0;

pub const MOLOTOV_RADIUS: f32 = 80.0;
pub const MOLOTOV_DAMAGE: f32 = 50.0;

/// Lifetime of the burning zone a molotov leaves.
pub const FIRE_ZONE_SECS: f64 = 5.0;

/// Damage per second to zombies standing in fire.
pub const FIRE_ZONE_DPS: f32 = 20.0;

// --- Structures ---

/// Shop placement footprint (square edge).
pub const PLACEMENT_FOOTPRINT: f32 = 40.0;

// --- Camera ---

/// Fraction of the remaining distance the camera closes per tick.
pub const CAMERA_SMOOTHING: f32 = 0.05;

/// Shake amplitude for an intensity multiplier of 1.0.
pub const SHAKE_BASE_INTENSITY: f32 = 8.0;

/// Per-tick multiplicative shake decay.
pub const SHAKE_DECAY: f32 = 0.9;

/// Shake below this amplitude snaps to zero.
pub const SHAKE_CUTOFF: f32 = 0.1;

pub const SHAKE_EXPLOSION: f32 = 2.0;
pub const SHAKE_PLAYER_HIT: f32 = 1.0;

/// Inset of off-screen radar markers from the screen edge.
pub const RADAR_MARGIN: f32 = 30.0;

/// Smallest radar marker scale (far away zombies).
pub const RADAR_MIN_SCALE: f32 = 0.2;

// --- Economy ---

pub const STARTING_CASH: u32 = 500;

/// Health restored by a medkit.
pub const MEDKIT_HEAL: f32 = 50.0;

// --- VFX ---

/// Maximum number of permanent decals kept at once.
pub const DECAL_CAPACITY: usize = 200;

/// Maximum ambient motes alive at once.
pub const AMBIENT_CAP: usize = 100;

/// Ambient motes created per tick (while under the cap).
pub const AMBIENT_PER_TICK: usize = 3;

/// Padding around the viewport where ambient motes may appear.
pub const AMBIENT_PADDING: f32 = 100.0;

/// Chance per tick that a zombie leaves a footstep.
pub const ZOMBIE_FOOTSTEP_CHANCE: f64 = 0.1;

/// Chance per tick that the moving player leaves a footstep.
pub const PLAYER_FOOTSTEP_CHANCE: f64 = 0.2;

/// Blood particles for a bullet hitting a zombie.
pub const BLOOD_ON_ZOMBIE_HIT: usize = 15;

/// Blood particles for a zombie hitting the player.
pub const BLOOD_ON_PLAYER_HIT: usize = 20;

pub const ZOMBIE_FOOTSTEP_COLOR: Rgb = Rgb::new(100, 80, 80);
pub const PLAYER_FOOTSTEP_COLOR: Rgb = Rgb::new(150, 150, 150);
pub const MUZZLE_FLASH_COLOR: Rgb = Rgb::new(255, 200, 50);
pub const HEAL_COLOR: Rgb = Rgb::new(0, 255, 0);
pub const FIRE_ZONE_COLOR: Rgb = Rgb::new(255, 69, 0);
