//! Simulation engine for HORDE.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod camera;
pub mod engine;
pub mod shop;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use horde_core as core;
pub use engine::{SimConfig, SimulationEngine};
