//! Particle and visual-effects engine for the HORDE simulation.
//!
//! Fire-and-forget: the simulation pushes [`VfxRequest`]s and nothing in
//! gameplay ever reads particle state back. The engine owns its own RNG
//! so visual noise never perturbs gameplay draws.

pub mod decals;
pub mod effects;
pub mod particle;
pub mod request;
pub mod system;

pub use decals::{Decal, DecalLayer};
pub use effects::ExplosionParams;
pub use particle::Particle;
pub use request::VfxRequest;
pub use system::ParticleSystem;

#[cfg(test)]
mod tests;
