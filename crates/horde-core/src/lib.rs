//! Core types and definitions for the HORDE survival simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, tuning tables, and
//! constants. It has no dependency on any rendering, audio, or input
//! framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod profiles;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
