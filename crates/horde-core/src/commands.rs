//! Logical input commands sent from the frontend to the simulation.
//!
//! The core never polls a device. Frontends translate keys and mouse
//! state into these commands, which are applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement and aim ---
    /// Per-axis movement intent, each in {-1, 0, 1}. Held until changed.
    SetMoveIntent { x: i8, y: i8 },
    /// Pointer position in world coordinates.
    SetPointer { x: f32, y: f32 },

    // --- Weapons ---
    /// Trigger pressed.
    FireDown,
    /// Trigger released.
    FireUp,
    /// Begin reloading the active weapon.
    Reload,
    /// Switch to the next weapon in the loadout.
    CycleWeapon,
    /// Throw the selected grenade toward the pointer.
    ThrowGrenade,
    /// Switch between frag and molotov.
    CycleGrenade,

    // --- Shop ---
    /// Buy an item (shopping phase only).
    Purchase { item: ShopItem },
    /// Place the structure held in an inventory slot at a world position.
    Place { slot: usize, x: f32, y: f32 },
    /// Leave the shop and start the next wave.
    StartNextWave,

    // --- Simulation control ---
    Pause,
    Resume,
}
