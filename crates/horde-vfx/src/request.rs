//! Spawn requests queued by the simulation during a tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use horde_core::types::Rgb;

use crate::effects::ExplosionParams;

/// One visual effect to create at the end of the tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VfxRequest {
    Explosion {
        position: Vec2,
        params: ExplosionParams,
    },
    /// Short glowing streak behind a moving bullet.
    BulletTrail {
        position: Vec2,
        velocity: Vec2,
        color: Rgb,
    },
    /// Directional splatter plus a permanent pool decal.
    Blood {
        position: Vec2,
        direction: Vec2,
        amount: usize,
    },
    MuzzleFlash {
        position: Vec2,
        angle: f32,
    },
    Footstep {
        position: Vec2,
        color: Rgb,
    },
    Heal {
        position: Vec2,
    },
    /// Flicker from a burning area.
    Flames {
        position: Vec2,
        radius: f32,
    },
}
