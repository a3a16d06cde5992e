//! A single particle and its per-tick integrator.

use glam::Vec2;

use horde_core::types::{Rgb, TrailBuffer};

/// Ephemeral visual particle. Lifetimes are counted in ticks.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    /// Pixels per tick.
    pub velocity: Vec2,
    pub color: Rgb,
    pub alpha: u8,
    pub size: f32,
    /// Ticks left to live.
    pub lifetime: u32,
    pub max_lifetime: u32,
    /// Added to vertical velocity each tick (negative drifts upward).
    pub gravity: f32,
    /// Alpha follows the remaining-lifetime fraction.
    pub fade: bool,
    pub glow: bool,
    /// Counted against the ambient cap.
    pub ambient: bool,
    pub trail: TrailBuffer,
    start_alpha: u8,
}

impl Particle {
    /// Opaque, fading, size 2, no gravity, glow or trail.
    pub fn new(position: Vec2, color: Rgb, velocity: Vec2, lifetime: u32) -> Self {
        Self {
            position,
            velocity,
            color,
            alpha: 255,
            size: 2.0,
            lifetime,
            max_lifetime: lifetime,
            gravity: 0.0,
            fade: true,
            glow: false,
            ambient: false,
            trail: TrailBuffer::new(0),
            start_alpha: 255,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self.start_alpha = alpha;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_glow(mut self) -> Self {
        self.glow = true;
        self
    }

    pub fn with_trail(mut self, length: usize) -> Self {
        self.trail = TrailBuffer::new(length);
        self
    }

    pub fn without_fade(mut self) -> Self {
        self.fade = false;
        self
    }

    pub fn as_ambient(mut self) -> Self {
        self.ambient = true;
        self
    }

    /// Advance one tick. Returns false once the particle has expired.
    pub fn update(&mut self) -> bool {
        if self.lifetime == 0 {
            return false;
        }
        if self.trail.limit() > 0 {
            self.trail.push(self.position);
        }

        self.position += self.velocity;
        self.velocity.y += self.gravity;

        self.lifetime -= 1;
        if self.fade && self.max_lifetime > 0 {
            let fraction = self.lifetime as f32 / self.max_lifetime as f32;
            self.alpha = (self.start_alpha as f32 * fraction) as u8;
        }

        self.lifetime > 0
    }

    /// Fraction of life remaining (1.0 when fresh).
    pub fn life_fraction(&self) -> f32 {
        if self.max_lifetime == 0 {
            0.0
        } else {
            self.lifetime as f32 / self.max_lifetime as f32
        }
    }
}
