//! Follow camera with screen shake.
//!
//! `position` is the logical top-left of the view and is what culling uses.
//! Shake only produces a render offset on top of it.

use glam::Vec2;
use rand::Rng;

use horde_core::constants::*;
use horde_core::state::{CameraView, RadarBlip};
use horde_core::types::Aabb;

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec2,
    pub viewport: Vec2,
    pub world: Vec2,
    /// Current shake amplitude in pixels.
    pub shake: f32,
    pub shake_offset: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2, world: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport,
            world,
            shake: 0.0,
            shake_offset: Vec2::ZERO,
        }
    }

    /// Top-left that would center `target`, clamped so the view stays
    /// inside the world.
    pub fn target_for(&self, target: Vec2) -> Vec2 {
        let max = (self.world - self.viewport).max(Vec2::ZERO);
        (target - self.viewport * 0.5).clamp(Vec2::ZERO, max)
    }

    /// Jump straight to `target` with no smoothing.
    pub fn snap_to(&mut self, target: Vec2) {
        self.position = self.target_for(target);
    }

    /// Close a fixed fraction of the gap to `target` this tick.
    pub fn follow(&mut self, target: Vec2) {
        let goal = self.target_for(target);
        self.position += (goal - self.position) * CAMERA_SMOOTHING;
    }

    /// Restart the shake at the base intensity times `multiplier`.
    pub fn add_shake(&mut self, multiplier: f32) {
        self.shake = SHAKE_BASE_INTENSITY * multiplier;
    }

    /// Roll a new integer render offset and decay the amplitude.
    pub fn update_shake<R: Rng>(&mut self, rng: &mut R) {
        if self.shake <= 0.0 {
            self.shake_offset = Vec2::ZERO;
            return;
        }
        let amp = self.shake as i32;
        self.shake_offset = Vec2::new(
            rng.gen_range(-amp..=amp) as f32,
            rng.gen_range(-amp..=amp) as f32,
        );
        self.shake *= SHAKE_DECAY;
        if self.shake < SHAKE_CUTOFF {
            self.shake = 0.0;
        }
    }

    /// Logical view rectangle in world coordinates.
    pub fn view(&self) -> Aabb {
        Aabb::from_center(self.position + self.viewport * 0.5, self.viewport)
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.position
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.position
    }

    pub fn is_visible(&self, world: Vec2) -> bool {
        let s = self.world_to_screen(world);
        s.x >= 0.0 && s.y >= 0.0 && s.x <= self.viewport.x && s.y <= self.viewport.y
    }

    /// Edge marker for an off-screen point, or None if it is on screen.
    /// Markers hug the screen edge; closer points get larger scales.
    pub fn radar_blip(&self, zombie_id: u32, world: Vec2) -> Option<RadarBlip> {
        if self.is_visible(world) {
            return None;
        }
        let mut s = self.world_to_screen(world);
        if s.x < 0.0 {
            s.x = RADAR_MARGIN;
        } else if s.x > self.viewport.x {
            s.x = self.viewport.x - RADAR_MARGIN;
        }
        if s.y < 0.0 {
            s.y = RADAR_MARGIN;
        } else if s.y > self.viewport.y {
            s.y = self.viewport.y - RADAR_MARGIN;
        }

        let center = self.position + self.viewport * 0.5;
        let max_distance = self.world.length().max(1.0);
        let scale = 1.0 - (world.distance(center) / max_distance).min(1.0 - RADAR_MIN_SCALE);
        Some(RadarBlip {
            zombie_id,
            screen_position: s,
            scale,
        })
    }

    pub fn view_state(&self) -> CameraView {
        CameraView {
            position: self.position,
            shake_offset: self.shake_offset,
            viewport: self.viewport,
        }
    }
}
