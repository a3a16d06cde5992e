//! Permanent ground marks.
//!
//! Decals never expire on their own. The layer is capped and evicts the
//! oldest mark first once full.

use std::collections::VecDeque;

use glam::Vec2;

use horde_core::types::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decal {
    pub position: Vec2,
    pub color: Rgb,
    pub size: f32,
    pub alpha: u8,
}

/// FIFO-capped decal store.
#[derive(Debug, Clone)]
pub struct DecalLayer {
    decals: VecDeque<Decal>,
    capacity: usize,
}

impl DecalLayer {
    pub fn new(capacity: usize) -> Self {
        Self {
            decals: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Stamp a decal, evicting the oldest if at capacity.
    pub fn stamp(&mut self, decal: Decal) {
        if self.capacity == 0 {
            return;
        }
        while self.decals.len() >= self.capacity {
            self.decals.pop_front();
        }
        self.decals.push_back(decal);
    }

    pub fn len(&self) -> usize {
        self.decals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decals.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Decal> {
        self.decals.iter()
    }

    pub fn clear(&mut self) {
        self.decals.clear();
    }
}
