//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World position in pixels. Origin is the top-left corner of the world,
/// +x is right and +y is down (screen convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity in pixels per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Axis-aligned box described by its center and half extents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Euclidean distance between centers.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Angle in radians of the direction toward `other` (0 = +x).
    pub fn angle_to(&self, other: &Position) -> f32 {
        let d = other.0 - self.0;
        d.y.atan2(d.x)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Velocity of `speed` pixels per tick along `angle` radians.
    pub fn from_angle(angle: f32, speed: f32) -> Self {
        Self(Vec2::new(angle.cos(), angle.sin()) * speed)
    }

    /// Speed magnitude (pixels per tick).
    pub fn speed(&self) -> f32 {
        self.0.length()
    }

    /// Heading in radians (0 = +x).
    pub fn heading(&self) -> f32 {
        self.0.y.atan2(self.0.x)
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

impl Aabb {
    /// Box of the given full `size` centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Overlap test. Touching edges do not count as overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.half_extents + other.half_extents;
        d.x < reach.x && d.y < reach.y
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y
    }
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Upper bound on how many points any trail keeps.
pub const TRAIL_CAPACITY: usize = 16;

/// Fixed-capacity ring buffer of recent positions for trail rendering.
///
/// Storage never grows: once `limit` points are held, each push overwrites
/// the oldest one.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: [Vec2; TRAIL_CAPACITY],
    head: usize,
    len: usize,
    limit: usize,
}

impl TrailBuffer {
    /// A trail holding at most `limit` points (clamped to [`TRAIL_CAPACITY`]).
    /// A limit of 0 disables the trail.
    pub fn new(limit: usize) -> Self {
        Self {
            points: [Vec2::ZERO; TRAIL_CAPACITY],
            head: 0,
            len: 0,
            limit: limit.min(TRAIL_CAPACITY),
        }
    }

    pub fn push(&mut self, point: Vec2) {
        if self.limit == 0 {
            return;
        }
        self.points[self.head] = point;
        self.head = (self.head + 1) % self.limit;
        if self.len < self.limit {
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Points from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        let start = if self.len < self.limit { 0 } else { self.head };
        (0..self.len).map(move |i| self.points[(start + i) % self.limit])
    }

    pub fn to_vec(&self) -> Vec<Vec2> {
        self.iter().collect()
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(0)
    }
}
