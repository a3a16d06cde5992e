//! Named effect factories.
//!
//! Each factory draws from fixed distributions (angle, speed, lifetime,
//! palette). Speeds are pixels per tick and lifetimes are ticks.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use horde_core::constants::{AMBIENT_CAP, AMBIENT_PER_TICK};
use horde_core::types::Rgb;

use crate::decals::Decal;
use crate::particle::Particle;
use crate::system::ParticleSystem;

const FIRE_PALETTE: [Rgb; 4] = [
    Rgb::new(255, 165, 0),
    Rgb::new(255, 69, 0),
    Rgb::new(255, 215, 0),
    Rgb::new(255, 255, 0),
];

const SMOKE_PALETTE: [Rgb; 3] = [
    Rgb::new(100, 100, 100),
    Rgb::new(120, 120, 120),
    Rgb::new(80, 80, 80),
];

const BLOOD_PALETTE: [Rgb; 4] = [
    Rgb::new(150, 0, 0),
    Rgb::new(180, 0, 0),
    Rgb::new(200, 0, 0),
    Rgb::new(120, 0, 0),
];

const SPARK_COLOR: Rgb = Rgb::new(255, 255, 200);

/// Shape of an explosion burst.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplosionParams {
    /// Core particle count. Smoke is half of this, sparks twice this.
    pub particles: usize,
    pub speed: (f32, f32),
    pub lifetime: (u32, u32),
    pub size: (f32, f32),
}

impl Default for ExplosionParams {
    fn default() -> Self {
        Self {
            particles: 30,
            speed: (2.0, 8.0),
            lifetime: (20, 40),
            size: (2.0, 4.0),
        }
    }
}

impl ExplosionParams {
    /// Bigger, longer burst used for grenade detonations.
    pub fn grenade() -> Self {
        Self {
            particles: 50,
            speed: (3.0, 10.0),
            lifetime: (30, 60),
            size: (2.0, 5.0),
        }
    }
}

fn polar(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * speed
}

fn pick<R: Rng>(rng: &mut R, palette: &[Rgb]) -> Rgb {
    palette[rng.gen_range(0..palette.len())]
}

impl ParticleSystem {
    /// Glowing core, drifting smoke, and fast sparks.
    pub fn create_explosion(&mut self, position: Vec2, params: &ExplosionParams) {
        for _ in 0..params.particles {
            let angle = self.rng.gen_range(0.0..TAU);
            let speed = self.rng.gen_range(params.speed.0..=params.speed.1);
            let lifetime = self.rng.gen_range(params.lifetime.0..=params.lifetime.1);
            let size = self.rng.gen_range(params.size.0..=params.size.1);
            let color = pick(&mut self.rng, &FIRE_PALETTE);
            self.add(
                Particle::new(position, color, polar(angle, speed), lifetime)
                    .with_size(size * 1.5)
                    .with_glow()
                    .with_trail(8),
            );
        }

        for _ in 0..params.particles / 2 {
            let angle = self.rng.gen_range(0.0..TAU);
            let speed = self.rng.gen_range(1.0..=4.0);
            let lifetime = self.rng.gen_range(40..=80);
            let size = self.rng.gen_range(3.0..=6.0);
            let color = pick(&mut self.rng, &SMOKE_PALETTE);
            let velocity = polar(angle, speed) - Vec2::new(0.0, 0.5);
            self.add(
                Particle::new(position, color, velocity, lifetime)
                    .with_size(size)
                    .with_alpha(128)
                    .with_gravity(-0.05),
            );
        }

        for _ in 0..params.particles * 2 {
            let angle = self.rng.gen_range(0.0..TAU);
            let speed = self.rng.gen_range(8.0..=15.0);
            let lifetime = self.rng.gen_range(10..=20);
            self.add(
                Particle::new(position, SPARK_COLOR, polar(angle, speed), lifetime)
                    .with_size(1.0)
                    .with_glow()
                    .with_trail(3),
            );
        }
    }

    /// Three slow particles fanned behind a bullet.
    pub fn create_bullet_trail(&mut self, position: Vec2, velocity: Vec2, color: Rgb) {
        let speed = velocity.length();
        let angle = velocity.y.atan2(velocity.x);
        for _ in 0..3 {
            let spread = self.rng.gen_range(-0.2..=0.2);
            self.add(
                Particle::new(position, color, polar(angle + spread, speed * 0.3), 10)
                    .with_size(2.0)
                    .with_glow()
                    .with_trail(3),
            );
        }
    }

    /// Splatter along `direction`, a fast narrow spray, a slow pool, and a
    /// permanent decal under the impact.
    pub fn create_blood(&mut self, position: Vec2, direction: Vec2, amount: usize) {
        let base = direction.y.atan2(direction.x);

        for _ in 0..amount {
            let angle = base + self.rng.gen_range(-PI / 3.0..=PI / 3.0);
            let speed = self.rng.gen_range(2.0..=6.0);
            let lifetime = self.rng.gen_range(20..=40);
            let size = self.rng.gen_range(2.0..=4.0);
            let color = pick(&mut self.rng, &BLOOD_PALETTE);
            self.add(
                Particle::new(position, color, polar(angle, speed), lifetime)
                    .with_size(size)
                    .with_gravity(0.2)
                    .with_trail(3),
            );
        }

        for _ in 0..amount / 2 {
            let angle = base + self.rng.gen_range(-PI / 6.0..=PI / 6.0);
            let speed = self.rng.gen_range(7.0..=12.0);
            let lifetime = self.rng.gen_range(10..=20);
            let color = pick(&mut self.rng, &BLOOD_PALETTE);
            self.add(
                Particle::new(position, color, polar(angle, speed), lifetime)
                    .with_size(1.0)
                    .with_gravity(0.1)
                    .with_trail(2),
            );
        }

        for _ in 0..amount / 2 {
            let angle = self.rng.gen_range(0.0..TAU);
            let speed = self.rng.gen_range(0.5..=2.0);
            let lifetime = self.rng.gen_range(40..=80);
            let size = self.rng.gen_range(3.0..=5.0);
            let color = pick(&mut self.rng, &BLOOD_PALETTE);
            self.add(
                Particle::new(position, color, polar(angle, speed), lifetime)
                    .with_size(size)
                    .with_gravity(0.4),
            );
        }

        let color = pick(&mut self.rng, &BLOOD_PALETTE);
        let size = self.rng.gen_range(6.0..=12.0);
        let jitter = Vec2::new(
            self.rng.gen_range(-4.0..=4.0),
            self.rng.gen_range(-4.0..=4.0),
        );
        self.decals.stamp(Decal {
            position: position + jitter,
            color,
            size,
            alpha: 160,
        });
    }

    /// Ten short-lived glowing particles out of the barrel.
    pub fn create_muzzle_flash(&mut self, position: Vec2, angle: f32) {
        let color = horde_core::constants::MUZZLE_FLASH_COLOR;
        for _ in 0..10 {
            let spread = self.rng.gen_range(-0.5..=0.5);
            let speed = self.rng.gen_range(3.0..=6.0);
            self.add(
                Particle::new(position, color, polar(angle + spread, speed), 5)
                    .with_size(3.0)
                    .with_glow(),
            );
        }
    }

    /// Small dust puff.
    pub fn create_footstep(&mut self, position: Vec2, color: Rgb) {
        for _ in 0..5 {
            let angle = self.rng.gen_range(0.0..TAU);
            let speed = self.rng.gen_range(0.5..=2.0);
            self.add(
                Particle::new(position, color, polar(angle, speed), 10)
                    .with_size(1.0)
                    .with_gravity(0.1),
            );
        }
    }

    /// Rising green motes scattered within `radius`.
    pub fn create_heal(&mut self, position: Vec2, radius: f32) {
        let color = horde_core::constants::HEAL_COLOR;
        for _ in 0..15 {
            let angle = self.rng.gen_range(0.0..TAU);
            let dist = self.rng.gen_range(0.0..=radius.max(0.0));
            let origin = position + polar(angle, dist);
            let velocity = Vec2::new(0.0, self.rng.gen_range(-2.0..=-1.0));
            self.add(
                Particle::new(origin, color, velocity, 20)
                    .with_size(2.0)
                    .with_glow(),
            );
        }
    }

    /// A couple of rising embers somewhere inside a burning area.
    pub fn create_flames(&mut self, position: Vec2, radius: f32) {
        for _ in 0..2 {
            let angle = self.rng.gen_range(0.0..TAU);
            let dist = self.rng.gen_range(0.0..=radius.max(0.0));
            let origin = position + polar(angle, dist);
            let velocity = Vec2::new(
                self.rng.gen_range(-0.3..=0.3),
                self.rng.gen_range(-1.5..=-0.5),
            );
            let lifetime = self.rng.gen_range(15..=30);
            let size = self.rng.gen_range(2.0..=4.0);
            let color = pick(&mut self.rng, &FIRE_PALETTE);
            self.add(
                Particle::new(origin, color, velocity, lifetime)
                    .with_size(size)
                    .with_glow(),
            );
        }
    }

    /// Dim drifting motes across the area `[origin, origin + extent]`.
    /// No-op while the ambient population is at its cap.
    pub fn create_ambient(&mut self, origin: Vec2, extent: Vec2) {
        if self.ambient_count() >= AMBIENT_CAP || extent.x <= 0.0 || extent.y <= 0.0 {
            return;
        }
        for _ in 0..AMBIENT_PER_TICK {
            let at = Vec2::new(
                self.rng.gen_range(origin.x..=origin.x + extent.x),
                self.rng.gen_range(origin.y..=origin.y + extent.y),
            );
            let velocity = Vec2::new(
                self.rng.gen_range(-0.2..=0.2),
                self.rng.gen_range(-0.5..=-0.3),
            );
            let color = Rgb::new(
                self.rng.gen_range(200..=255),
                self.rng.gen_range(200..=255),
                self.rng.gen_range(220..=255),
            );
            let lifetime = self.rng.gen_range(100..=200);
            let size = self.rng.gen_range(1.0..=2.0);
            let alpha = self.rng.gen_range(30..=60);
            self.add(
                Particle::new(at, color, velocity, lifetime)
                    .with_size(size)
                    .with_alpha(alpha)
                    .with_glow()
                    .as_ambient(),
            );
        }
    }
}
