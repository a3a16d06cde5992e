//! Particle manager: storage, per-tick integration and request dispatch.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use horde_core::constants::DECAL_CAPACITY;

use crate::decals::DecalLayer;
use crate::particle::Particle;
use crate::request::VfxRequest;

/// Hard cap on live particles. The oldest are dropped to make room.
pub const MAX_PARTICLES: usize = 4000;

/// Owns every live particle and the decal layer.
pub struct ParticleSystem {
    /// Oldest first.
    pub(crate) particles: VecDeque<Particle>,
    pub(crate) decals: DecalLayer,
    pub(crate) rng: ChaCha8Rng,
    ambient_alive: usize,
}

impl ParticleSystem {
    pub fn new(seed: u64) -> Self {
        Self::with_decal_capacity(seed, DECAL_CAPACITY)
    }

    pub fn with_decal_capacity(seed: u64, decal_capacity: usize) -> Self {
        Self {
            particles: VecDeque::with_capacity(MAX_PARTICLES),
            decals: DecalLayer::new(decal_capacity),
            rng: ChaCha8Rng::seed_from_u64(seed),
            ambient_alive: 0,
        }
    }

    pub fn add(&mut self, particle: Particle) {
        while self.particles.len() >= MAX_PARTICLES {
            match self.particles.pop_front() {
                Some(evicted) if evicted.ambient => self.ambient_alive -= 1,
                Some(_) => {}
                None => break,
            }
        }
        if particle.ambient {
            self.ambient_alive += 1;
        }
        self.particles.push_back(particle);
    }

    /// Integrate every particle one tick and sweep out the expired ones.
    pub fn update(&mut self) {
        self.particles.retain_mut(|p| p.update());
        self.ambient_alive = self.particles.iter().filter(|p| p.ambient).count();
    }

    /// Create the effect described by a request.
    pub fn handle(&mut self, request: &VfxRequest) {
        match *request {
            VfxRequest::Explosion { position, params } => self.create_explosion(position, &params),
            VfxRequest::BulletTrail {
                position,
                velocity,
                color,
            } => self.create_bullet_trail(position, velocity, color),
            VfxRequest::Blood {
                position,
                direction,
                amount,
            } => self.create_blood(position, direction, amount),
            VfxRequest::MuzzleFlash { position, angle } => {
                self.create_muzzle_flash(position, angle)
            }
            VfxRequest::Footstep { position, color } => self.create_footstep(position, color),
            VfxRequest::Heal { position } => self.create_heal(position, 20.0),
            VfxRequest::Flames { position, radius } => self.create_flames(position, radius),
        }
    }

    /// Drain a tick's worth of requests.
    pub fn handle_all(&mut self, requests: impl IntoIterator<Item = VfxRequest>) {
        let mut count = 0usize;
        for request in requests {
            self.handle(&request);
            count += 1;
        }
        if count > 0 {
            log::trace!("vfx: {count} requests, {} particles live", self.particles.len());
        }
    }

    pub fn particles(&self) -> &VecDeque<Particle> {
        &self.particles
    }

    pub fn decals(&self) -> &DecalLayer {
        &self.decals
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn ambient_count(&self) -> usize {
        self.ambient_alive
    }

    /// Remove every particle and decal.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.decals.clear();
        self.ambient_alive = 0;
    }

    /// Particles whose position lies inside the given world rectangle.
    pub fn visible_in(&self, min: Vec2, max: Vec2) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(move |p| {
            p.position.x >= min.x
                && p.position.y >= min.y
                && p.position.x <= max.x
                && p.position.y <= max.y
        })
    }
}
