#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use horde_core::constants::AMBIENT_CAP;
    use horde_core::types::Rgb;

    use crate::decals::{Decal, DecalLayer};
    use crate::effects::ExplosionParams;
    use crate::particle::Particle;
    use crate::request::VfxRequest;
    use crate::system::{ParticleSystem, MAX_PARTICLES};

    const WHITE: Rgb = Rgb::new(255, 255, 255);

    fn decal(x: f32) -> Decal {
        Decal {
            position: Vec2::new(x, 0.0),
            color: WHITE,
            size: 8.0,
            alpha: 160,
        }
    }

    // ---- Particle integration ----

    #[test]
    fn test_particle_moves_and_expires() {
        let mut p = Particle::new(Vec2::ZERO, WHITE, Vec2::new(1.0, 0.0), 3);
        assert!(p.update());
        assert_eq!(p.position, Vec2::new(1.0, 0.0));
        assert!(p.update());
        assert!(!p.update(), "third tick exhausts a 3-tick lifetime");
        assert_eq!(p.lifetime, 0);
        assert!(!p.update(), "expired particles stay expired");
    }

    #[test]
    fn test_particle_gravity_applies_after_move() {
        let mut p = Particle::new(Vec2::ZERO, WHITE, Vec2::ZERO, 10).with_gravity(0.5);
        p.update();
        assert_eq!(p.position.y, 0.0, "gravity bends velocity, not this tick's step");
        assert_eq!(p.velocity.y, 0.5);
        p.update();
        assert_eq!(p.position.y, 0.5);
    }

    #[test]
    fn test_particle_fade_tracks_lifetime() {
        let mut p = Particle::new(Vec2::ZERO, WHITE, Vec2::ZERO, 4).with_alpha(200);
        p.update();
        assert_eq!(p.alpha, 150);
        p.update();
        assert_eq!(p.alpha, 100);

        let mut solid = Particle::new(Vec2::ZERO, WHITE, Vec2::ZERO, 4).without_fade();
        solid.update();
        assert_eq!(solid.alpha, 255);
    }

    #[test]
    fn test_particle_trail_is_bounded() {
        let mut p = Particle::new(Vec2::ZERO, WHITE, Vec2::new(1.0, 1.0), 50).with_trail(3);
        for _ in 0..10 {
            p.update();
        }
        assert_eq!(p.trail.len(), 3);
        let last = p.trail.to_vec()[2];
        assert_eq!(last, Vec2::new(9.0, 9.0), "trail holds pre-move positions");
    }

    // ---- System ----

    #[test]
    fn test_system_sweeps_dead_particles() {
        let mut sys = ParticleSystem::new(1);
        sys.add(Particle::new(Vec2::ZERO, WHITE, Vec2::ZERO, 1));
        sys.add(Particle::new(Vec2::ZERO, WHITE, Vec2::ZERO, 5));
        sys.add(Particle::new(Vec2::ZERO, WHITE, Vec2::ZERO, 0));
        assert_eq!(sys.len(), 3);
        sys.update();
        assert_eq!(sys.len(), 1, "zero-lifetime and just-expired particles are culled");
    }

    #[test]
    fn test_system_caps_particles() {
        let mut sys = ParticleSystem::new(1);
        for i in 0..MAX_PARTICLES + 10 {
            sys.add(Particle::new(Vec2::new(i as f32, 0.0), WHITE, Vec2::ZERO, 100));
        }
        assert_eq!(sys.len(), MAX_PARTICLES);
        assert_eq!(sys.particles()[0].position.x, 10.0, "oldest dropped first");
    }

    #[test]
    fn test_eviction_at_cap_tracks_ambient_count() {
        let mut sys = ParticleSystem::new(1);
        sys.add(Particle::new(Vec2::ZERO, WHITE, Vec2::ZERO, 100).as_ambient());
        for i in 1..MAX_PARTICLES {
            sys.add(Particle::new(Vec2::new(i as f32, 0.0), WHITE, Vec2::ZERO, 100));
        }
        assert_eq!(sys.ambient_count(), 1);

        // Each add at the cap evicts exactly one particle from the front.
        for i in 0..3 {
            sys.add(Particle::new(Vec2::new(-1.0, 0.0), WHITE, Vec2::ZERO, 100));
            assert_eq!(sys.len(), MAX_PARTICLES);
            assert_eq!(sys.particles()[0].position.x, (i + 1) as f32);
        }
        assert_eq!(sys.ambient_count(), 0, "evicted ambient particle is no longer counted");
        assert_eq!(sys.particles().back().map(|p| p.position.x), Some(-1.0));
    }

    #[test]
    fn test_explosion_counts() {
        let mut sys = ParticleSystem::new(7);
        sys.create_explosion(Vec2::new(100.0, 100.0), &ExplosionParams::default());
        // core 30 + smoke 15 + sparks 60
        assert_eq!(sys.len(), 105);
        assert!(sys.particles().iter().all(|p| p.lifetime >= 10 && p.lifetime <= 80));
    }

    #[test]
    fn test_bullet_trail_particles() {
        let mut sys = ParticleSystem::new(7);
        sys.create_bullet_trail(Vec2::ZERO, Vec2::new(15.0, 0.0), WHITE);
        assert_eq!(sys.len(), 3);
        for p in sys.particles() {
            assert!((p.velocity.length() - 4.5).abs() < 1e-4, "trail moves at 30% speed");
            assert!(p.velocity.y.atan2(p.velocity.x).abs() <= 0.2 + 1e-5);
            assert_eq!(p.lifetime, 10);
        }
    }

    #[test]
    fn test_blood_stamps_decal() {
        let mut sys = ParticleSystem::new(7);
        sys.create_blood(Vec2::new(50.0, 50.0), Vec2::new(1.0, 0.0), 10);
        assert_eq!(sys.len(), 10 + 5 + 5);
        assert_eq!(sys.decals().len(), 1);
    }

    #[test]
    fn test_muzzle_flash_and_footstep() {
        let mut sys = ParticleSystem::new(7);
        sys.create_muzzle_flash(Vec2::ZERO, 0.0);
        assert_eq!(sys.len(), 10);
        assert!(sys.particles().iter().all(|p| p.lifetime == 5 && p.glow));

        sys.clear();
        sys.create_footstep(Vec2::ZERO, WHITE);
        assert_eq!(sys.len(), 5);
        assert!(sys.particles().iter().all(|p| p.gravity == 0.1));
    }

    #[test]
    fn test_heal_rises() {
        let mut sys = ParticleSystem::new(7);
        sys.create_heal(Vec2::new(10.0, 10.0), 20.0);
        assert_eq!(sys.len(), 15);
        for p in sys.particles() {
            assert!(p.velocity.y <= -1.0 && p.velocity.y >= -2.0);
            assert!(p.position.distance(Vec2::new(10.0, 10.0)) <= 20.0 + 1e-3);
        }
    }

    #[test]
    fn test_ambient_respects_cap() {
        let mut sys = ParticleSystem::new(7);
        for _ in 0..200 {
            sys.create_ambient(Vec2::ZERO, Vec2::new(1480.0, 920.0));
        }
        assert!(sys.ambient_count() >= AMBIENT_CAP);
        assert!(sys.ambient_count() < AMBIENT_CAP + 3);
        assert!(sys
            .particles()
            .iter()
            .all(|p| p.ambient && p.alpha >= 30 && p.alpha <= 60));
    }

    #[test]
    fn test_requests_dispatch() {
        let mut sys = ParticleSystem::new(3);
        sys.handle_all(vec![
            VfxRequest::MuzzleFlash {
                position: Vec2::ZERO,
                angle: 1.0,
            },
            VfxRequest::Heal {
                position: Vec2::ZERO,
            },
        ]);
        assert_eq!(sys.len(), 25);
    }

    #[test]
    fn test_same_seed_same_particles() {
        let mut a = ParticleSystem::new(99);
        let mut b = ParticleSystem::new(99);
        a.create_explosion(Vec2::ZERO, &ExplosionParams::grenade());
        b.create_explosion(Vec2::ZERO, &ExplosionParams::grenade());
        let pa: Vec<Vec2> = a.particles().iter().map(|p| p.velocity).collect();
        let pb: Vec<Vec2> = b.particles().iter().map(|p| p.velocity).collect();
        assert_eq!(pa, pb);
    }

    // ---- Decals ----

    #[test]
    fn test_decals_evict_oldest() {
        let mut layer = DecalLayer::new(3);
        for i in 0..5 {
            layer.stamp(decal(i as f32));
        }
        assert_eq!(layer.len(), 3);
        let xs: Vec<f32> = layer.iter().map(|d| d.position.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_decals_survive_updates() {
        let mut sys = ParticleSystem::with_decal_capacity(1, 4);
        sys.create_blood(Vec2::ZERO, Vec2::X, 4);
        for _ in 0..500 {
            sys.update();
        }
        assert!(sys.is_empty());
        assert_eq!(sys.decals().len(), 1, "decals bypass the lifetime system");
    }

    proptest! {
        #[test]
        fn prop_particles_die_exactly_at_lifetime(lifetime in 1u32..300) {
            let mut p = Particle::new(Vec2::ZERO, WHITE, Vec2::ONE, lifetime);
            let mut ticks = 0;
            while p.update() {
                ticks += 1;
            }
            prop_assert_eq!(ticks + 1, lifetime);
        }
    }
}
