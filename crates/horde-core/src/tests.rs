#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::profiles::*;
    use crate::state::GameStateSnapshot;
    use crate::types::{Aabb, Position, SimTime, TrailBuffer, Velocity, TRAIL_CAPACITY};

    // ---- Serde ----

    #[test]
    fn test_weapon_type_serde() {
        for v in WeaponType::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: WeaponType = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_shop_item_serde() {
        for v in ShopItem::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: ShopItem = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_player_command_serde() {
        let cmds = vec![
            PlayerCommand::SetMoveIntent { x: -1, y: 1 },
            PlayerCommand::SetPointer { x: 10.0, y: 20.0 },
            PlayerCommand::FireDown,
            PlayerCommand::Purchase {
                item: ShopItem::SlowTrap,
            },
            PlayerCommand::Place {
                slot: 0,
                x: 300.0,
                y: 400.0,
            },
            PlayerCommand::StartNextWave,
        ];
        for cmd in cmds {
            let json = serde_json::to_string(&cmd).unwrap();
            assert!(json.contains("\"type\""), "tagged enum: {json}");
            let _back: PlayerCommand = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_game_event_serde() {
        let event = GameEvent::ZombieKilled {
            kind: ZombieType::Tank,
            reward: 50,
            position: Vec2::new(1.0, 2.0),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ZombieKilled"));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_snapshot_serde() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Shopping);
        assert!(back.zombies.is_empty());
    }

    // ---- Geometry ----

    #[test]
    fn test_position_distance_and_angle() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);

        let down = Position::new(0.0, 10.0);
        assert!((a.angle_to(&down) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_from_angle() {
        let v = Velocity::from_angle(0.0, BULLET_SPEED);
        assert!((v.0.x - 15.0).abs() < 1e-6);
        assert!(v.0.y.abs() < 1e-6);
        assert!((v.speed() - 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(40.0));
        let b = Aabb::from_center(Vec2::new(30.0, 0.0), Vec2::splat(40.0));
        let c = Aabb::from_center(Vec2::new(40.0, 0.0), Vec2::splat(40.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c), "touching edges are not an overlap");
        assert!(a.contains_point(Vec2::new(20.0, -20.0)));
        assert!(!a.contains_point(Vec2::new(20.1, 0.0)));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..TICK_RATE {
            t.advance();
        }
        assert_eq!(t.tick, 60);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Trail buffer ----

    #[test]
    fn test_trail_buffer_keeps_newest() {
        let mut trail = TrailBuffer::new(3);
        for i in 0..5 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.len(), 3);
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0], "oldest first");
    }

    #[test]
    fn test_trail_buffer_limits() {
        let mut off = TrailBuffer::new(0);
        off.push(Vec2::ONE);
        assert!(off.is_empty());

        let mut big = TrailBuffer::new(1000);
        assert_eq!(big.limit(), TRAIL_CAPACITY);
        for i in 0..100 {
            big.push(Vec2::splat(i as f32));
        }
        assert_eq!(big.len(), TRAIL_CAPACITY);
        assert_eq!(big.to_vec().last().copied(), Some(Vec2::splat(99.0)));
    }

    // ---- Tables ----

    #[test]
    fn test_zombie_type_ordering() {
        let n = zombie_profile(ZombieType::Normal);
        let f = zombie_profile(ZombieType::Fast);
        let t = zombie_profile(ZombieType::Tank);
        assert!(f.speed > n.speed && n.speed > t.speed);
        assert!(t.max_health > n.max_health && n.max_health > f.max_health);
        assert!(t.damage > n.damage && n.damage > f.damage);
    }

    #[test]
    fn test_weapon_table() {
        let knife = weapon_profile(WeaponType::Knife);
        assert!(knife.is_melee());
        assert_eq!(knife.capacity, None);

        let pistol = weapon_profile(WeaponType::Pistol);
        assert_eq!(pistol.capacity, Some(12));
        assert!((pistol.stage_secs() - 0.5).abs() < 1e-9);

        let shotgun = weapon_profile(WeaponType::Shotgun);
        assert_eq!(shotgun.feed, FeedKind::Shell);
        assert_eq!(shotgun.pellets, SHOTGUN_PELLETS);

        for w in WeaponType::ALL {
            let p = weapon_profile(w);
            if let Some(cap) = p.capacity {
                assert!(cap > 0);
                assert!(p.reload_stages > 0, "{w:?} needs reload stages");
            }
        }
    }

    #[test]
    fn test_trail_tiers() {
        assert_eq!(trail_tier(45.0), TrailTier::Heavy);
        assert_eq!(trail_tier(25.0), TrailTier::Medium);
        assert_eq!(trail_tier(10.0), TrailTier::Light);
        assert_eq!(trail_style(TrailTier::Heavy).1, 15);
    }

    #[test]
    fn test_structure_blocking() {
        assert!(StructureKind::Wall.blocks_zombies());
        assert!(StructureKind::BasicTurret.blocks_zombies());
        assert!(!StructureKind::SpikeTrap.blocks_zombies());
        assert!(!StructureKind::SlowTrap.blocks_zombies());
    }

    #[test]
    fn test_shop_items_map_to_structures() {
        assert_eq!(ShopItem::Wall.structure(), Some(StructureKind::Wall));
        assert_eq!(ShopItem::Medkit.structure(), None);
        assert!(shop_price(ShopItem::AdvancedTurret) > shop_price(ShopItem::BasicTurret));
    }
}
