use pipe_tunnel::core::player::degrees_per_unit;
use pipe_tunnel::core::{PipeSystem, Player};
use pipe_tunnel::traits::{LowerBoundRandom, RandomSource, RngSource};
use pipe_tunnel::{BoundaryMode, PipeConfig, PlayerConfig};

/// Radius 10 and 5 rings of spacing 1: every pipe is 5 units long
fn uniform_system() -> PipeSystem<LowerBoundRandom> {
    let config = PipeConfig {
        min_curve_radius: 10.0,
        max_curve_radius: 10.0,
        min_ring_count: 5,
        max_ring_count: 5,
        ..PipeConfig::default()
    };
    PipeSystem::new(&config, 3, LowerBoundRandom).unwrap()
}

fn player_with(mode: BoundaryMode, system: &mut PipeSystem<LowerBoundRandom>) -> Player {
    let config = PlayerConfig {
        velocity: 1.0,
        boundary_mode: mode,
    };
    Player::start(&config, system).unwrap()
}

#[cfg(test)]
mod boundary_tests {
    use super::*;

    #[test]
    fn test_crossing_carries_overflow() {
        let mut system = uniform_system();
        let mut player = player_with(BoundaryMode::CarryOverflow, &mut system);

        for _ in 0..6 {
            assert!(!player.tick(&mut system, 0.75).crossed_boundary);
        }
        // 7 * 0.75 = 5.25, a quarter unit into the second pipe
        let outcome = player.tick(&mut system, 0.75);

        assert!(outcome.crossed_boundary);
        assert_eq!(outcome.active_pipe, 1);
        assert!((outcome.overflow_distance - 0.25).abs() < 1e-4);
        assert!((player.system_rotation() - 0.25 * degrees_per_unit(10.0)).abs() < 1e-3);
        assert!((player.distance_traveled() - 5.25).abs() < 1e-4);
        assert_eq!(player.pipes_passed(), 1);
    }

    #[test]
    fn test_crossing_with_reset_snaps_to_zero() {
        let mut system = uniform_system();
        let mut player = player_with(BoundaryMode::Reset, &mut system);

        let crossed = (0..7)
            .map(|_| player.tick(&mut system, 0.75))
            .filter(|outcome| outcome.crossed_boundary)
            .count();

        assert_eq!(crossed, 1);
        assert_eq!(player.system_rotation(), 0.0);
        assert_eq!(system.rotation(), 0.0);
    }

    #[test]
    fn test_at_most_one_recycle_per_tick() {
        let mut system = uniform_system();
        let mut player = player_with(BoundaryMode::CarryOverflow, &mut system);

        // Four pipes worth of distance in one tick
        let outcome = player.tick(&mut system, 20.0);
        assert!(outcome.crossed_boundary);
        assert_eq!(system.recycle_count(), 1);
        assert!(player.system_rotation() <= player.curve_angle());
        assert!((player.distance_traveled() - 20.0).abs() < 1e-4);

        // A still tick never leaves progress past the active pipe
        player.tick(&mut system, 0.0);
        assert!(player.system_rotation() <= player.curve_angle());
        assert!(system.recycle_count() <= 2);
    }

    fn assert_progress_bounded(seed: u64, max_dt: f32) {
        let config = PipeConfig::default();
        let mut system = PipeSystem::new(&config, 4, RngSource::seeded(seed)).unwrap();
        let mut player = Player::start(&PlayerConfig::default(), &mut system).unwrap();
        let mut dt_source = RngSource::seeded(seed + 1);

        for _ in 0..2000 {
            let dt = dt_source.uniform_f32(0.0, max_dt);
            let before = player.curve_angle();
            let outcome = player.tick(&mut system, dt);

            let step = dt * player.velocity() * player.delta_to_rotation();
            if !outcome.crossed_boundary {
                assert!(player.system_rotation() < before);
            }
            assert!(player.system_rotation() - player.curve_angle() <= step + 1e-3);
            assert!(player.system_rotation() <= player.curve_angle() + 1e-3);
        }
        assert!(player.pipes_passed() > 0);
    }

    #[test]
    fn test_progress_bounded_by_one_tick() {
        assert_progress_bounded(31, 0.5);
    }

    #[test]
    fn test_progress_bounded_with_long_ticks() {
        // Ticks far longer than any pipe
        assert_progress_bounded(51, 200.0);
    }

    #[test]
    fn test_conversion_factor_follows_active_pipe() {
        let mut system = PipeSystem::new(&PipeConfig::default(), 4, RngSource::seeded(40)).unwrap();
        let mut player = Player::start(&PlayerConfig::default(), &mut system).unwrap();

        for _ in 0..600 {
            let outcome = player.tick(&mut system, 1.0 / 30.0);
            assert_eq!(outcome.active_pipe, system.head().id());
            let expected = degrees_per_unit(system.head().curve_radius());
            assert!((player.delta_to_rotation() - expected).abs() < 1e-6);
        }
    }
}

#[cfg(test)]
mod motion_tests {
    use super::*;

    #[test]
    fn test_distance_accumulates_velocity_times_dt() {
        let mut system = uniform_system();
        let mut player = player_with(BoundaryMode::CarryOverflow, &mut system);
        player.set_velocity(2.0);

        for _ in 0..10 {
            player.tick(&mut system, 0.1);
        }
        assert!((player.distance_traveled() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_advance_overrides_velocity() {
        let mut system = uniform_system();
        let mut player = player_with(BoundaryMode::CarryOverflow, &mut system);

        player.advance(&mut system, 0.5, 4.0);
        assert!((player.distance_traveled() - 2.0).abs() < 1e-6);
        assert_eq!(player.velocity(), 1.0);
    }

    #[test]
    fn test_root_rotation_matches_progress() {
        let mut system = uniform_system();
        let mut player = player_with(BoundaryMode::CarryOverflow, &mut system);

        let outcome = player.tick(&mut system, 1.0);
        let expected = glam::Quat::from_rotation_z(player.system_rotation().to_radians());
        assert!(outcome.root.rotation.dot(expected).abs() > 1.0 - 1e-6);
        assert_eq!(outcome.root.translation, glam::Vec3::new(0.0, -10.0, 0.0));
    }

    #[test]
    fn test_boundary_crossing_is_visually_continuous() {
        let mut system = uniform_system();
        let mut player = player_with(BoundaryMode::CarryOverflow, &mut system);
        let next_id = system.get(1).unwrap().id();

        loop {
            let before = system.world_placement(1).unwrap();
            let outcome = player.tick(&mut system, 0.01);
            if outcome.crossed_boundary {
                let after = system.world_placement(0).unwrap();
                assert_eq!(system.head().id(), next_id);
                assert!(after.translation.distance(before.translation) < 1e-3);
                assert!(after.rotation.dot(before.rotation).abs() > 0.9999);
                break;
            }
        }
    }
}
