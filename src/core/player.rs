use log::{debug, trace};
use std::f32::consts::TAU;

use crate::config::{BoundaryMode, PlayerConfig};
use crate::core::pipe::{Pipe, PipeId};
use crate::core::pipe_system::PipeSystem;
use crate::error::ConfigError;
use crate::math::Placement;
use crate::traits::RandomSource;

/// Degrees of curve travelled per unit of centerline distance
pub fn degrees_per_unit(curve_radius: f32) -> f32 {
    360.0 / (TAU * curve_radius)
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub crossed_boundary: bool,
    /// Distance past the end of the previous pipe, zero when no boundary was crossed
    pub overflow_distance: f32,
    pub active_pipe: PipeId,
    /// Chain root transform for this tick
    pub root: Placement,
}

/// The traveller. Instead of moving through the tunnel it rolls the whole
/// chain around the head pipe's curve axis, which keeps the viewpoint at the
/// origin.
#[derive(Debug, Clone)]
pub struct Player {
    velocity: f32,
    boundary_mode: BoundaryMode,
    distance_traveled: f32,
    system_rotation: f32,
    delta_to_rotation: f32,
    current_pipe: PipeId,
    curve_angle: f32,
    pipes_passed: u64,
}

impl Player {
    /// Enter the head pipe of `system`
    pub fn start<R: RandomSource>(
        config: &PlayerConfig,
        system: &mut PipeSystem<R>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut player = Self {
            velocity: config.velocity,
            boundary_mode: config.boundary_mode,
            distance_traveled: 0.0,
            system_rotation: 0.0,
            delta_to_rotation: 0.0,
            current_pipe: 0,
            curve_angle: 0.0,
            pipes_passed: 0,
        };
        player.enter(system.setup_first_pipe());
        system.set_rotation(0.0);
        Ok(player)
    }

    fn enter(&mut self, pipe: &Pipe) {
        self.current_pipe = pipe.id();
        self.curve_angle = pipe.curve_angle();
        self.delta_to_rotation = degrees_per_unit(pipe.curve_radius());
    }

    /// Advance with the configured velocity
    pub fn tick<R: RandomSource>(&mut self, system: &mut PipeSystem<R>, dt: f32) -> TickOutcome {
        self.advance(system, dt, self.velocity)
    }

    /// Move `velocity * dt` along the centerline. Recycles at most one pipe.
    pub fn advance<R: RandomSource>(
        &mut self,
        system: &mut PipeSystem<R>,
        dt: f32,
        velocity: f32,
    ) -> TickOutcome {
        assert!(
            dt.is_finite() && dt >= 0.0,
            "tick delta must be finite and non-negative, got {dt}"
        );
        assert!(
            velocity.is_finite() && velocity > 0.0,
            "velocity must be finite and positive, got {velocity}"
        );

        let delta = velocity * dt;
        self.distance_traveled += delta;
        self.system_rotation += delta * self.delta_to_rotation;

        let mut crossed_boundary = false;
        let mut overflow_distance = 0.0;

        if self.system_rotation >= self.curve_angle {
            overflow_distance = (self.system_rotation - self.curve_angle) / self.delta_to_rotation;
            let left = self.current_pipe;
            self.enter(system.setup_next_pipe());
            self.system_rotation = match self.boundary_mode {
                // One pipe per tick: excess beyond the new pipe's span is dropped
                BoundaryMode::CarryOverflow => {
                    (overflow_distance * self.delta_to_rotation).min(self.curve_angle)
                }
                BoundaryMode::Reset => 0.0,
            };
            self.pipes_passed += 1;
            crossed_boundary = true;

            debug!(
                "left pipe {} for pipe {} with {:.4} units of overflow",
                left, self.current_pipe, overflow_distance
            );
        }

        system.set_rotation(self.system_rotation);
        trace!(
            "distance {:.3}, rotation {:.3}/{:.3} degrees",
            self.distance_traveled,
            self.system_rotation,
            self.curve_angle
        );

        TickOutcome {
            crossed_boundary,
            overflow_distance,
            active_pipe: self.current_pipe,
            root: system.root_placement(),
        }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: f32) {
        assert!(
            velocity.is_finite() && velocity > 0.0,
            "velocity must be finite and positive, got {velocity}"
        );
        self.velocity = velocity;
    }

    pub fn distance_traveled(&self) -> f32 {
        self.distance_traveled
    }

    /// Progress through the active pipe, in degrees of its curve
    pub fn system_rotation(&self) -> f32 {
        self.system_rotation
    }

    pub fn delta_to_rotation(&self) -> f32 {
        self.delta_to_rotation
    }

    pub fn current_pipe(&self) -> PipeId {
        self.current_pipe
    }

    /// Curve angle of the active pipe, in degrees
    pub fn curve_angle(&self) -> f32 {
        self.curve_angle
    }

    pub fn pipes_passed(&self) -> u64 {
        self.pipes_passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipeConfig;
    use crate::traits::LowerBoundRandom;

    fn system() -> PipeSystem<LowerBoundRandom> {
        let config = PipeConfig {
            min_curve_radius: 10.0,
            max_curve_radius: 10.0,
            min_ring_count: 5,
            max_ring_count: 5,
            ..PipeConfig::default()
        };
        PipeSystem::new(&config, 3, LowerBoundRandom).unwrap()
    }

    #[test]
    fn test_degrees_per_unit() {
        // One full circumference is 360 degrees
        let radius = 4.0;
        assert!((degrees_per_unit(radius) * TAU * radius - 360.0).abs() < 1e-3);
    }

    #[test]
    fn test_start_reads_head_pipe() {
        let mut system = system();
        let player = Player::start(&PlayerConfig::default(), &mut system).unwrap();
        assert_eq!(player.current_pipe(), 0);
        assert!((player.delta_to_rotation() - degrees_per_unit(10.0)).abs() < 1e-6);
        assert_eq!(system.rotation(), 0.0);
    }

    #[test]
    fn test_rejects_zero_velocity() {
        let mut system = system();
        let config = PlayerConfig {
            velocity: 0.0,
            ..PlayerConfig::default()
        };
        assert!(Player::start(&config, &mut system).is_err());
    }

    #[test]
    fn test_tick_within_pipe() {
        let mut system = system();
        let mut player = Player::start(&PlayerConfig::default(), &mut system).unwrap();
        let outcome = player.tick(&mut system, 1.0);
        assert!(!outcome.crossed_boundary);
        assert_eq!(player.distance_traveled(), 1.0);
        assert!((system.rotation() - degrees_per_unit(10.0)).abs() < 1e-5);
    }

    #[test]
    #[should_panic(expected = "tick delta must be finite")]
    fn test_tick_rejects_nan_delta() {
        let mut system = system();
        let mut player = Player::start(&PlayerConfig::default(), &mut system).unwrap();
        player.tick(&mut system, f32::NAN);
    }

    #[test]
    #[should_panic(expected = "velocity must be finite and positive")]
    fn test_set_velocity_rejects_negative() {
        let mut system = system();
        let mut player = Player::start(&PlayerConfig::default(), &mut system).unwrap();
        player.set_velocity(-1.0);
    }

    #[test]
    #[should_panic(expected = "velocity must be finite and positive")]
    fn test_advance_rejects_zero_velocity() {
        let mut system = system();
        let mut player = Player::start(&PlayerConfig::default(), &mut system).unwrap();
        player.advance(&mut system, 0.1, 0.0);
    }

    #[test]
    fn test_large_overshoot_is_capped_to_one_pipe() {
        let mut system = system();
        let mut player = Player::start(&PlayerConfig::default(), &mut system).unwrap();
        let outcome = player.tick(&mut system, 20.0);
        assert!(outcome.crossed_boundary);
        assert!(player.system_rotation() <= player.curve_angle());
        assert_eq!(system.rotation(), player.system_rotation());
    }
}
