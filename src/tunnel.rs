use log::debug;
use serde::Serialize;

use crate::config::TunnelConfig;
use crate::core::{Pipe, PipeId, PipeSystem, Player};
use crate::error::ConfigError;
use crate::frame::TunnelFrame;
use crate::math::AABB;
use crate::traits::{RandomSource, TickSource};
use crate::types::TransformUniform;

/// Pipe system plus the player travelling through it
#[derive(Debug)]
pub struct Tunnel<R: RandomSource> {
    system: PipeSystem<R>,
    player: Player,
    frame_number: u64,
    time: f32,
}

impl<R: RandomSource> Tunnel<R> {
    pub fn new(config: &TunnelConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut system = PipeSystem::new(&config.pipe, config.pipe_count, rng)?;
        let player = Player::start(&config.player, &mut system)?;
        debug!(
            "tunnel ready: {} pipes, velocity {}",
            system.len(),
            player.velocity()
        );

        Ok(Self {
            system,
            player,
            frame_number: 0,
            time: 0.0,
        })
    }

    pub fn system(&self) -> &PipeSystem<R> {
        &self.system
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn tick(&mut self, dt: f32) -> TunnelFrame {
        let outcome = self.player.tick(&mut self.system, dt);
        self.time += dt;

        let frame = TunnelFrame {
            number: self.frame_number,
            time: self.time,
            delta: dt,
            active_pipe: outcome.active_pipe,
            crossed_boundary: outcome.crossed_boundary,
            root: outcome.root,
        };
        self.frame_number += 1;
        frame
    }

    /// Infinite iterator ticking once per delta from `clock`.
    /// Use with `take`: `tunnel.frames(&mut clock).take(600)`.
    pub fn frames<'a, C: TickSource>(
        &'a mut self,
        clock: &'a mut C,
    ) -> impl Iterator<Item = TunnelFrame> + 'a {
        std::iter::repeat_with(move || {
            let dt = clock.next_delta();
            self.tick(dt)
        })
    }

    pub fn root_uniform(&self) -> TransformUniform {
        TransformUniform::from(self.system.root_placement().to_matrix())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.frame_number,
            elapsed: self.time,
            distance_traveled: self.player.distance_traveled(),
            pipes_passed: self.player.pipes_passed(),
            active_pipe: self.player.current_pipe(),
            system_rotation: self.player.system_rotation(),
            chain: self.system.iter().map(|(pipe, _)| PipeSummary::from(pipe)).collect(),
            root_matrix: self.root_uniform().matrix,
            bounds: self.system.bounds(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PipeSummary {
    pub id: PipeId,
    pub curve_radius: f32,
    pub ring_count: usize,
    pub curve_angle: f32,
    pub vertex_count: usize,
    pub index_count: usize,
}

impl From<&Pipe> for PipeSummary {
    fn from(pipe: &Pipe) -> Self {
        Self {
            id: pipe.id(),
            curve_radius: pipe.curve_radius(),
            ring_count: pipe.ring_count(),
            curve_angle: pipe.curve_angle(),
            vertex_count: pipe.mesh().vertex_count(),
            index_count: pipe.mesh().index_count(),
        }
    }
}

/// State of a run, serializable for reporting
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub elapsed: f32,
    pub distance_traveled: f32,
    pub pipes_passed: u64,
    pub active_pipe: PipeId,
    pub system_rotation: f32,
    /// Pipes in chain order, active pipe first
    pub chain: Vec<PipeSummary>,
    pub root_matrix: [[f32; 4]; 4],
    pub bounds: Option<AABB>,
}

impl RunSummary {
    pub fn total_vertices(&self) -> usize {
        self.chain.iter().map(|p| p.vertex_count).sum()
    }

    pub fn total_indices(&self) -> usize {
        self.chain.iter().map(|p| p.index_count).sum()
    }
}
