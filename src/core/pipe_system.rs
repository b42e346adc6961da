use glam::{Quat, Vec3};
use log::debug;

use crate::config::PipeConfig;
use crate::core::pipe::{Pipe, PipeId};
use crate::error::ConfigError;
use crate::math::{Placement, AABB};
use crate::traits::RandomSource;

/// Fixed-size ring of pipes laid end to end.
///
/// Logical index 0 is the head, the pipe the player is inside. It always sits
/// at the chain origin; every later pipe is attached to the exit of the one
/// before it. Recycling moves the head index instead of moving pipes.
#[derive(Debug)]
pub struct PipeSystem<R: RandomSource> {
    pipes: Vec<Pipe>,
    // Chain-space placement per physical slot
    placements: Vec<Placement>,
    head: usize,
    offset: Vec3,
    rotation: f32,
    recycle_count: u64,
    rng: R,
}

impl<R: RandomSource> PipeSystem<R> {
    pub fn new(config: &PipeConfig, pipe_count: usize, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        if pipe_count < 1 {
            return Err(ConfigError::EmptyChain);
        }

        let mut pipes: Vec<Pipe> = Vec::with_capacity(pipe_count);
        let mut placements = Vec::with_capacity(pipe_count);

        for id in 0..pipe_count {
            let pipe = Pipe::new(id, config, &mut rng)?;
            let placement = match (pipes.last(), placements.last()) {
                (Some(previous), Some(previous_placement)) => {
                    pipe.align_with(previous, previous_placement, &mut rng)
                }
                _ => Placement::IDENTITY,
            };
            pipes.push(pipe);
            placements.push(placement);
        }

        debug!("pipe system built with {} pipes", pipe_count);

        Ok(Self {
            pipes,
            placements,
            head: 0,
            offset: Vec3::ZERO,
            rotation: 0.0,
            recycle_count: 0,
            rng,
        })
    }

    fn physical(&self, logical: usize) -> usize {
        (self.head + logical) % self.pipes.len()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// The active pipe
    pub fn head(&self) -> &Pipe {
        &self.pipes[self.head]
    }

    pub fn get(&self, logical: usize) -> Option<&Pipe> {
        (logical < self.len()).then(|| &self.pipes[self.physical(logical)])
    }

    /// Chain-space placement of the pipe at `logical`
    pub fn placement(&self, logical: usize) -> Option<&Placement> {
        (logical < self.len()).then(|| &self.placements[self.physical(logical)])
    }

    /// Pipes with their chain-space placements, head first
    pub fn iter(&self) -> impl Iterator<Item = (&Pipe, &Placement)> + '_ {
        (0..self.len()).map(move |logical| {
            let slot = self.physical(logical);
            (&self.pipes[slot], &self.placements[slot])
        })
    }

    pub fn ids(&self) -> Vec<PipeId> {
        self.iter().map(|(pipe, _)| pipe.id()).collect()
    }

    pub fn recycle_count(&self) -> u64 {
        self.recycle_count
    }

    /// Offset of the chain root, which keeps the player on the head's centerline
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Roll of the chain root around its forward axis, in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    /// Transform of the whole chain as handed to the renderer
    pub fn root_placement(&self) -> Placement {
        Placement::new(
            self.offset,
            Quat::from_rotation_z(self.rotation.to_radians()),
        )
    }

    pub fn world_placement(&self, logical: usize) -> Option<Placement> {
        self.placement(logical)
            .map(|placement| self.root_placement().then(placement))
    }

    /// Chain-space bounds of every pipe mesh
    pub fn bounds(&self) -> Option<AABB> {
        self.iter()
            .filter_map(|(pipe, placement)| {
                let local = pipe.mesh().bounds()?;
                let corners = (0..8).map(|corner| {
                    let pick = |bit: usize, lo: f32, hi: f32| if corner & bit == 0 { lo } else { hi };
                    placement.transform_point(Vec3::new(
                        pick(1, local.min.x, local.max.x),
                        pick(2, local.min.y, local.max.y),
                        pick(4, local.min.z, local.max.z),
                    ))
                });
                AABB::from_points(corners)
            })
            .reduce(|a, b| a.union(&b))
    }

    pub fn setup_first_pipe(&mut self) -> &Pipe {
        self.offset = Vec3::new(0.0, -self.head().curve_radius(), 0.0);
        self.head()
    }

    /// Move the passed head to the tail and re-base the chain on the new head
    pub fn setup_next_pipe(&mut self) -> &Pipe {
        let count = self.pipes.len();
        self.head = (self.head + 1) % count;
        self.recycle_count += 1;

        self.rebase_on_head();

        if count > 1 {
            let tail = self.physical(count - 1);
            let previous = self.physical(count - 2);
            let placement = self.pipes[tail].align_with(
                &self.pipes[previous],
                &self.placements[previous],
                &mut self.rng,
            );
            self.placements[tail] = placement;
        }

        self.offset = Vec3::new(0.0, -self.head().curve_radius(), 0.0);

        debug!(
            "recycled pipe {} to the tail, pipe {} is now active (recycle #{})",
            self.pipes[self.physical(count - 1)].id(),
            self.head().id(),
            self.recycle_count
        );
        self.head()
    }

    fn rebase_on_head(&mut self) {
        let base = self.placements[self.head];
        for placement in &mut self.placements {
            *placement = placement.relative_to(&base);
        }
        self.placements[self.head] = Placement::IDENTITY;
    }
}
