use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // Negated comparison so NaN is rejected too
    if !(value > 0.0) {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

fn require_ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if max < min {
        return Err(ConfigError::InvertedRange { field, min, max });
    }
    Ok(())
}

/// Shape parameters shared by every pipe in a tunnel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    /// Radius of the tube cross-section
    pub tube_radius: f32,
    /// Number of quads around the cross-section
    pub radial_divisions: usize,
    /// Arc length between consecutive rings along the centerline
    pub ring_spacing: f32,
    pub min_curve_radius: f32,
    pub max_curve_radius: f32,
    pub min_ring_count: usize,
    pub max_ring_count: usize,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            tube_radius: 1.0,
            radial_divisions: 10,
            ring_spacing: 1.0,
            min_curve_radius: 4.0,
            max_curve_radius: 20.0,
            min_ring_count: 4,
            max_ring_count: 10,
        }
    }
}

impl PipeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("tube radius", self.tube_radius)?;
        require_positive("ring spacing", self.ring_spacing)?;
        require_positive("min curve radius", self.min_curve_radius)?;
        require_ordered("curve radius", self.min_curve_radius, self.max_curve_radius)?;

        if self.radial_divisions < 3 {
            return Err(ConfigError::TooFewRadialDivisions(self.radial_divisions));
        }
        if self.min_ring_count < 1 {
            return Err(ConfigError::ZeroRingCount);
        }
        require_ordered(
            "ring count",
            self.min_ring_count as f32,
            self.max_ring_count as f32,
        )
    }
}

/// What happens to the angular overshoot when the player leaves a pipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Seed the next pipe's progress with the overshoot distance
    #[default]
    CarryOverflow,
    /// Drop the overshoot and restart at zero on the next pipe
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Travel speed in units per second
    pub velocity: f32,
    pub boundary_mode: BoundaryMode,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            velocity: 1.0,
            boundary_mode: BoundaryMode::default(),
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("velocity", self.velocity)
    }
}

/// Top-level configuration for a tunnel run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunnelConfig {
    pub pipe: PipeConfig,
    pub pipe_count: usize,
    pub player: PlayerConfig,
}

impl Default for TunnelConfig {
    fn default() -> Self {
        Self {
            pipe: PipeConfig::default(),
            pipe_count: 4,
            player: PlayerConfig::default(),
        }
    }
}

impl TunnelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pipe.validate()?;
        self.player.validate()?;
        if self.pipe_count < 1 {
            return Err(ConfigError::EmptyChain);
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TunnelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
