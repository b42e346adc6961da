use crate::core::PipeId;
use crate::math::Placement;

/// Per-tick output of a tunnel run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TunnelFrame {
    pub number: u64,
    /// Simulated seconds since the run started, including this tick
    pub time: f32,
    pub delta: f32,
    pub active_pipe: PipeId,
    pub crossed_boundary: bool,
    /// Chain root transform to hand to the renderer
    pub root: Placement,
}
