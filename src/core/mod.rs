pub mod clock;
pub mod mesh;
pub mod pipe;
pub mod pipe_system;
pub mod player;

pub use clock::{FixedStep, WallClock};
pub use mesh::PipeMesh;
pub use pipe::{Pipe, PipeId};
pub use pipe_system::PipeSystem;
pub use player::{Player, TickOutcome};
