pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod math;
pub mod traits;
pub mod tunnel;
pub mod types;

pub use config::{BoundaryMode, PipeConfig, PlayerConfig, TunnelConfig};
pub use error::ConfigError;
pub use tunnel::{RunSummary, Tunnel};
