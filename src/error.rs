use thiserror::Error;

/// Configuration precondition violations, reported at construction time
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("radial divisions must be at least 3, got {0}")]
    TooFewRadialDivisions(usize),

    #[error("minimum ring count must be at least 1")]
    ZeroRingCount,

    #[error("pipe count must be at least 1")]
    EmptyChain,

    #[error("{field} range is inverted: max {max} < min {min}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
