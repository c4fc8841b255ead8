use thiserror::Error;

/// Error types for the engine crate.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A feature override fell outside the bounds declared in the
    /// feature table.
    #[error("feature {key}: value {value} is outside [{min}, {max}]")]
    FeatureOutOfRange {
        key: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A remote simulation response failed structural validation.
    #[error("invalid simulation response: {0}")]
    InvalidSimulation(String),
}

/// Type alias for Result with EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;
