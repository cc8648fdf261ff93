//! Error types for pipes-rs.

use glam::IVec3;
use thiserror::Error;

/// The main error type for pipes-rs operations.
///
/// Growth rejections are not errors; they are reported through
/// [`StepOutcome`](crate::pipe::StepOutcome).
#[derive(Error, Debug)]
pub enum PipesError {
    /// A joint style name was not one of `elbow`, `ball`, `mixed` or `cycle`.
    #[error("unknown joint style '{0}' (expected elbow, ball, mixed or cycle)")]
    UnknownJointStyle(String),

    /// The clear interval is empty, negative or not finite.
    #[error("invalid clear interval: [{min}, {max}] seconds")]
    InvalidInterval { min: f64, max: f64 },

    /// Grid bounds with `min > max` on some axis.
    #[error("invalid grid bounds: min {min} exceeds max {max}")]
    InvalidBounds { min: IVec3, max: IVec3 },

    /// Options JSON was well formed but not usable.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for pipes-rs operations.
pub type Result<T> = std::result::Result<T, PipesError>;
