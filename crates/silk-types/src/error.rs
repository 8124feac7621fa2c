//! Error types for the silk simulator.
//!
//! All crates return `SilkResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the silk simulator.
#[derive(Debug, Error)]
pub enum SilkError {
    /// Point mass must be positive and finite.
    #[error("Invalid mass: {0} (must be positive and finite)")]
    InvalidMass(f32),

    /// The grid needs at least one point per side.
    #[error("Invalid grid size: {0} (must be at least 1)")]
    InvalidGridSize(u32),

    /// A physical parameter is out of its valid range.
    #[error("Invalid parameter `{name}`: {value}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
    },

    /// Timestep must be finite and non-negative.
    #[error("Invalid timestep: {0}")]
    InvalidTimestep(f32),

    /// A point index does not exist in the grid.
    #[error("Point index {index} out of bounds (count: {count})")]
    PointOutOfBounds {
        index: usize,
        count: usize,
    },

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, SilkError>`.
pub type SilkResult<T> = Result<T, SilkError>;
