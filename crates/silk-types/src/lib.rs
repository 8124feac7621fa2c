//! # silk-types
//!
//! Shared types, identifiers, error types, and simulation defaults
//! for the silk cloth simulator.
//!
//! This crate has zero domain logic: it defines the vocabulary
//! that all other silk crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{SilkError, SilkResult};
pub use ids::{PointId, SpringId};
