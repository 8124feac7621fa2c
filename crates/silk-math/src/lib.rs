//! # silk-math
//!
//! Math primitives for the silk cloth simulator.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`)
//! - [`Axis`] for addressing a single vector component
//! - Geometry helpers used by the spring model and normal computation

pub mod axis;
pub mod geometry;

pub use axis::Axis;

// Re-export glam types as the canonical math types for silk.
pub use glam::{Vec2, Vec3};
