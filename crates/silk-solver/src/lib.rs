//! # silk-solver
//!
//! The physics core of silk: a mass–spring–damper network laid out on a
//! square lattice, driven by buoyancy and a periodically toggling wind
//! impulse, advanced with symplectic Euler.
//!
//! ## Key Types
//!
//! - [`PointMass`]: Mass, position, velocity, force accumulators, lock flag
//! - [`Spring`]: Structural spring between two point masses
//! - [`WindImpulse`]: Two-state on/off timer gating the wind force
//! - [`DeformableGrid`]: Owns points, springs and the render mesh; `update(dt)`
//! - [`ClothConfig`]: Serializable configuration (TOML)
//! - [`ForceAccumulation`]: Spring-local or point-local force gathering
//! - [`Parameter`]: Named live edits, routed by [`DeformableGrid::set_parameter`]
//!
//! ## Example
//!
//! ```
//! use silk_solver::DeformableGrid;
//!
//! let mut grid = DeformableGrid::new(10, 10.0).unwrap();
//! for _ in 0..60 {
//!     grid.update(1.0 / 60.0).unwrap();
//! }
//! let vertices = grid.vertices();
//! assert_eq!(vertices.len(), 100);
//! ```

pub mod config;
pub mod grid;
pub mod impulse;
pub mod parameter;
pub mod point_mass;
pub mod spring;
pub mod strategy;

pub use config::ClothConfig;
pub use grid::{DeformableGrid, StepReport};
pub use impulse::{ImpulseState, WindImpulse};
pub use parameter::Parameter;
pub use point_mass::{PointMass, SpringLink};
pub use spring::{DampingModel, EndpointRole, Spring, SpringOrientation};
pub use strategy::ForceAccumulation;
