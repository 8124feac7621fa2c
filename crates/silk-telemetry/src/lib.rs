//! # silk-telemetry
//!
//! Event bus for simulation telemetry. The driver loop emits structured
//! events (step timing, impulse toggles, energy, parameter edits) which
//! are dispatched to pluggable sinks on `flush`.
//!
//! ## Key Types
//!
//! - [`SimulationEvent`]: Step-tagged event with an [`EventKind`] payload
//! - [`EventBus`]: Channel-backed dispatcher
//! - [`sinks::EventSink`]: Consumer trait; [`sinks::VecSink`],
//!   [`sinks::TracingSink`] and [`sinks::JsonLinesSink`] ship here

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
