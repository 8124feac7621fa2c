//! # silk-debug
//!
//! Inspection hooks and state snapshots for debugging a running grid.
//!
//! ## Key Types
//!
//! - [`hooks::InspectionHook`]: Callbacks around each grid step
//! - [`hooks::TelemetryHook`]: Turns hook calls into telemetry events
//! - [`hooks::SnapshotRecorder`]: Captures snapshots every N steps
//! - [`snapshot::StateSnapshot`]: bincode-encoded grid state

pub mod hooks;
pub mod snapshot;

pub use hooks::{InspectionHook, NoOpHook, SnapshotRecorder, TelemetryHook};
pub use snapshot::StateSnapshot;
