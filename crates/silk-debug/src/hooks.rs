//! Inspection hooks for live debugging.
//!
//! Hooks are called by the driver loop around each
//! [`DeformableGrid::update`](silk_solver::DeformableGrid::update) and
//! only ever see the grid by shared reference.
//!
//! # Lifecycle
//!
//! ```text
//! for each frame:
//!   hook.on_parameter_changed(...) // after each live edit
//!   hook.on_step_begin(...)
//!   grid.update(dt)
//!   hook.on_impulse_toggled(...)   // only if the report says so
//!   hook.on_step_end(...)
//! hook.on_reset()                  // whenever the grid is reset
//! hook.on_simulation_end()
//! ```

use silk_solver::{DeformableGrid, StepReport};
use silk_telemetry::events::{EventKind, SimulationEvent};

use crate::snapshot::StateSnapshot;

/// Trait for simulation inspection hooks.
pub trait InspectionHook: Send {
    /// Called before a step runs. `step` is the index the step will get.
    fn on_step_begin(&mut self, step: u64, sim_time: f64, dt: f32) {
        let _ = (step, sim_time, dt);
    }

    /// Called after a step in which the wind impulse changed state.
    fn on_impulse_toggled(&mut self, step: u64, active: bool) {
        let _ = (step, active);
    }

    /// Called after each step.
    fn on_step_end(&mut self, grid: &DeformableGrid, report: &StepReport, wall_time: f64) {
        let _ = (grid, report, wall_time);
    }

    /// Called after a live parameter edit was applied. `step` is the index
    /// of the next step, the first to run with the new value.
    fn on_parameter_changed(&mut self, step: u64, name: &str, value: f32) {
        let _ = (step, name, value);
    }

    /// Called after the grid was reset.
    fn on_reset(&mut self) {}

    /// Called when the simulation completes.
    fn on_simulation_end(&mut self) {}

    /// Returns the hook's name for logging.
    fn name(&self) -> &str;
}

/// Hook that does nothing.
#[derive(Debug, Default)]
pub struct NoOpHook;

impl InspectionHook for NoOpHook {
    fn name(&self) -> &str {
        "noop"
    }
}

/// Collects telemetry events from hook calls.
///
/// Drain them into an [`EventBus`](silk_telemetry::EventBus) between
/// frames. With `energy` enabled, every step end also records an
/// [`EventKind::Energy`] sample.
pub struct TelemetryHook {
    events: Vec<SimulationEvent>,
    energy: bool,
    last_step: u64,
}

impl TelemetryHook {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            energy: false,
            last_step: 0,
        }
    }

    /// Also sample kinetic and elastic energy after every step.
    pub fn with_energy(mut self) -> Self {
        self.energy = true;
        self
    }

    /// Drains collected events for dispatch.
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for TelemetryHook {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectionHook for TelemetryHook {
    fn on_step_begin(&mut self, step: u64, sim_time: f64, dt: f32) {
        self.events
            .push(SimulationEvent::new(step, EventKind::StepBegin { sim_time, dt }));
    }

    fn on_impulse_toggled(&mut self, step: u64, active: bool) {
        self.events
            .push(SimulationEvent::new(step, EventKind::ImpulseToggled { active }));
    }

    fn on_step_end(&mut self, grid: &DeformableGrid, report: &StepReport, wall_time: f64) {
        self.last_step = report.step;
        self.events
            .push(SimulationEvent::new(report.step, EventKind::StepEnd { wall_time }));
        if self.energy {
            self.events.push(SimulationEvent::new(
                report.step,
                EventKind::Energy {
                    kinetic: grid.kinetic_energy(),
                    elastic: grid.elastic_energy(),
                },
            ));
        }
    }

    fn on_parameter_changed(&mut self, step: u64, name: &str, value: f32) {
        self.events.push(SimulationEvent::new(
            step,
            EventKind::ParameterChanged {
                name: name.to_string(),
                value,
            },
        ));
    }

    fn on_reset(&mut self) {
        self.events
            .push(SimulationEvent::new(self.last_step, EventKind::Reset));
        self.last_step = 0;
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}

/// Captures a [`StateSnapshot`] every `interval` steps.
pub struct SnapshotRecorder {
    interval: u64,
    snapshots: Vec<StateSnapshot>,
}

impl SnapshotRecorder {
    /// `interval` of 0 is treated as 1.
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            snapshots: Vec::new(),
        }
    }

    pub fn snapshots(&self) -> &[StateSnapshot] {
        &self.snapshots
    }

    /// The most recent snapshot, if any.
    pub fn latest(&self) -> Option<&StateSnapshot> {
        self.snapshots.last()
    }

    pub fn into_snapshots(self) -> Vec<StateSnapshot> {
        self.snapshots
    }
}

impl InspectionHook for SnapshotRecorder {
    fn on_step_end(&mut self, grid: &DeformableGrid, report: &StepReport, _wall_time: f64) {
        if report.step % self.interval == 0 {
            self.snapshots.push(StateSnapshot::from_grid(grid));
            tracing::trace!(step = report.step, "Captured snapshot");
        }
    }

    fn name(&self) -> &str {
        "snapshot_recorder"
    }
}
