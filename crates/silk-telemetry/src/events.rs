//! Simulation event types.
//!
//! Events are small value types. The step index they carry is the index
//! of the grid step they describe (1-based, matching `StepReport::step`);
//! step 0 is used for events raised before the first step.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the driver loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Grid step the event belongs to.
    pub step: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// A step is about to run.
    StepBegin {
        /// Simulated time before the step (seconds).
        sim_time: f64,
        /// Timestep about to be taken.
        dt: f32,
    },

    /// A step finished.
    StepEnd {
        /// Wall-clock time spent in `update` (seconds).
        wall_time: f64,
    },

    /// The wind impulse changed state during the step.
    ImpulseToggled {
        /// Whether the wind is now on.
        active: bool,
    },

    /// Energy snapshot after the step.
    Energy {
        /// Kinetic energy of the free points.
        kinetic: f64,
        /// Elastic energy stored in the springs.
        elastic: f64,
    },

    /// The grid was regenerated.
    Reset,

    /// A live parameter edit, applied before the step with this index.
    ParameterChanged {
        name: String,
        value: f32,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }

    /// Short machine-friendly name of the payload variant.
    pub fn label(&self) -> &'static str {
        match &self.kind {
            EventKind::StepBegin { .. } => "step_begin",
            EventKind::StepEnd { .. } => "step_end",
            EventKind::ImpulseToggled { .. } => "impulse_toggled",
            EventKind::Energy { .. } => "energy",
            EventKind::Reset => "reset",
            EventKind::ParameterChanged { .. } => "parameter_changed",
        }
    }
}
