//! Benchmark scenarios: a cloth configuration plus how long and how to
//! step it.
//!
//! 1. **Hanging cloth**: default cloth, drapes under buoyancy with the
//!    default wind cycle
//! 2. **Gusty cloth**: short, strong wind gusts
//! 3. **Heavy cloth**: larger, heavier, stiffer grid

use serde::{Deserialize, Serialize};
use silk_solver::ClothConfig;
use silk_types::constants::DEFAULT_DT;
use silk_types::{SilkError, SilkResult};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    HangingCloth,
    GustyCloth,
    HeavyCloth,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::HangingCloth,
            ScenarioKind::GustyCloth,
            ScenarioKind::HeavyCloth,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::HangingCloth => "hanging_cloth",
            ScenarioKind::GustyCloth => "gusty_cloth",
            ScenarioKind::HeavyCloth => "heavy_cloth",
        }
    }

    /// Looks a scenario up by [`ScenarioKind::name`].
    pub fn from_name(name: &str) -> SilkResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.name() == name)
            .ok_or_else(|| SilkError::InvalidConfig(format!("Unknown scenario: {name}")))
    }
}

/// How the runner picks each step's `dt`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StepTiming {
    /// Same `dt` every step.
    Fixed(f32),
    /// Measured with a [`FrameClock`](crate::FrameClock), like a render loop.
    WallClock,
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub config: ClothConfig,
    /// Number of steps to simulate.
    pub timesteps: u32,
    pub timing: StepTiming,
}

impl Scenario {
    /// Default cloth for 10 seconds at 60 fps (two full wind cycles).
    pub fn hanging_cloth() -> Self {
        Self {
            kind: ScenarioKind::HangingCloth,
            config: ClothConfig::default(),
            timesteps: 600,
            timing: StepTiming::Fixed(DEFAULT_DT),
        }
    }

    /// Gusty wind for 5 seconds.
    pub fn gusty_cloth() -> Self {
        Self {
            kind: ScenarioKind::GustyCloth,
            config: ClothConfig::gusty(),
            timesteps: 300,
            timing: StepTiming::Fixed(DEFAULT_DT),
        }
    }

    /// Heavy 20×20 cloth for 5 seconds.
    pub fn heavy_cloth() -> Self {
        Self {
            kind: ScenarioKind::HeavyCloth,
            config: ClothConfig::heavy(),
            timesteps: 300,
            timing: StepTiming::Fixed(DEFAULT_DT),
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::HangingCloth => Self::hanging_cloth(),
            ScenarioKind::GustyCloth => Self::gusty_cloth(),
            ScenarioKind::HeavyCloth => Self::heavy_cloth(),
        }
    }

    pub fn with_timesteps(mut self, timesteps: u32) -> Self {
        self.timesteps = timesteps;
        self
    }

    pub fn with_timing(mut self, timing: StepTiming) -> Self {
        self.timing = timing;
        self
    }
}
