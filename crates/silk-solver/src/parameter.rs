//! Named live-editable grid parameters.
//!
//! Lets a driver (a control panel, the CLI's `--set`) edit the grid by
//! name and report the edit to telemetry.

use serde::{Deserialize, Serialize};
use silk_types::{SilkError, SilkResult};

/// A scalar the grid accepts while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Buoyancy,
    WindX,
    WindY,
    WindZ,
    ImpulseOn,
    ImpulseOff,
    Mass,
    SpringConstant,
    Damping,
    RestLength,
}

impl Parameter {
    pub fn all() -> &'static [Parameter] {
        &[
            Parameter::Buoyancy,
            Parameter::WindX,
            Parameter::WindY,
            Parameter::WindZ,
            Parameter::ImpulseOn,
            Parameter::ImpulseOff,
            Parameter::Mass,
            Parameter::SpringConstant,
            Parameter::Damping,
            Parameter::RestLength,
        ]
    }

    /// Name used on the command line and in telemetry events.
    pub fn name(self) -> &'static str {
        match self {
            Parameter::Buoyancy => "buoyancy",
            Parameter::WindX => "wind_x",
            Parameter::WindY => "wind_y",
            Parameter::WindZ => "wind_z",
            Parameter::ImpulseOn => "impulse_on",
            Parameter::ImpulseOff => "impulse_off",
            Parameter::Mass => "mass",
            Parameter::SpringConstant => "spring_constant",
            Parameter::Damping => "damping",
            Parameter::RestLength => "rest_length",
        }
    }

    /// Looks a parameter up by [`Parameter::name`].
    pub fn from_name(name: &str) -> SilkResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name() == name)
            .ok_or_else(|| SilkError::InvalidConfig(format!("Unknown parameter: {name}")))
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Parameter {
    type Err = SilkError;

    fn from_str(s: &str) -> SilkResult<Self> {
        Self::from_name(s)
    }
}
