//! Cloth configuration.
//!
//! Every parameter the grid is built from, in one serde type. All fields
//! are optional in TOML and fall back to the defaults in
//! `silk_types::constants`.

use serde::{Deserialize, Serialize};
use silk_types::constants::{
    DEFAULT_BUOYANCY, DEFAULT_DAMPING, DEFAULT_GRID_SIZE, DEFAULT_IMPULSE_OFF,
    DEFAULT_IMPULSE_ON, DEFAULT_POINT_MASS, DEFAULT_REST_LENGTH, DEFAULT_SPRING_CONSTANT,
    DEFAULT_WIND,
};
use silk_types::{SilkError, SilkResult};

use crate::spring::DampingModel;
use crate::strategy::ForceAccumulation;

/// Configuration for a [`DeformableGrid`](crate::DeformableGrid).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothConfig {
    /// Points per side; the grid holds `grid_size²` points.
    pub grid_size: u32,

    /// Mass of every point (kg).
    pub point_mass: f32,

    /// Spring stiffness `k` (N/m).
    pub spring_constant: f32,

    /// Spring damping coefficient.
    pub damping: f32,

    /// Spring rest length.
    pub rest_length: f32,

    /// Vertical external force on every point. Overwrites the wind's Y.
    pub buoyancy: f32,

    /// Wind force `[x, y, z]` applied while the impulse is on.
    pub wind: [f32; 3],

    /// Seconds the wind impulse stays on.
    pub impulse_on: f32,

    /// Seconds the wind impulse stays off.
    pub impulse_off: f32,

    pub damping_model: DampingModel,

    pub accumulation: ForceAccumulation,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            point_mass: DEFAULT_POINT_MASS,
            spring_constant: DEFAULT_SPRING_CONSTANT,
            damping: DEFAULT_DAMPING,
            rest_length: DEFAULT_REST_LENGTH,
            buoyancy: DEFAULT_BUOYANCY,
            wind: DEFAULT_WIND,
            impulse_on: DEFAULT_IMPULSE_ON,
            impulse_off: DEFAULT_IMPULSE_OFF,
            damping_model: DampingModel::default(),
            accumulation: ForceAccumulation::default(),
        }
    }
}

impl ClothConfig {
    /// Larger, heavier and stiffer cloth.
    pub fn heavy() -> Self {
        Self {
            grid_size: 20,
            point_mass: 40.0,
            spring_constant: 80.0,
            damping: 40.0,
            ..Default::default()
        }
    }

    /// Strong wind with short, frequent gusts.
    pub fn gusty() -> Self {
        Self {
            wind: [4.0, 0.0, 25.0],
            impulse_on: 0.5,
            impulse_off: 0.75,
            ..Default::default()
        }
    }

    /// Checks every field against the range the grid accepts.
    pub fn validate(&self) -> SilkResult<()> {
        if self.grid_size == 0 {
            return Err(SilkError::InvalidGridSize(self.grid_size));
        }
        if !(self.point_mass.is_finite() && self.point_mass > 0.0) {
            return Err(SilkError::InvalidMass(self.point_mass));
        }

        let non_negative = [
            ("spring_constant", self.spring_constant),
            ("damping", self.damping),
            ("rest_length", self.rest_length),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SilkError::InvalidParameter { name, value });
            }
        }

        let positive = [
            ("impulse_on_duration", self.impulse_on),
            ("impulse_off_duration", self.impulse_off),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SilkError::InvalidParameter { name, value });
            }
        }

        if !self.buoyancy.is_finite() {
            return Err(SilkError::InvalidParameter {
                name: "buoyancy",
                value: self.buoyancy,
            });
        }
        if let Some(&value) = self.wind.iter().find(|w| !w.is_finite()) {
            return Err(SilkError::InvalidParameter { name: "wind", value });
        }

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> SilkResult<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| SilkError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> SilkResult<String> {
        toml::to_string(self).map_err(|e| SilkError::Serialization(e.to_string()))
    }
}
