//! Wind impulse timer.
//!
//! A two-state machine that gates the wind force on and off:
//!
//! ```text
//!        elapsed > on_duration
//!   ON ─────────────────────────▶ OFF
//!    ▲                             │
//!    └─────────────────────────────┘
//!        elapsed > off_duration
//! ```
//!
//! On each transition the elapsed time is reduced by the duration of the
//! state being left. At most one transition happens per `advance` call,
//! so a `dt` spanning several periods is not caught up.

use serde::{Deserialize, Serialize};
use silk_types::{SilkError, SilkResult};

/// Whether the wind impulse is currently applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpulseState {
    On,
    Off,
}

impl ImpulseState {
    #[inline]
    pub fn is_on(self) -> bool {
        matches!(self, ImpulseState::On)
    }
}

/// On/off timer for the wind impulse. Starts `On` with zero elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct WindImpulse {
    state: ImpulseState,
    elapsed: f32,
    on_duration: f32,
    off_duration: f32,
}

fn check_duration(name: &'static str, value: f32) -> SilkResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SilkError::InvalidParameter { name, value })
    }
}

impl WindImpulse {
    /// Creates a timer in the `On` state.
    pub fn new(on_duration: f32, off_duration: f32) -> SilkResult<Self> {
        Ok(Self {
            state: ImpulseState::On,
            elapsed: 0.0,
            on_duration: check_duration("impulse_on_duration", on_duration)?,
            off_duration: check_duration("impulse_off_duration", off_duration)?,
        })
    }

    /// Advances the timer by `dt`. Returns `true` if the state changed.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        match self.state {
            ImpulseState::On if self.elapsed > self.on_duration => {
                self.elapsed -= self.on_duration;
                self.state = ImpulseState::Off;
                true
            }
            ImpulseState::Off if self.elapsed > self.off_duration => {
                self.elapsed -= self.off_duration;
                self.state = ImpulseState::On;
                true
            }
            _ => false,
        }
    }

    /// Returns to the initial `On` state with zero elapsed time.
    pub fn reset(&mut self) {
        self.state = ImpulseState::On;
        self.elapsed = 0.0;
    }

    #[inline]
    pub fn state(&self) -> ImpulseState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.is_on()
    }

    /// Time accumulated in the current state.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn on_duration(&self) -> f32 {
        self.on_duration
    }

    #[inline]
    pub fn off_duration(&self) -> f32 {
        self.off_duration
    }

    pub fn set_on_duration(&mut self, duration: f32) -> SilkResult<()> {
        self.on_duration = check_duration("impulse_on_duration", duration)?;
        Ok(())
    }

    pub fn set_off_duration(&mut self, duration: f32) -> SilkResult<()> {
        self.off_duration = check_duration("impulse_off_duration", duration)?;
        Ok(())
    }
}
