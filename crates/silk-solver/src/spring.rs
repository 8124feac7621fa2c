//! Structural springs.
//!
//! A spring stores its last computed force as an owned value. The grid
//! (or each point, for point-local accumulation) reads it back through
//! [`Spring::force_on`], which applies the sign of the requesting
//! endpoint's [`EndpointRole`].

use serde::{Deserialize, Serialize};
use silk_math::geometry::direction_and_length;
use silk_math::Vec3;
use silk_types::{PointId, SilkError, SilkResult};

use crate::point_mass::PointMass;

/// Lattice direction a spring spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpringOrientation {
    /// Connects neighbours in the same row.
    Horizontal,
    /// Connects neighbours in the same column.
    Vertical,
}

/// Which end of a spring a point is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndpointRole {
    A,
    B,
}

impl EndpointRole {
    /// Sign applied to the spring's pair force for this endpoint.
    ///
    /// [`Spring::current_force`] is the force acting on `B`; `A` receives
    /// the opposite.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            EndpointRole::A => -1.0,
            EndpointRole::B => 1.0,
        }
    }

    /// The other end.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            EndpointRole::A => EndpointRole::B,
            EndpointRole::B => EndpointRole::A,
        }
    }
}

/// How spring damping is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DampingModel {
    /// Damps the endpoints' relative velocity along the spring axis,
    /// applied as an equal-and-opposite pair.
    #[default]
    Relative,
    /// Each endpoint is damped against its own absolute velocity
    /// (`-c·v`). Not momentum-conserving; it also drags the cloth
    /// through still air.
    PerEndpoint,
}

/// A damped spring between two point masses.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    endpoint_a: PointId,
    endpoint_b: PointId,
    orientation: SpringOrientation,
    spring_constant: f32,
    damping: f32,
    rest_length: f32,
    /// Elastic force on `B` from the last [`Spring::update`].
    current_force: Vec3,
    /// Relative damping force on `B` from the last [`Spring::update`].
    damping_force: Vec3,
}

/// Rejects negative and non-finite spring parameters.
pub(crate) fn check_non_negative(name: &'static str, value: f32) -> SilkResult<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SilkError::InvalidParameter { name, value })
    }
}

impl Spring {
    /// Creates a spring with zero stored force.
    pub fn new(
        endpoint_a: PointId,
        endpoint_b: PointId,
        orientation: SpringOrientation,
        spring_constant: f32,
        damping: f32,
        rest_length: f32,
    ) -> Self {
        Self {
            endpoint_a,
            endpoint_b,
            orientation,
            spring_constant,
            damping,
            rest_length,
            current_force: Vec3::ZERO,
            damping_force: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn endpoint_a(&self) -> PointId {
        self.endpoint_a
    }

    #[inline]
    pub fn endpoint_b(&self) -> PointId {
        self.endpoint_b
    }

    /// The point at the given end.
    #[inline]
    pub fn endpoint(&self, role: EndpointRole) -> PointId {
        match role {
            EndpointRole::A => self.endpoint_a,
            EndpointRole::B => self.endpoint_b,
        }
    }

    #[inline]
    pub fn orientation(&self) -> SpringOrientation {
        self.orientation
    }

    #[inline]
    pub fn spring_constant(&self) -> f32 {
        self.spring_constant
    }

    /// Takes effect on the next [`Spring::update`].
    pub fn set_spring_constant(&mut self, spring_constant: f32) -> SilkResult<()> {
        self.spring_constant = check_non_negative("spring_constant", spring_constant)?;
        Ok(())
    }

    #[inline]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Takes effect on the next [`Spring::update`].
    pub fn set_damping(&mut self, damping: f32) -> SilkResult<()> {
        self.damping = check_non_negative("damping", damping)?;
        Ok(())
    }

    #[inline]
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Takes effect on the next [`Spring::update`].
    pub fn set_rest_length(&mut self, rest_length: f32) -> SilkResult<()> {
        self.rest_length = check_non_negative("rest_length", rest_length)?;
        Ok(())
    }

    /// Elastic force acting on endpoint `B`, as of the last update.
    #[inline]
    pub fn current_force(&self) -> Vec3 {
        self.current_force
    }

    /// Recomputes the stored force from the endpoints' current state.
    ///
    /// With `d = normalize(B - A)` and `L = |B - A|`:
    /// `current_force = -k·(L - rest)·d`. Coincident endpoints give
    /// `d = 0` and therefore zero force.
    pub fn update(&mut self, points: &[PointMass]) {
        let a = &points[self.endpoint_a.index()];
        let b = &points[self.endpoint_b.index()];

        let (direction, length) = direction_and_length(a.position(), b.position());
        let magnitude = -self.spring_constant * (length - self.rest_length);
        self.current_force = direction * magnitude;

        let closing_speed = (b.velocity() - a.velocity()).dot(direction);
        self.damping_force = direction * (-self.damping * closing_speed);
    }

    /// Force this spring exerts on the endpoint playing `role`.
    ///
    /// `own_velocity` is only read by [`DampingModel::PerEndpoint`].
    #[inline]
    pub fn force_on(&self, role: EndpointRole, own_velocity: Vec3, model: DampingModel) -> Vec3 {
        match model {
            DampingModel::Relative => (self.current_force + self.damping_force) * role.sign(),
            DampingModel::PerEndpoint => {
                self.current_force * role.sign() - own_velocity * self.damping
            }
        }
    }

    /// Current distance between the endpoints.
    pub fn length(&self, points: &[PointMass]) -> f32 {
        points[self.endpoint_a.index()]
            .position()
            .distance(points[self.endpoint_b.index()].position())
    }

    /// Elastic potential energy `½·k·(L - rest)²`.
    pub fn potential_energy(&self, points: &[PointMass]) -> f64 {
        let stretch = (self.length(points) - self.rest_length) as f64;
        0.5 * self.spring_constant as f64 * stretch * stretch
    }
}
