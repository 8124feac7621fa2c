//! Point masses: the nodes of the spring network.

use silk_math::Vec3;
use silk_types::{SilkError, SilkResult, SpringId};

use crate::spring::EndpointRole;

/// A spring touching a point, and which end of it the point is.
///
/// Built once at topology generation; used by point-local force
/// accumulation to gather forces without pointer cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpringLink {
    /// The attached spring.
    pub spring: SpringId,
    /// Which endpoint of `spring` this point is.
    pub role: EndpointRole,
}

/// A node of the lattice carrying mass, position and velocity.
///
/// Forces are split in two accumulators: `external_force` is set by the
/// body before each step (wind, buoyancy) and `internal_force` gathers
/// spring contributions. Both are consumed by [`PointMass::integrate`].
#[derive(Debug, Clone)]
pub struct PointMass {
    mass: f32,
    position: Vec3,
    velocity: Vec3,
    internal_force: Vec3,
    external_force: Vec3,
    locked: bool,
    springs: Vec<SpringLink>,
}

/// Rejects non-positive and non-finite masses.
pub(crate) fn check_mass(mass: f32) -> SilkResult<f32> {
    if mass.is_finite() && mass > 0.0 {
        Ok(mass)
    } else {
        Err(SilkError::InvalidMass(mass))
    }
}

impl PointMass {
    /// Creates an unlocked point at rest.
    pub fn new(mass: f32, position: Vec3) -> SilkResult<Self> {
        Ok(Self {
            mass: check_mass(mass)?,
            position,
            velocity: Vec3::ZERO,
            internal_force: Vec3::ZERO,
            external_force: Vec3::ZERO,
            locked: false,
            springs: Vec::new(),
        })
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Sets the mass. Non-positive or non-finite values are rejected and
    /// leave the point unchanged.
    pub fn set_mass(&mut self, mass: f32) -> SilkResult<()> {
        self.mass = check_mass(mass)?;
        Ok(())
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn internal_force(&self) -> Vec3 {
        self.internal_force
    }

    /// Overwrites the internal force accumulator.
    #[inline]
    pub fn set_internal_force(&mut self, force: Vec3) {
        self.internal_force = force;
    }

    /// Adds a spring contribution to the internal force accumulator.
    #[inline]
    pub fn accumulate_internal_force(&mut self, force: Vec3) {
        self.internal_force += force;
    }

    #[inline]
    pub fn external_force(&self) -> Vec3 {
        self.external_force
    }

    /// Overwrites the external force.
    #[inline]
    pub fn set_external_force(&mut self, force: Vec3) {
        self.external_force = force;
    }

    /// Pins the point in place. Velocity and position are left as they are.
    #[inline]
    pub fn lock(&mut self) {
        self.locked = true;
    }

    #[inline]
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Springs attached to this point, in spring creation order.
    #[inline]
    pub fn springs(&self) -> &[SpringLink] {
        &self.springs
    }

    pub(crate) fn attach_spring(&mut self, spring: SpringId, role: EndpointRole) {
        self.springs.push(SpringLink { spring, role });
    }

    /// Advances the point by `dt` with symplectic Euler.
    ///
    /// `a = (F_int + F_ext) / m`, then `v += a·dt`, then `x += v·dt` using
    /// the updated velocity. Locked points are left untouched.
    pub fn integrate(&mut self, dt: f32) {
        if self.locked {
            return;
        }
        let acceleration = (self.internal_force + self.external_force) / self.mass;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Kinetic energy `½·m·|v|²`. Locked points contribute nothing.
    pub fn kinetic_energy(&self) -> f64 {
        if self.locked {
            return 0.0;
        }
        0.5 * self.mass as f64 * self.velocity.length_squared() as f64
    }
}
