//! The deformable grid: an `n × n` mass–spring body.
//!
//! Owns the point arena, the spring arena (springs refer to points by
//! [`PointId`]), the wind impulse timer, and the render mesh that is
//! refreshed after every step.
//!
//! ## Per-step pipeline
//!
//! 1. Advance the impulse timer.
//! 2. Set external forces (wind when on, Y overwritten by buoyancy); zero
//!    internal forces.
//! 3. Update every spring.
//! 4. Accumulate spring forces into the points.
//! 5. Integrate every point (symplectic Euler).
//! 6. Refresh mesh positions, marker colors and normals.

use silk_math::{Axis, Vec2, Vec3};
use silk_mesh::generators::lattice;
use silk_mesh::normals::compute_vertex_normals;
use silk_mesh::ClothMesh;
use silk_types::constants::{FREE_COLOR, LOCKED_COLOR};
use silk_types::{PointId, SilkError, SilkResult, SpringId};
use tracing::{debug, trace};

use crate::config::ClothConfig;
use crate::impulse::{ImpulseState, WindImpulse};
use crate::parameter::Parameter;
use crate::point_mass::{check_mass, PointMass};
use crate::spring::{check_non_negative, DampingModel, EndpointRole, Spring, SpringOrientation};
use crate::strategy::ForceAccumulation;

/// Summary of one [`DeformableGrid::update`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// 1-based index of the step just taken.
    pub step: u64,
    /// Simulated time after the step.
    pub sim_time: f64,
    /// Timestep used.
    pub dt: f32,
    /// Impulse state the step ran with.
    pub impulse: ImpulseState,
    /// Whether the impulse changed state at the start of this step.
    pub impulse_toggled: bool,
}

/// A square mass–spring cloth pinned along its top row.
#[derive(Debug, Clone)]
pub struct DeformableGrid {
    grid_size: u32,
    points: Vec<PointMass>,
    springs: Vec<Spring>,
    impulse: WindImpulse,
    wind: Vec3,
    buoyancy: f32,
    spring_constant: f32,
    damping: f32,
    rest_length: f32,
    damping_model: DampingModel,
    accumulation: ForceAccumulation,
    step: u64,
    sim_time: f64,
    mesh: ClothMesh,
}

impl DeformableGrid {
    /// Creates a `grid_size × grid_size` grid with every point weighing
    /// `point_mass` and every other parameter at its default.
    pub fn new(grid_size: u32, point_mass: f32) -> SilkResult<Self> {
        Self::from_config(&ClothConfig {
            grid_size,
            point_mass,
            ..Default::default()
        })
    }

    /// Builds a grid from a validated configuration.
    pub fn from_config(config: &ClothConfig) -> SilkResult<Self> {
        config.validate()?;
        // Mesh indices are u32.
        let n = config.grid_size as u64;
        if n * n > u32::MAX as u64 {
            return Err(SilkError::InvalidGridSize(config.grid_size));
        }

        let mut grid = Self {
            grid_size: config.grid_size,
            points: Vec::new(),
            springs: Vec::new(),
            impulse: WindImpulse::new(config.impulse_on, config.impulse_off)?,
            wind: Vec3::from_array(config.wind),
            buoyancy: config.buoyancy,
            spring_constant: config.spring_constant,
            damping: config.damping,
            rest_length: config.rest_length,
            damping_model: config.damping_model,
            accumulation: config.accumulation,
            step: 0,
            sim_time: 0.0,
            mesh: lattice(config.grid_size),
        };
        grid.generate_grid(config.point_mass)?;
        grid.generate_springs();
        grid.refresh_mesh();

        debug!(
            grid_size = grid.grid_size,
            points = grid.points.len(),
            springs = grid.springs.len(),
            "Generated deformable grid"
        );
        Ok(grid)
    }

    /// Lays out points row-major, centered by `n/2` on every axis, and pins
    /// the top row.
    fn generate_grid(&mut self, mass: f32) -> SilkResult<()> {
        let n = self.grid_size as usize;
        let half = self.grid_size as f32 * 0.5;

        self.points.clear();
        self.points.reserve(n * n);
        for row in 0..n {
            for col in 0..n {
                let position = Vec3::new(col as f32 - half, row as f32 - half, -half);
                self.points.push(PointMass::new(mass, position)?);
            }
        }

        let top_row = (n - 1) * n;
        for point in &mut self.points[top_row..] {
            point.lock();
        }
        Ok(())
    }

    /// Connects orthogonal neighbours and builds each point's adjacency list.
    ///
    /// Point `i` is endpoint A of the spring to its left neighbour `i-1`;
    /// the point above it, `i+n`, is endpoint A of the vertical spring.
    fn generate_springs(&mut self) {
        let n = self.grid_size as usize;
        self.springs.clear();
        self.springs.reserve(2 * n * n.saturating_sub(1));

        for i in 0..self.points.len() {
            let (row, col) = (i / n, i % n);
            if col != 0 {
                self.connect(i, i - 1, SpringOrientation::Horizontal);
            }
            if row + 1 < n {
                self.connect(i + n, i, SpringOrientation::Vertical);
            }
        }
    }

    fn connect(&mut self, a: usize, b: usize, orientation: SpringOrientation) {
        let id = SpringId(self.springs.len() as u32);
        self.springs.push(Spring::new(
            PointId(a as u32),
            PointId(b as u32),
            orientation,
            self.spring_constant,
            self.damping,
            self.rest_length,
        ));
        self.points[a].attach_spring(id, EndpointRole::A);
        self.points[b].attach_spring(id, EndpointRole::B);
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// `dt` is not clamped; it only has to be finite and non-negative.
    pub fn update(&mut self, dt: f32) -> SilkResult<StepReport> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SilkError::InvalidTimestep(dt));
        }

        let impulse_toggled = self.impulse.advance(dt);
        let impulse = self.impulse.state();
        if impulse_toggled {
            debug!(step = self.step + 1, ?impulse, "Wind impulse toggled");
        }

        let base = if impulse.is_on() { self.wind } else { Vec3::ZERO };
        let external = Axis::VERTICAL.with(base, self.buoyancy);
        for point in &mut self.points {
            point.set_external_force(external);
            point.set_internal_force(Vec3::ZERO);
        }

        for spring in &mut self.springs {
            spring.update(&self.points);
        }

        self.accumulation
            .apply(&mut self.points, &self.springs, self.damping_model);

        for point in &mut self.points {
            point.integrate(dt);
        }

        self.refresh_mesh();

        self.step += 1;
        self.sim_time += dt as f64;
        trace!(step = self.step, dt, sim_time = self.sim_time, "Grid step");

        Ok(StepReport {
            step: self.step,
            sim_time: self.sim_time,
            dt,
            impulse,
            impulse_toggled,
        })
    }

    /// Regenerates points and springs, keeping the current point mass.
    ///
    /// Velocities return to zero, the pinned row is restored, and the
    /// impulse timer, step counter and simulated time start over.
    pub fn reset(&mut self) -> SilkResult<()> {
        let mass = self
            .points
            .first()
            .map(PointMass::mass)
            .unwrap_or(silk_types::constants::DEFAULT_POINT_MASS);

        self.generate_grid(mass)?;
        self.generate_springs();
        self.impulse.reset();
        self.step = 0;
        self.sim_time = 0.0;
        self.refresh_mesh();

        debug!(mass, "Grid reset");
        Ok(())
    }

    fn refresh_mesh(&mut self) {
        for (i, point) in self.points.iter().enumerate() {
            self.mesh.set_position(i, point.position());
            let color = if point.is_locked() { LOCKED_COLOR } else { FREE_COLOR };
            self.mesh.set_color(i, color);
        }
        compute_vertex_normals(&mut self.mesh);
    }

    // ─── Parameters ──────────────────────────────────────────

    /// Vertical external force applied to every point from the next step.
    pub fn set_buoyancy(&mut self, buoyancy: f32) -> SilkResult<()> {
        if !buoyancy.is_finite() {
            return Err(SilkError::InvalidParameter {
                name: "buoyancy",
                value: buoyancy,
            });
        }
        self.buoyancy = buoyancy;
        debug!(buoyancy, "Buoyancy changed");
        Ok(())
    }

    pub fn buoyancy(&self) -> f32 {
        self.buoyancy
    }

    /// Sets one component of the wind vector.
    pub fn set_wind_component(&mut self, axis: Axis, value: f32) -> SilkResult<()> {
        if !value.is_finite() {
            return Err(SilkError::InvalidParameter { name: "wind", value });
        }
        self.wind = axis.with(self.wind, value);
        debug!(?axis, value, "Wind component changed");
        Ok(())
    }

    pub fn set_wind(&mut self, wind: Vec3) -> SilkResult<()> {
        if !wind.is_finite() {
            let value = wind.to_array().into_iter().find(|w| !w.is_finite());
            return Err(SilkError::InvalidParameter {
                name: "wind",
                value: value.unwrap_or(f32::NAN),
            });
        }
        self.wind = wind;
        debug!(?wind, "Wind changed");
        Ok(())
    }

    pub fn wind(&self) -> Vec3 {
        self.wind
    }

    pub fn set_impulse_on_duration(&mut self, seconds: f32) -> SilkResult<()> {
        self.impulse.set_on_duration(seconds)
    }

    pub fn set_impulse_off_duration(&mut self, seconds: f32) -> SilkResult<()> {
        self.impulse.set_off_duration(seconds)
    }

    pub fn impulse(&self) -> &WindImpulse {
        &self.impulse
    }

    /// Sets the mass of every point. Survives [`DeformableGrid::reset`].
    pub fn set_mass(&mut self, mass: f32) -> SilkResult<()> {
        check_mass(mass)?;
        for point in &mut self.points {
            point.set_mass(mass)?;
        }
        debug!(mass, "Point mass changed");
        Ok(())
    }

    pub fn set_spring_constant(&mut self, spring_constant: f32) -> SilkResult<()> {
        self.spring_constant = check_non_negative("spring_constant", spring_constant)?;
        for spring in &mut self.springs {
            spring.set_spring_constant(spring_constant)?;
        }
        debug!(spring_constant, "Spring constant changed");
        Ok(())
    }

    pub fn set_damping(&mut self, damping: f32) -> SilkResult<()> {
        self.damping = check_non_negative("damping", damping)?;
        for spring in &mut self.springs {
            spring.set_damping(damping)?;
        }
        debug!(damping, "Damping changed");
        Ok(())
    }

    pub fn set_rest_length(&mut self, rest_length: f32) -> SilkResult<()> {
        self.rest_length = check_non_negative("rest_length", rest_length)?;
        for spring in &mut self.springs {
            spring.set_rest_length(rest_length)?;
        }
        debug!(rest_length, "Rest length changed");
        Ok(())
    }

    /// Routes a named edit to the matching setter.
    pub fn set_parameter(&mut self, parameter: Parameter, value: f32) -> SilkResult<()> {
        match parameter {
            Parameter::WindX => self.set_wind_component(Axis::X, value),
            Parameter::WindY => self.set_wind_component(Axis::Y, value),
            Parameter::WindZ => self.set_wind_component(Axis::Z, value),
            Parameter::Buoyancy => self.set_buoyancy(value),
            Parameter::ImpulseOn => self.set_impulse_on_duration(value),
            Parameter::ImpulseOff => self.set_impulse_off_duration(value),
            Parameter::Mass => self.set_mass(value),
            Parameter::SpringConstant => self.set_spring_constant(value),
            Parameter::Damping => self.set_damping(value),
            Parameter::RestLength => self.set_rest_length(value),
        }
    }

    /// Current value of a named parameter.
    pub fn parameter(&self, parameter: Parameter) -> f32 {
        let config = self.config();
        match parameter {
            Parameter::WindX => config.wind[0],
            Parameter::WindY => config.wind[1],
            Parameter::WindZ => config.wind[2],
            Parameter::Buoyancy => config.buoyancy,
            Parameter::ImpulseOn => config.impulse_on,
            Parameter::ImpulseOff => config.impulse_off,
            Parameter::Mass => config.point_mass,
            Parameter::SpringConstant => config.spring_constant,
            Parameter::Damping => config.damping,
            Parameter::RestLength => config.rest_length,
        }
    }

    pub fn set_damping_model(&mut self, model: DampingModel) {
        self.damping_model = model;
    }

    pub fn damping_model(&self) -> DampingModel {
        self.damping_model
    }

    pub fn set_force_accumulation(&mut self, accumulation: ForceAccumulation) {
        self.accumulation = accumulation;
    }

    pub fn force_accumulation(&self) -> ForceAccumulation {
        self.accumulation
    }

    /// Pins a point in place.
    pub fn lock_point(&mut self, id: PointId) -> SilkResult<()> {
        self.point_mut(id)?.lock();
        self.refresh_mesh();
        Ok(())
    }

    /// Releases a pinned point.
    pub fn unlock_point(&mut self, id: PointId) -> SilkResult<()> {
        self.point_mut(id)?.unlock();
        self.refresh_mesh();
        Ok(())
    }

    // ─── Accessors ───────────────────────────────────────────

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    pub fn points(&self) -> &[PointMass] {
        &self.points
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn point(&self, id: PointId) -> SilkResult<&PointMass> {
        let count = self.points.len();
        self.points
            .get(id.index())
            .ok_or(SilkError::PointOutOfBounds { index: id.index(), count })
    }

    fn point_mut(&mut self, id: PointId) -> SilkResult<&mut PointMass> {
        let count = self.points.len();
        self.points
            .get_mut(id.index())
            .ok_or(SilkError::PointOutOfBounds { index: id.index(), count })
    }

    pub fn spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id.index())
    }

    /// Current point positions, row-major.
    pub fn vertices(&self) -> Vec<Vec3> {
        self.mesh.vertices()
    }

    /// Triangle indices, two counter-clockwise triangles per cell.
    pub fn indices(&self) -> &[u32] {
        &self.mesh.indices
    }

    pub fn uvs(&self) -> Vec<Vec2> {
        self.mesh.uvs()
    }

    pub fn normals(&self) -> Vec<Vec3> {
        self.mesh.normals()
    }

    /// Marker color per point: red when pinned, white otherwise.
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.mesh.colors
    }

    pub fn mesh(&self) -> &ClothMesh {
        &self.mesh
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.points.iter().map(PointMass::position).collect()
    }

    pub fn velocities(&self) -> Vec<Vec3> {
        self.points.iter().map(PointMass::velocity).collect()
    }

    /// Steps taken since construction or the last reset.
    pub fn step_count(&self) -> u64 {
        self.step
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Total kinetic energy of the free points.
    pub fn kinetic_energy(&self) -> f64 {
        self.points.iter().map(PointMass::kinetic_energy).sum()
    }

    /// Total elastic energy stored in the springs.
    pub fn elastic_energy(&self) -> f64 {
        self.springs
            .iter()
            .map(|s| s.potential_energy(&self.points))
            .sum()
    }

    /// The configuration that would rebuild this grid from scratch.
    pub fn config(&self) -> ClothConfig {
        ClothConfig {
            grid_size: self.grid_size,
            point_mass: self
                .points
                .first()
                .map(PointMass::mass)
                .unwrap_or(silk_types::constants::DEFAULT_POINT_MASS),
            spring_constant: self.spring_constant,
            damping: self.damping,
            rest_length: self.rest_length,
            buoyancy: self.buoyancy,
            wind: self.wind.to_array(),
            impulse_on: self.impulse.on_duration(),
            impulse_off: self.impulse.off_duration(),
            damping_model: self.damping_model,
            accumulation: self.accumulation,
        }
    }
}
