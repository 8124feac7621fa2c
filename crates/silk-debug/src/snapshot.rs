//! State snapshot serialization for replay and debugging.
//!
//! Snapshots capture the dynamic state of a grid at one step, enabling
//! offline inspection and diff-based debugging between two runs.

use serde::{Deserialize, Serialize};
use silk_math::Vec3;
use silk_solver::DeformableGrid;
use silk_types::{SilkError, SilkResult};

/// Grid state at one step. Serialized with `bincode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Step index when this snapshot was taken.
    pub step: u64,
    /// Simulation time in seconds.
    pub sim_time: f64,
    /// Points per side.
    pub grid_size: u32,
    /// Positions, flat: `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
    /// Velocities, flat: `[vx0, vy0, vz0, ...]`.
    pub velocities: Vec<f32>,
    /// Pin flag per point.
    pub locked: Vec<bool>,
    /// Whether the wind impulse was on.
    pub impulse_active: bool,
}

impl StateSnapshot {
    /// Captures the current state of `grid`.
    pub fn from_grid(grid: &DeformableGrid) -> Self {
        let points = grid.points();
        let mut snapshot = Self::build(
            grid.step_count(),
            grid.sim_time(),
            &grid.positions(),
            &grid.velocities(),
        );
        snapshot.grid_size = grid.grid_size();
        snapshot.locked = points.iter().map(|p| p.is_locked()).collect();
        snapshot.impulse_active = grid.impulse().is_active();
        snapshot
    }

    /// Builds a snapshot from position and velocity slices.
    ///
    /// The slices must have the same length. `grid_size` is inferred when
    /// the point count is a perfect square and left at 0 otherwise; all
    /// points are recorded as free.
    pub fn from_points(
        step: u64,
        sim_time: f64,
        positions: &[Vec3],
        velocities: &[Vec3],
    ) -> SilkResult<Self> {
        if positions.len() != velocities.len() {
            return Err(SilkError::InvalidMesh(format!(
                "Snapshot needs one velocity per position: {} positions, {} velocities",
                positions.len(),
                velocities.len()
            )));
        }
        Ok(Self::build(step, sim_time, positions, velocities))
    }

    fn build(step: u64, sim_time: f64, positions: &[Vec3], velocities: &[Vec3]) -> Self {
        let n = positions.len();
        let side = (n as f64).sqrt().round() as u32;
        let grid_size = if (side as usize) * (side as usize) == n { side } else { 0 };

        Self {
            step,
            sim_time,
            grid_size,
            positions: positions.iter().flat_map(|p| p.to_array()).collect(),
            velocities: velocities.iter().flat_map(|v| v.to_array()).collect(),
            locked: vec![false; n],
            impulse_active: true,
        }
    }

    pub fn point_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    pub fn velocity(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.velocities[i * 3..i * 3 + 3])
    }

    /// Largest per-point distance between two snapshots of the same grid.
    pub fn max_displacement(&self, other: &StateSnapshot) -> SilkResult<f32> {
        if self.point_count() != other.point_count() {
            return Err(SilkError::InvalidMesh(format!(
                "Snapshot point counts differ: {} vs {}",
                self.point_count(),
                other.point_count()
            )));
        }
        Ok((0..self.point_count())
            .map(|i| self.position(i).distance(other.position(i)))
            .fold(0.0, f32::max))
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> SilkResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| SilkError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format and checks buffer consistency.
    pub fn from_bytes(data: &[u8]) -> SilkResult<Self> {
        let snapshot: Self = bincode::deserialize(data)
            .map_err(|e| SilkError::Serialization(format!("Snapshot deserialization failed: {}", e)))?;
        let n = snapshot.locked.len();
        if snapshot.positions.len() != n * 3 || snapshot.velocities.len() != n * 3 {
            return Err(SilkError::Serialization(
                "Snapshot buffers have inconsistent lengths".into(),
            ));
        }
        Ok(snapshot)
    }

    pub fn write_to(&self, path: &std::path::Path) -> SilkResult<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn read_from(path: &std::path::Path) -> SilkResult<Self> {
        Self::from_bytes(&std::fs::read(path)?)
    }
}
