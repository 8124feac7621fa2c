//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Number of steps executed.
    pub timesteps: u32,
    /// Simulated time covered (seconds).
    pub sim_time: f64,
    /// Average wall-clock time per step (seconds).
    pub avg_step_time: f64,
    pub min_step_time: f64,
    pub max_step_time: f64,
    /// Kinetic energy after the last step.
    pub final_kinetic_energy: f64,
    /// Elastic energy after the last step.
    pub final_elastic_energy: f64,
    /// Maximum point displacement from the initial lattice.
    pub max_displacement: f32,
    /// Number of wind impulse state changes.
    pub impulse_toggles: u32,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub spring_count: usize,
}

impl BenchmarkMetrics {
    /// CSV header line.
    pub fn to_csv_header() -> String {
        "scenario,vertex_count,triangle_count,spring_count,timesteps,sim_time_s,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,final_ke,final_elastic,max_displacement,impulse_toggles".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.4},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6e},{:.6},{}",
            self.scenario,
            self.vertex_count,
            self.triangle_count,
            self.spring_count,
            self.timesteps,
            self.sim_time,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.final_kinetic_energy,
            self.final_elastic_energy,
            self.max_displacement,
            self.impulse_toggles,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
