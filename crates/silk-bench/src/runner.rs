//! Benchmark runner: steps a scenario's grid and collects metrics.

use std::time::Instant;

use silk_debug::hooks::{InspectionHook, NoOpHook};
use silk_solver::DeformableGrid;
use silk_types::SilkResult;

use crate::clock::FrameClock;
use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind, StepTiming};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    pub fn run(scenario: &Scenario) -> SilkResult<BenchmarkMetrics> {
        Self::run_with_hook(scenario, &mut NoOpHook)
    }

    /// Run a single scenario, calling `hook` around every step.
    pub fn run_with_hook(
        scenario: &Scenario,
        hook: &mut dyn InspectionHook,
    ) -> SilkResult<BenchmarkMetrics> {
        let mut grid = DeformableGrid::from_config(&scenario.config)?;
        let initial = grid.positions();
        let mut clock = FrameClock::new();

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.timesteps as usize);
        let mut impulse_toggles = 0u32;

        tracing::info!(
            scenario = scenario.kind.name(),
            timesteps = scenario.timesteps,
            "Running benchmark"
        );
        let total_start = Instant::now();

        for _ in 0..scenario.timesteps {
            let dt = match scenario.timing {
                StepTiming::Fixed(dt) => dt,
                StepTiming::WallClock => clock.tick(),
            };

            hook.on_step_begin(grid.step_count() + 1, grid.sim_time(), dt);
            let step_start = Instant::now();
            let report = grid.update(dt)?;
            let wall_time = step_start.elapsed().as_secs_f64();

            if report.impulse_toggled {
                impulse_toggles += 1;
                hook.on_impulse_toggled(report.step, report.impulse.is_on());
            }
            hook.on_step_end(&grid, &report, wall_time);
            step_times.push(wall_time);
        }
        hook.on_simulation_end();

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let max_displacement = grid
            .positions()
            .iter()
            .zip(&initial)
            .map(|(p, p0)| p.distance(*p0))
            .fold(0.0f32, f32::max);

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().copied().fold(f64::MAX, f64::min)
        };
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        let mesh = grid.mesh();
        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            total_wall_time,
            timesteps: scenario.timesteps,
            sim_time: grid.sim_time(),
            avg_step_time: avg_step,
            min_step_time: min_step,
            max_step_time: max_step,
            final_kinetic_energy: grid.kinetic_energy(),
            final_elastic_energy: grid.elastic_energy(),
            max_displacement,
            impulse_toggles,
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            spring_count: grid.spring_count(),
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> SilkResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}
