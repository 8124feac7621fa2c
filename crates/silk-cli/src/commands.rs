//! CLI command implementations.

use std::path::{Path, PathBuf};
use std::time::Instant;

use silk_bench::clock::FrameClock;
use silk_bench::metrics::BenchmarkMetrics;
use silk_bench::runner::BenchmarkRunner;
use silk_bench::scenarios::{Scenario, ScenarioKind};
use silk_debug::hooks::{InspectionHook, TelemetryHook};
use silk_debug::snapshot::StateSnapshot;
use silk_mesh::ClothMesh;
use silk_render::{HeadlessRenderer, JsonFrameExporter, RenderFrame, Renderer};
use silk_solver::{ClothConfig, DeformableGrid, Parameter};
use silk_telemetry::sinks::TracingSink;
use silk_telemetry::EventBus;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Options for [`simulate`].
pub struct SimulateArgs {
    pub config: Option<PathBuf>,
    pub frames: u32,
    pub dt: Option<f32>,
    pub export: Option<PathBuf>,
    pub snapshot: Option<PathBuf>,
    pub telemetry: bool,
    /// Live edits as `(parameter, value)`, applied before frame `set_at`.
    pub overrides: Vec<(Parameter, f32)>,
    pub set_at: u32,
}

/// Parses a `name=value` edit such as `wind_z=8`.
pub fn parse_override(s: &str) -> Result<(Parameter, f32), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{s}`"))?;
    let parameter = Parameter::from_name(name.trim()).map_err(|e| {
        let available: Vec<&str> = Parameter::all().iter().map(|p| p.name()).collect();
        format!("{e}. Available: {}", available.join(", "))
    })?;
    let value = value
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid value for {parameter}: {e}"))?;
    Ok((parameter, value))
}

fn load_config(path: Option<&Path>) -> Result<ClothConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(ClothConfig::from_toml_str(&content)?)
        }
        None => Ok(ClothConfig::default()),
    }
}

/// Run a headless simulation.
pub fn simulate(args: SimulateArgs) -> CliResult {
    println!("silk Simulation");
    println!("───────────────");

    let config = load_config(args.config.as_deref())?;
    let mut grid = DeformableGrid::from_config(&config)?;
    println!(
        "Grid:    {0}×{0} ({1} points, {2} springs)",
        grid.grid_size(),
        grid.point_count(),
        grid.spring_count()
    );
    println!("Frames:  {}", args.frames);
    match args.dt {
        Some(dt) => println!("Step:    fixed {dt}s"),
        None => println!("Step:    wall clock"),
    }
    println!();

    let mut renderer: Box<dyn Renderer> = match &args.export {
        Some(path) => Box::new(JsonFrameExporter::new(path)),
        None => Box::new(HeadlessRenderer::new()),
    };
    renderer.init(grid.mesh())?;

    let mut hook = TelemetryHook::new().with_energy();
    let mut bus = EventBus::new();
    bus.set_enabled(args.telemetry);
    bus.add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));

    let mut clock = FrameClock::new();
    let start = Instant::now();
    let mut toggles = 0u32;

    for frame in 0..args.frames {
        if frame == args.set_at {
            for &(parameter, value) in &args.overrides {
                grid.set_parameter(parameter, value)?;
                hook.on_parameter_changed(grid.step_count() + 1, parameter.name(), value);
            }
        }
        let dt = args.dt.unwrap_or_else(|| clock.tick());

        hook.on_step_begin(grid.step_count() + 1, grid.sim_time(), dt);
        let step_start = Instant::now();
        let report = grid.update(dt)?;
        let wall_time = step_start.elapsed().as_secs_f64();
        if report.impulse_toggled {
            toggles += 1;
            hook.on_impulse_toggled(report.step, report.impulse.is_on());
        }
        hook.on_step_end(&grid, &report, wall_time);

        for event in hook.drain_events() {
            bus.emit(event);
        }
        bus.flush();

        renderer.submit_frame(&RenderFrame::from_mesh(report.step, grid.mesh()))?;
    }
    hook.on_simulation_end();
    bus.finalize();
    renderer.finalize()?;

    println!("Wall time:      {:.3}s", start.elapsed().as_secs_f64());
    println!("Sim time:       {:.3}s", grid.sim_time());
    println!("Wind toggles:   {toggles}");
    println!("Kinetic:        {:.6e}", grid.kinetic_energy());
    println!("Elastic:        {:.6e}", grid.elastic_energy());
    if let Some(path) = &args.export {
        println!("Frames written: {}", path.display());
    }

    if let Some(path) = &args.snapshot {
        StateSnapshot::from_grid(&grid).write_to(path)?;
        println!("Snapshot:       {}", path.display());
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&Path>) -> CliResult {
    println!("silk Benchmark Suite");
    println!("════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        vec![ScenarioKind::from_name(scenario_name).map_err(|e| {
            let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
            format!("{e}. Available: {}, all", available.join(", "))
        })?]
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);
        let n = scenario.config.grid_size;
        println!("Running: {} ({}×{} grid, {} steps)", kind.name(), n, n, scenario.timesteps);

        let metrics =
            BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}", metrics.max_displacement);
        println!("  Wind toggles:  {}", metrics.impulse_toggles);
        println!();

        all_metrics.push(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {}", path.display());
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &Path) -> CliResult {
    println!("silk Snapshot Inspector");
    println!("───────────────────────");
    println!();

    let snapshot = StateSnapshot::read_from(path)?;
    let n = snapshot.point_count();
    let pinned = snapshot.locked.iter().filter(|&&l| l).count();

    println!("Step:         {}", snapshot.step);
    println!("Sim time:     {:.4}s", snapshot.sim_time);
    println!("Grid size:    {}", snapshot.grid_size);
    println!("Points:       {n} ({pinned} pinned)");
    println!("Wind:         {}", if snapshot.impulse_active { "on" } else { "off" });

    if n > 0 {
        let (min_y, max_y) = (0..n)
            .map(|i| snapshot.position(i).y)
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), y| (lo.min(y), hi.max(y)));
        let max_speed = (0..n)
            .map(|i| snapshot.velocity(i).length())
            .fold(0.0f32, f32::max);
        println!("Y range:      [{min_y:.4}, {max_y:.4}]");
        println!("Max speed:    {max_speed:.4}");
    }

    Ok(())
}

/// Validate a cloth config or mesh.
pub fn validate(path: &Path) -> CliResult {
    println!("silk Validator");
    println!("──────────────");
    println!();

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            println!("Validating config: {}", path.display());
            let content = std::fs::read_to_string(path)?;
            let config = ClothConfig::from_toml_str(&content)?;
            println!(
                "✅ Config is valid ({0}×{0} grid, mass {1}).",
                config.grid_size, config.point_mass
            );
        }
        Some("json") => {
            println!("Validating mesh: {}", path.display());
            let content = std::fs::read_to_string(path)?;
            let mesh: ClothMesh = serde_json::from_str(&content)?;
            match mesh.validate() {
                Ok(()) => println!(
                    "✅ Mesh is valid ({} verts, {} tris).",
                    mesh.vertex_count(),
                    mesh.triangle_count()
                ),
                Err(e) => println!("❌ Mesh validation failed: {e}"),
            }
        }
        _ => println!("Unsupported file format. Use .toml (config) or .json (mesh)."),
    }

    Ok(())
}
