//! Integration tests for silk-debug.

use silk_debug::hooks::{InspectionHook, NoOpHook, SnapshotRecorder, TelemetryHook};
use silk_debug::snapshot::StateSnapshot;
use silk_math::Vec3;
use silk_solver::{DeformableGrid, Parameter};
use silk_telemetry::EventKind;
use silk_types::constants::DEFAULT_DT;

fn drive(grid: &mut DeformableGrid, hook: &mut dyn InspectionHook, frames: usize, dt: f32) {
    for _ in 0..frames {
        hook.on_step_begin(grid.step_count() + 1, grid.sim_time(), dt);
        let report = grid.update(dt).unwrap();
        if report.impulse_toggled {
            hook.on_impulse_toggled(report.step, report.impulse.is_on());
        }
        hook.on_step_end(grid, &report, 0.0);
    }
}

// ─── Hook Tests ───────────────────────────────────────────────

#[test]
fn telemetry_hook_collects_events() {
    let mut grid = DeformableGrid::new(3, 1.0).unwrap();
    let mut hook = TelemetryHook::new();
    drive(&mut grid, &mut hook, 2, DEFAULT_DT);

    let events = hook.drain_events();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0].step, 1);
    assert!(matches!(events[3].kind, EventKind::StepEnd { .. }));
    assert_eq!(events[3].step, 2);
}

#[test]
fn telemetry_hook_records_toggle_and_energy() {
    let mut grid = DeformableGrid::new(3, 1.0).unwrap();
    grid.set_impulse_on_duration(0.1).unwrap();
    let mut hook = TelemetryHook::new().with_energy();
    drive(&mut grid, &mut hook, 3, 0.06);

    let events = hook.drain_events();
    let toggles: Vec<_> = events
        .iter()
        .filter_map(|e| match e.kind {
            EventKind::ImpulseToggled { active } => Some((e.step, active)),
            _ => None,
        })
        .collect();
    assert_eq!(toggles, vec![(2, false)]);
    assert_eq!(
        events.iter().filter(|e| matches!(e.kind, EventKind::Energy { .. })).count(),
        3
    );
}

#[test]
fn hook_drain_clears() {
    let mut hook = TelemetryHook::new();
    hook.on_step_begin(1, 0.0, DEFAULT_DT);
    hook.on_reset();
    assert_eq!(hook.drain_events().len(), 2);
    assert!(hook.drain_events().is_empty());
}

#[test]
fn hook_names() {
    assert_eq!(TelemetryHook::new().name(), "telemetry_hook");
    assert_eq!(NoOpHook.name(), "noop");
    assert_eq!(SnapshotRecorder::new(1).name(), "snapshot_recorder");
}

#[test]
fn snapshot_recorder_interval() {
    let mut grid = DeformableGrid::new(3, 1.0).unwrap();
    let mut recorder = SnapshotRecorder::new(5);
    drive(&mut grid, &mut recorder, 12, DEFAULT_DT);

    let steps: Vec<u64> = recorder.snapshots().iter().map(|s| s.step).collect();
    assert_eq!(steps, vec![5, 10]);
    assert_eq!(recorder.latest().unwrap().grid_size, 3);
}

#[test]
fn telemetry_hook_records_parameter_change() {
    let mut grid = DeformableGrid::new(3, 1.0).unwrap();
    let mut hook = TelemetryHook::new();
    drive(&mut grid, &mut hook, 2, DEFAULT_DT);
    hook.drain_events();

    grid.set_parameter(Parameter::WindZ, 8.0).unwrap();
    hook.on_parameter_changed(grid.step_count() + 1, Parameter::WindZ.name(), 8.0);
    drive(&mut grid, &mut hook, 1, DEFAULT_DT);

    let events = hook.drain_events();
    assert_eq!(
        events[0].kind,
        EventKind::ParameterChanged { name: "wind_z".into(), value: 8.0 }
    );
    assert_eq!(events[0].step, 3);
    assert_eq!(events[1].step, 3);
    assert_eq!(grid.wind().z, 8.0);
}

// ─── Snapshot Tests ───────────────────────────────────────────

#[test]
fn snapshot_round_trip() {
    let mut grid = DeformableGrid::new(4, 10.0).unwrap();
    for _ in 0..10 {
        grid.update(DEFAULT_DT).unwrap();
    }
    let snap = StateSnapshot::from_grid(&grid);
    let bytes = snap.to_bytes().unwrap();
    let recovered = StateSnapshot::from_bytes(&bytes).unwrap();

    assert_eq!(recovered, snap);
    assert_eq!(recovered.step, 10);
    assert_eq!(recovered.point_count(), 16);
    assert_eq!(recovered.locked.iter().filter(|&&l| l).count(), 4);
    assert_eq!(recovered.position(3), grid.positions()[3]);
}

#[test]
fn snapshot_interleaving() {
    let snap = StateSnapshot::from_points(
        0,
        0.0,
        &[Vec3::new(1.0, 3.0, 5.0), Vec3::new(2.0, 4.0, 6.0)],
        &[Vec3::ZERO; 2],
    )
    .unwrap();
    assert_eq!(snap.positions, vec![1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
    assert_eq!(snap.grid_size, 0);
}

#[test]
fn snapshot_rejects_mismatched_slices() {
    let result = StateSnapshot::from_points(
        0,
        0.0,
        &[Vec3::ZERO, Vec3::X, Vec3::Y],
        &[Vec3::ZERO],
    );
    assert!(result.is_err());
}

#[test]
fn snapshot_rejects_garbage() {
    assert!(StateSnapshot::from_bytes(&[1, 2, 3]).is_err());
}

#[test]
fn snapshot_displacement() {
    let mut grid = DeformableGrid::new(3, 1.0).unwrap();
    let before = StateSnapshot::from_grid(&grid);
    assert_eq!(before.max_displacement(&before).unwrap(), 0.0);
    for _ in 0..30 {
        grid.update(DEFAULT_DT).unwrap();
    }
    let after = StateSnapshot::from_grid(&grid);
    assert!(before.max_displacement(&after).unwrap() > 0.0);

    let other = StateSnapshot::from_grid(&DeformableGrid::new(2, 1.0).unwrap());
    assert!(before.max_displacement(&other).is_err());
}
