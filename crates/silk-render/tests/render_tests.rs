//! Integration tests for silk-render.

use silk_mesh::generators::lattice;
use silk_render::json_exporter::AnimationData;
use silk_render::renderer::{HeadlessRenderer, RenderFrame, Renderer};
use silk_render::JsonFrameExporter;
use silk_solver::DeformableGrid;
use silk_types::constants::{DEFAULT_DT, LOCKED_COLOR};

// ─── HeadlessRenderer Tests ───────────────────────────────────

#[test]
fn headless_init() {
    let mesh = lattice(3);
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&mesh).unwrap();
    assert_eq!(renderer.name(), "headless");
    assert_eq!(renderer.frame_count(), 0);
}

#[test]
fn headless_submit_frames() {
    let mesh = lattice(3);
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&mesh).unwrap();

    let frame = RenderFrame::from_mesh(0, &mesh);
    renderer.submit_frame(&frame).unwrap();
    renderer.submit_frame(&frame).unwrap();
    assert_eq!(renderer.frame_count(), 2);
    renderer.finalize().unwrap();
}

#[test]
fn headless_rejects_mismatched_frame() {
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&lattice(3)).unwrap();
    let frame = RenderFrame::from_mesh(0, &lattice(2));
    assert!(renderer.submit_frame(&frame).is_err());
}

#[test]
fn render_frame_from_mesh() {
    let mesh = lattice(2);
    let frame = RenderFrame::from_mesh(42, &mesh);
    assert_eq!(frame.step, 42);
    assert_eq!(frame.vertex_count(), 4);
    assert_eq!(&frame.positions[..3], &[-1.0, -1.0, -1.0]);
    assert_eq!(&frame.normals[..3], &[0.0, 0.0, 1.0]);
}

// ─── JsonFrameExporter Tests ──────────────────────────────────

#[test]
fn json_exporter_captures_animation() {
    let mut grid = DeformableGrid::new(3, 10.0).unwrap();
    let mut exporter = JsonFrameExporter::new("unused.json");
    exporter.init(grid.mesh()).unwrap();

    for _ in 0..5 {
        let report = grid.update(DEFAULT_DT).unwrap();
        exporter
            .submit_frame(&RenderFrame::from_mesh(report.step, grid.mesh()))
            .unwrap();
    }
    assert_eq!(exporter.frame_count(), 5);

    let json = exporter.to_json_string().unwrap();
    let data: AnimationData = serde_json::from_str(&json).unwrap();
    assert_eq!(data.vertex_count, 9);
    assert_eq!(data.triangle_count, 8);
    assert_eq!(data.uvs.len(), 18);
    assert_eq!(data.colors[8], LOCKED_COLOR);
    assert_eq!(data.frames.len(), 5);
    assert_eq!(data.frames[4].timestep, 5);
    assert_eq!(data.frames[4].positions.len(), 27);
}

#[test]
fn json_exporter_writes_file() {
    let path = std::env::temp_dir().join(format!("silk_render_{}.json", std::process::id()));
    let mut exporter = JsonFrameExporter::new(&path);
    let mesh = lattice(2);
    exporter.init(&mesh).unwrap();
    exporter.submit_frame(&RenderFrame::from_mesh(1, &mesh)).unwrap();
    exporter.finalize().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let data: AnimationData = serde_json::from_str(&text).unwrap();
    assert_eq!(data.frames.len(), 1);
    std::fs::remove_file(&path).unwrap();
}
