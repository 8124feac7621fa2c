//! Renderer trait and HeadlessRenderer.

use silk_mesh::ClothMesh;
use silk_types::SilkResult;

/// Per-step vertex data handed to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Step this frame corresponds to.
    pub step: u64,
    /// Interleaved positions `[x0, y0, z0, x1, ...]`.
    pub positions: Vec<f32>,
    /// Interleaved unit normals.
    pub normals: Vec<f32>,
}

impl RenderFrame {
    /// Copies the dynamic channels out of a mesh.
    pub fn from_mesh(step: u64, mesh: &ClothMesh) -> Self {
        Self {
            step,
            positions: mesh.interleaved_positions(),
            normals: mesh.interleaved_normals(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Trait for rendering simulation output.
///
/// # Implementations
/// - [`HeadlessRenderer`]: Discards frames (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter): One JSON file per run
pub trait Renderer: Send {
    /// Receives the mesh topology (indices, UVs, marker colors).
    fn init(&mut self, mesh: &ClothMesh) -> SilkResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame) -> SilkResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> SilkResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> usize;
}

/// Headless renderer: discards all frames.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: usize,
    vertex_count: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, mesh: &ClothMesh) -> SilkResult<()> {
        mesh.validate()?;
        self.vertex_count = mesh.vertex_count();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> SilkResult<()> {
        if frame.vertex_count() != self.vertex_count {
            return Err(silk_types::SilkError::InvalidMesh(format!(
                "Frame has {} vertices, mesh has {}",
                frame.vertex_count(),
                self.vertex_count
            )));
        }
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> SilkResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> usize {
        self.frames
    }
}
