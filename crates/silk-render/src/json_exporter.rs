//! JSON frame exporter: writes per-frame mesh data for visual inspection.
//!
//! Captures topology once on `init` and positions/normals per frame, then
//! serializes the whole animation on `finalize()`:
//!
//! ```text
//! { vertex_count, triangle_count, indices, uvs, colors,
//!   frames: [ { timestep, positions, normals }, ... ] }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use silk_mesh::ClothMesh;
use silk_types::{SilkError, SilkResult};

use crate::renderer::{RenderFrame, Renderer};

/// A single captured frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameData {
    pub timestep: u64,
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
}

/// Complete animation as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationData {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub indices: Vec<u32>,
    /// Interleaved `[u0, v0, u1, v1, ...]`.
    pub uvs: Vec<f32>,
    pub colors: Vec<[f32; 3]>,
    pub frames: Vec<FrameData>,
}

/// Exports simulation frames to a JSON file.
pub struct JsonFrameExporter {
    output_path: PathBuf,
    data: AnimationData,
}

impl JsonFrameExporter {
    /// Creates an exporter that writes to `output_path` on finalize.
    pub fn new(output_path: impl AsRef<Path>) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
            data: AnimationData {
                vertex_count: 0,
                triangle_count: 0,
                indices: Vec::new(),
                uvs: Vec::new(),
                colors: Vec::new(),
                frames: Vec::new(),
            },
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Everything captured so far.
    pub fn animation(&self) -> &AnimationData {
        &self.data
    }

    pub fn to_json_string(&self) -> SilkResult<String> {
        serde_json::to_string(&self.data)
            .map_err(|e| SilkError::Serialization(format!("JSON serialization failed: {e}")))
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, mesh: &ClothMesh) -> SilkResult<()> {
        mesh.validate()?;
        self.data.vertex_count = mesh.vertex_count();
        self.data.triangle_count = mesh.triangle_count();
        self.data.indices = mesh.indices.clone();
        self.data.uvs = mesh.uvs().iter().flat_map(|uv| uv.to_array()).collect();
        self.data.colors = mesh.colors.clone();
        self.data.frames.clear();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> SilkResult<()> {
        if frame.vertex_count() != self.data.vertex_count {
            return Err(SilkError::InvalidMesh(format!(
                "Frame has {} vertices, exporter was initialized with {}",
                frame.vertex_count(),
                self.data.vertex_count
            )));
        }
        self.data.frames.push(FrameData {
            timestep: frame.step,
            positions: frame.positions.clone(),
            normals: frame.normals.clone(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> SilkResult<()> {
        let json = self.to_json_string()?;
        std::fs::write(&self.output_path, json)?;
        tracing::info!(
            path = %self.output_path.display(),
            frames = self.data.frames.len(),
            "Wrote JSON animation"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> usize {
        self.data.frames.len()
    }
}
