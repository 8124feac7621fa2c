//! Lattice mesh generator.
//!
//! Produces the render mesh matching the simulation grid: one vertex per
//! point mass, in the same row-major order, two triangles per cell.

use silk_types::constants::FREE_COLOR;

use crate::mesh::ClothMesh;

/// Generates a flat `grid_size × grid_size` lattice parallel to the XY plane.
///
/// Vertex `i` sits at `(col - n/2, row - n/2, -n/2)` with `row = i / n` and
/// `col = i % n`: unit spacing, with `n/2` subtracted from every axis.
/// Row 0 is the bottom row (lowest Y).
///
/// Each cell with lower-left vertex `i` gets two counter-clockwise
/// triangles (normals facing +Z):
/// ```text
/// i+n ── i+n+1
///  │   ╱   │
///  │  ╱    │
///  i ──── i+1        [i, i+1, i+n+1] and [i, i+n+1, i+n]
/// ```
///
/// # Example
/// ```
/// use silk_mesh::generators::lattice;
/// let mesh = lattice(3);
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn lattice(grid_size: u32) -> ClothMesh {
    let n = grid_size as usize;
    let cells = n.saturating_sub(1);
    let mut mesh = ClothMesh::with_capacity(n * n, cells * cells * 2);

    let half = grid_size as f32 * 0.5;
    // A single point has no extent to spread UVs over.
    let uv_span = cells.max(1) as f32;

    for row in 0..n {
        for col in 0..n {
            mesh.pos_x.push(col as f32 - half);
            mesh.pos_y.push(row as f32 - half);
            mesh.pos_z.push(-half);

            mesh.normal_x.push(0.0);
            mesh.normal_y.push(0.0);
            mesh.normal_z.push(1.0);

            mesh.uv_u.push(col as f32 / uv_span);
            mesh.uv_v.push(row as f32 / uv_span);

            mesh.colors.push(FREE_COLOR);
        }
    }

    for row in 0..cells {
        for col in 0..cells {
            let i = (row * n + col) as u32;
            let right = i + 1;
            let up = i + n as u32;
            let up_right = up + 1;

            mesh.indices.extend_from_slice(&[i, right, up_right]);
            mesh.indices.extend_from_slice(&[i, up_right, up]);
        }
    }

    mesh
}
