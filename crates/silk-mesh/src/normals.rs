//! Vertex normal computation from triangle mesh data.
//!
//! Computes area-weighted vertex normals by accumulating
//! face normals from each adjacent triangle.

use silk_math::geometry::weighted_face_normal;
use silk_math::Vec3;

use crate::mesh::ClothMesh;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's face normal (weighted by its area) is accumulated
/// at each vertex, then normalized. Vertices whose accumulated normal
/// vanishes (isolated or fully degenerate fans) keep a zero normal.
///
/// This modifies the mesh's `normal_x`, `normal_y`, `normal_z` arrays in place.
pub fn compute_vertex_normals(mesh: &mut ClothMesh) {
    let n = mesh.vertex_count();
    let mut accum = vec![Vec3::ZERO; n];

    for t in 0..mesh.triangle_count() {
        let [ia, ib, ic] = mesh.triangle(t);
        let (a, b, c) = (ia as usize, ib as usize, ic as usize);

        let face = weighted_face_normal(
            mesh.position_vec3(a),
            mesh.position_vec3(b),
            mesh.position_vec3(c),
        );

        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }

    for (i, normal) in accum.into_iter().enumerate() {
        let unit = normal.normalize_or_zero();
        mesh.normal_x[i] = unit.x;
        mesh.normal_y[i] = unit.y;
        mesh.normal_z[i] = unit.z;
    }
}
