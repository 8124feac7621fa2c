//! Geometry helpers.
//!
//! Degenerate inputs (coincident points, zero-area triangles) produce zero
//! vectors instead of NaN.

use glam::Vec3;
use silk_types::constants::EPSILON;

/// Unit direction from `from` to `to`, together with the distance.
///
/// Returns `(Vec3::ZERO, distance)` when the points (nearly) coincide.
#[inline]
pub fn direction_and_length(from: Vec3, to: Vec3) -> (Vec3, f32) {
    let delta = to - from;
    let length = delta.length();
    if length <= EPSILON {
        (Vec3::ZERO, length)
    } else {
        (delta / length, length)
    }
}

/// Area-weighted face normal of triangle `(a, b, c)`.
///
/// The magnitude equals twice the triangle area; the direction follows the
/// counter-clockwise winding of `a → b → c`.
#[inline]
pub fn weighted_face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a)
}

/// Unit face normal of triangle `(a, b, c)`, zero for degenerate triangles.
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    weighted_face_normal(a, b, c).normalize_or_zero()
}
