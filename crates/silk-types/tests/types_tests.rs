//! Integration tests for silk-types.

use silk_types::constants::{DEFAULT_DT, DEFAULT_POINT_MASS, GRAVITY};
use silk_types::{PointId, SilkError, SpringId};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn point_id_index() {
    let id = PointId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn spring_id_index() {
    let id = SpringId::from(7);
    assert_eq!(id.index(), 7);
}

#[test]
fn ids_are_serializable() {
    let id = PointId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: PointId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn invalid_mass_display() {
    let err = SilkError::InvalidMass(-1.0);
    assert!(err.to_string().contains("-1"));
}

#[test]
fn out_of_bounds_display() {
    let err = SilkError::PointOutOfBounds { index: 12, count: 9 };
    let msg = err.to_string();
    assert!(msg.contains("12"));
    assert!(msg.contains("9"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: SilkError = io.into();
    assert!(matches!(err, SilkError::Io(_)));
}

// ─── Constant Tests ───────────────────────────────────────────

#[test]
fn defaults_are_sane() {
    assert!(GRAVITY < 0.0);
    assert!(DEFAULT_DT > 0.0 && DEFAULT_DT < 1.0);
    assert!(DEFAULT_POINT_MASS > 0.0);
}
