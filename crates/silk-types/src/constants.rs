//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²), signed along +Y.
pub const GRAVITY: f32 = -9.81;

/// Default simulation timestep (seconds). Also used for the first frame,
/// whose measured wall-clock delta is not meaningful.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Default number of points along each side of the grid.
pub const DEFAULT_GRID_SIZE: u32 = 10;

/// Default mass of every point (kg).
pub const DEFAULT_POINT_MASS: f32 = 10.0;

/// Default spring constant (N/m).
pub const DEFAULT_SPRING_CONSTANT: f32 = 10.0;

/// Default spring damping coefficient (N·s/m).
pub const DEFAULT_DAMPING: f32 = 20.0;

/// Default spring rest length. Equal to the lattice spacing.
pub const DEFAULT_REST_LENGTH: f32 = 1.0;

/// Default vertical external force applied to every point.
pub const DEFAULT_BUOYANCY: f32 = GRAVITY;

/// Default wind force while the impulse is on.
pub const DEFAULT_WIND: [f32; 3] = [0.0, 0.0, 5.0];

/// Default time the wind impulse stays on (seconds).
pub const DEFAULT_IMPULSE_ON: f32 = 2.0;

/// Default time the wind impulse stays off (seconds).
pub const DEFAULT_IMPULSE_OFF: f32 = 3.0;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;

/// Marker color of a locked (pinned) point.
pub const LOCKED_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Marker color of a free point.
pub const FREE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
