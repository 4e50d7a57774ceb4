// Constants

// Tolerances
pub const AXIS_TOLERANCE: f64 = 1e-10; // Degenerate rotation axis / zero-magnitude detection
pub const ORTHONORMALITY_TOLERANCE: f64 = 1e-8; // For rotation matrix sanity checks

// Rodrigues vectors for 180-degree operators are unbounded; the symmetry tables
// cap their magnitude so compositions stay in a numerically safe range.
pub const ROD_MAX_MAGNITUDE: f64 = 1.0e10;

// Newton iteration settings for the homochoric -> Rodrigues inversion
pub const HOMOCHORIC_NEWTON_TOLERANCE: f64 = 1e-12;
pub const HOMOCHORIC_NEWTON_MAX_ITER: usize = 24;
