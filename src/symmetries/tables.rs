use nalgebra::{Matrix3, Quaternion, Vector3};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};

use crate::config::ROD_MAX_MAGNITUDE;
use crate::orientation::conversions::{quat_to_matrix, quat_to_rodrigues};
use crate::symmetries::crystal_structure::CrystalStructure;

/// Per-class symmetry operator table.
///
/// The same rotation group is stored redundantly as quaternions, matrices and
/// Rodrigues vectors; the matrix and Rodrigues forms are derived from the
/// quaternion list at initialization so the three stay consistent by
/// construction. Table order is significant: it fixes the reproducible
/// tie-breaking order of every symmetry-equivalence search (first operator
/// achieving a minimum wins).
#[derive(Debug, Clone)]
pub struct SymmetryTable {
    pub quat_ops: Vec<Quaternion<f64>>,
    pub mat_ops: Vec<Matrix3<f64>>,
    pub rod_ops: Vec<Vector3<f64>>,
}

impl SymmetryTable {
    fn from_quat_ops(quat_ops: Vec<Quaternion<f64>>) -> Self {
        let mat_ops = quat_ops.iter().map(quat_to_matrix).collect();
        let rod_ops = quat_ops.iter().map(|q| cap_rod(quat_to_rodrigues(q))).collect();
        Self {
            quat_ops,
            mat_ops,
            rod_ops,
        }
    }

    /// Number of symmetry operators in this class (1 for triclinic up to 24
    /// for high cubic)
    pub fn len(&self) -> usize {
        self.quat_ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quat_ops.is_empty()
    }
}

// Half-turn operators have unbounded Rodrigues magnitude; cap it so the
// nearest-origin composition stays in a safe numeric range.
fn cap_rod(r: Vector3<f64>) -> Vector3<f64> {
    let mag = r.norm();
    if mag > ROD_MAX_MAGNITUDE {
        r * (ROD_MAX_MAGNITUDE / mag)
    } else {
        r
    }
}

/// Discretized homochoric grid bounds for one crystal class.
///
/// `dim` holds the homochoric magnitude of the per-axis maximum rotation
/// angle, the grid spans [-dim, +dim] per axis and `step` is sized so that
/// `bins` cells cover that span.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FundamentalZoneSpec {
    pub dim: [f64; 3],
    pub step: [f64; 3],
    pub bins: [usize; 3],
}

impl FundamentalZoneSpec {
    fn from_max_angles(max_angles: [f64; 3], bins: [usize; 3]) -> Self {
        let mut dim = [0.0; 3];
        let mut step = [0.0; 3];
        for i in 0..3 {
            dim[i] = (0.75 * (max_angles[i] - max_angles[i].sin())).cbrt();
            step[i] = dim[i] / (bins[i] as f64 / 2.0);
        }
        Self { dim, step, bins }
    }

    /// Total number of histogram bins (product over the three axes)
    pub fn total_bins(&self) -> usize {
        self.bins[0] * self.bins[1] * self.bins[2]
    }
}

fn quat(w: f64, x: f64, y: f64, z: f64) -> Quaternion<f64> {
    Quaternion::new(w, x, y, z)
}

// ======================== QUATERNION OPERATOR TABLES ========================
// Listed in the order that defines tie-breaking. h2 = sqrt(2)/2, h3 = sqrt(3)/2.

static TRICLINIC_TABLE: Lazy<SymmetryTable> =
    Lazy::new(|| SymmetryTable::from_quat_ops(vec![quat(1.0, 0.0, 0.0, 0.0)]));

static MONOCLINIC_TABLE: Lazy<SymmetryTable> = Lazy::new(|| {
    SymmetryTable::from_quat_ops(vec![
        quat(1.0, 0.0, 0.0, 0.0),
        quat(0.0, 0.0, 1.0, 0.0), // two-fold about the b axis
    ])
});

static ORTHORHOMBIC_TABLE: Lazy<SymmetryTable> = Lazy::new(|| {
    SymmetryTable::from_quat_ops(vec![
        quat(1.0, 0.0, 0.0, 0.0),
        quat(0.0, 1.0, 0.0, 0.0),
        quat(0.0, 0.0, 1.0, 0.0),
        quat(0.0, 0.0, 0.0, 1.0),
    ])
});

static TETRAGONAL_LOW_TABLE: Lazy<SymmetryTable> = Lazy::new(|| {
    let h2 = std::f64::consts::FRAC_1_SQRT_2;
    SymmetryTable::from_quat_ops(vec![
        quat(1.0, 0.0, 0.0, 0.0),
        quat(h2, 0.0, 0.0, h2),
        quat(0.0, 0.0, 0.0, 1.0),
        quat(h2, 0.0, 0.0, -h2),
    ])
});

static TETRAGONAL_HIGH_TABLE: Lazy<SymmetryTable> = Lazy::new(|| {
    let h2 = std::f64::consts::FRAC_1_SQRT_2;
    SymmetryTable::from_quat_ops(vec![
        quat(1.0, 0.0, 0.0, 0.0),
        quat(h2, 0.0, 0.0, h2),
        quat(0.0, 0.0, 0.0, 1.0),
        quat(h2, 0.0, 0.0, -h2),
        quat(0.0, 1.0, 0.0, 0.0),
        quat(0.0, 0.0, 1.0, 0.0),
        quat(0.0, h2, h2, 0.0),
        quat(0.0, -h2, h2, 0.0),
    ])
});

static TRIGONAL_LOW_TABLE: Lazy<SymmetryTable> = Lazy::new(|| {
    let h3 = 3.0_f64.sqrt() / 2.0;
    SymmetryTable::from_quat_ops(vec![
        quat(1.0, 0.0, 0.0, 0.0),
        quat(0.5, 0.0, 0.0, h3),
        quat(0.5, 0.0, 0.0, -h3),
    ])
});

static TRIGONAL_HIGH_TABLE: Lazy<SymmetryTable> = Lazy::new(|| {
    let h3 = 3.0_f64.sqrt() / 2.0;
    SymmetryTable::from_quat_ops(vec![
        quat(1.0, 0.0, 0.0, 0.0),
        quat(0.5, 0.0, 0.0, h3),
        quat(0.5, 0.0, 0.0, -h3),
        quat(0.0, 1.0, 0.0, 0.0),
        quat(0.0, -0.5, h3, 0.0),
        quat(0.0, -0.5, -h3, 0.0),
    ])
});

static HEXAGONAL_LOW_TABLE: Lazy<SymmetryTable> = Lazy::new(|| {
    let h3 = 3.0_f64.sqrt() / 2.0;
    SymmetryTable::from_quat_ops(vec![
        quat(1.0, 0.0, 0.0, 0.0),
        quat(h3, 0.0, 0.0, 0.5),
        quat(0.5, 0.0, 0.0, h3),
        quat(0.0, 0.0, 0.0, 1.0),
        quat(-0.5, 0.0, 0.0, h3),
        quat(-h3, 0.0, 0.0, 0.5),
    ])
});

static HEXAGONAL_HIGH_TABLE: Lazy<SymmetryTable> = Lazy::new(|| {
    let h3 = 3.0_f64.sqrt() / 2.0;
    SymmetryTable::from_quat_ops(vec![
        quat(1.0, 0.0, 0.0, 0.0),
        quat(h3, 0.0, 0.0, 0.5),
        quat(0.5, 0.0, 0.0, h3),
        quat(0.0, 0.0, 0.0, 1.0),
        quat(-0.5, 0.0, 0.0, h3),
        quat(-h3, 0.0, 0.0, 0.5),
        quat(0.0, 1.0, 0.0, 0.0),
        quat(0.0, h3, 0.5, 0.0),
        quat(0.0, 0.5, h3, 0.0),
        quat(0.0, 0.0, 1.0, 0.0),
        quat(0.0, -0.5, h3, 0.0),
        quat(0.0, -h3, 0.5, 0.0),
    ])
});

static CUBIC_LOW_TABLE: Lazy<SymmetryTable> = Lazy::new(|| {
    SymmetryTable::from_quat_ops(vec![
        quat(1.0, 0.0, 0.0, 0.0),
        quat(0.0, 1.0, 0.0, 0.0),
        quat(0.0, 0.0, 1.0, 0.0),
        quat(0.0, 0.0, 0.0, 1.0),
        quat(0.5, 0.5, 0.5, 0.5),
        quat(0.5, -0.5, -0.5, -0.5),
        quat(0.5, 0.5, -0.5, 0.5),
        quat(0.5, -0.5, 0.5, -0.5),
        quat(0.5, -0.5, 0.5, 0.5),
        quat(0.5, 0.5, -0.5, -0.5),
        quat(0.5, -0.5, -0.5, 0.5),
        quat(0.5, 0.5, 0.5, -0.5),
    ])
});

static CUBIC_HIGH_TABLE: Lazy<SymmetryTable> = Lazy::new(|| {
    let h2 = std::f64::consts::FRAC_1_SQRT_2;
    SymmetryTable::from_quat_ops(vec![
        quat(1.0, 0.0, 0.0, 0.0),
        quat(0.0, 1.0, 0.0, 0.0),
        quat(0.0, 0.0, 1.0, 0.0),
        quat(0.0, 0.0, 0.0, 1.0),
        quat(h2, h2, 0.0, 0.0),
        quat(h2, 0.0, h2, 0.0),
        quat(h2, 0.0, 0.0, h2),
        quat(h2, -h2, 0.0, 0.0),
        quat(h2, 0.0, -h2, 0.0),
        quat(h2, 0.0, 0.0, -h2),
        quat(0.0, h2, h2, 0.0),
        quat(0.0, -h2, h2, 0.0),
        quat(0.0, 0.0, h2, h2),
        quat(0.0, 0.0, -h2, h2),
        quat(0.0, h2, 0.0, h2),
        quat(0.0, -h2, 0.0, h2),
        quat(0.5, 0.5, 0.5, 0.5),
        quat(0.5, -0.5, -0.5, -0.5),
        quat(0.5, 0.5, -0.5, 0.5),
        quat(0.5, -0.5, 0.5, -0.5),
        quat(0.5, -0.5, 0.5, 0.5),
        quat(0.5, 0.5, -0.5, -0.5),
        quat(0.5, -0.5, -0.5, 0.5),
        quat(0.5, 0.5, 0.5, -0.5),
    ])
});

// ======================== FUNDAMENTAL ZONE GRIDS ========================
// Per-axis maximum rotation angles and bin counts; dims follow from the
// homochoric magnitude of those angles.

static TRICLINIC_ZONE: Lazy<FundamentalZoneSpec> =
    Lazy::new(|| FundamentalZoneSpec::from_max_angles([PI, PI, PI], [72, 72, 72]));

static MONOCLINIC_ZONE: Lazy<FundamentalZoneSpec> =
    Lazy::new(|| FundamentalZoneSpec::from_max_angles([PI, FRAC_PI_2, PI], [72, 36, 72]));

static ORTHORHOMBIC_ZONE: Lazy<FundamentalZoneSpec> = Lazy::new(|| {
    FundamentalZoneSpec::from_max_angles([FRAC_PI_2, FRAC_PI_2, FRAC_PI_2], [36, 36, 36])
});

static TETRAGONAL_LOW_ZONE: Lazy<FundamentalZoneSpec> =
    Lazy::new(|| FundamentalZoneSpec::from_max_angles([PI, PI, FRAC_PI_4], [72, 72, 18]));

static TETRAGONAL_HIGH_ZONE: Lazy<FundamentalZoneSpec> = Lazy::new(|| {
    FundamentalZoneSpec::from_max_angles([FRAC_PI_2, FRAC_PI_2, FRAC_PI_4], [36, 36, 18])
});

static TRIGONAL_LOW_ZONE: Lazy<FundamentalZoneSpec> =
    Lazy::new(|| FundamentalZoneSpec::from_max_angles([PI, PI, FRAC_PI_3], [72, 72, 12]));

static TRIGONAL_HIGH_ZONE: Lazy<FundamentalZoneSpec> = Lazy::new(|| {
    FundamentalZoneSpec::from_max_angles([FRAC_PI_2, FRAC_PI_2, FRAC_PI_3], [36, 36, 12])
});

static HEXAGONAL_LOW_ZONE: Lazy<FundamentalZoneSpec> =
    Lazy::new(|| FundamentalZoneSpec::from_max_angles([PI, PI, FRAC_PI_6], [72, 72, 12]));

static HEXAGONAL_HIGH_ZONE: Lazy<FundamentalZoneSpec> =
    Lazy::new(|| FundamentalZoneSpec::from_max_angles([PI, PI, FRAC_PI_6], [72, 72, 12]));

static CUBIC_LOW_ZONE: Lazy<FundamentalZoneSpec> = Lazy::new(|| {
    FundamentalZoneSpec::from_max_angles([FRAC_PI_2, FRAC_PI_2, FRAC_PI_2], [36, 36, 36])
});

static CUBIC_HIGH_ZONE: Lazy<FundamentalZoneSpec> = Lazy::new(|| {
    FundamentalZoneSpec::from_max_angles([FRAC_PI_2, FRAC_PI_2, FRAC_PI_2], [18, 18, 18])
});

// ======================== REGISTRY LOOKUP ========================

/// Look up the symmetry operator table for a crystal class.
///
/// Fails fast for `Unknown` before touching any table.
pub fn symmetry_table(structure: CrystalStructure) -> crate::Result<&'static SymmetryTable> {
    structure.reject_unknown()?;
    Ok(match structure {
        CrystalStructure::HexagonalHigh => &HEXAGONAL_HIGH_TABLE,
        CrystalStructure::CubicHigh => &CUBIC_HIGH_TABLE,
        CrystalStructure::HexagonalLow => &HEXAGONAL_LOW_TABLE,
        CrystalStructure::CubicLow => &CUBIC_LOW_TABLE,
        CrystalStructure::Triclinic => &TRICLINIC_TABLE,
        CrystalStructure::Monoclinic => &MONOCLINIC_TABLE,
        CrystalStructure::Orthorhombic => &ORTHORHOMBIC_TABLE,
        CrystalStructure::TetragonalLow => &TETRAGONAL_LOW_TABLE,
        CrystalStructure::TetragonalHigh => &TETRAGONAL_HIGH_TABLE,
        CrystalStructure::TrigonalLow => &TRIGONAL_LOW_TABLE,
        CrystalStructure::TrigonalHigh => &TRIGONAL_HIGH_TABLE,
        CrystalStructure::Unknown => unreachable!("rejected above"),
    })
}

/// Look up the fundamental-zone histogram grid for a crystal class.
pub fn fundamental_zone(structure: CrystalStructure) -> crate::Result<&'static FundamentalZoneSpec> {
    structure.reject_unknown()?;
    Ok(match structure {
        CrystalStructure::HexagonalHigh => &HEXAGONAL_HIGH_ZONE,
        CrystalStructure::CubicHigh => &CUBIC_HIGH_ZONE,
        CrystalStructure::HexagonalLow => &HEXAGONAL_LOW_ZONE,
        CrystalStructure::CubicLow => &CUBIC_LOW_ZONE,
        CrystalStructure::Triclinic => &TRICLINIC_ZONE,
        CrystalStructure::Monoclinic => &MONOCLINIC_ZONE,
        CrystalStructure::Orthorhombic => &ORTHORHOMBIC_ZONE,
        CrystalStructure::TetragonalLow => &TETRAGONAL_LOW_ZONE,
        CrystalStructure::TetragonalHigh => &TETRAGONAL_HIGH_ZONE,
        CrystalStructure::TrigonalLow => &TRIGONAL_LOW_ZONE,
        CrystalStructure::TrigonalHigh => &TRIGONAL_HIGH_ZONE,
        CrystalStructure::Unknown => unreachable!("rejected above"),
    })
}
