use nalgebra::Vector3;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::orientation::conversions::euler_to_matrix;
use crate::orientation::representations::Euler;
use crate::symmetries::crystal_structure::CrystalStructure;

/// Sample-frame direction vectors for the three canonical pole families of a
/// batch of orientations.
///
/// Each orientation contributes one contiguous block per family; antipodal
/// pairs are stored adjacently (d, -d), so block i of the output corresponds
/// to input orientation i.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoleFigureCoords {
    pub family001: Vec<Vector3<f64>>,
    pub family011: Vec<Vector3<f64>>,
    pub family111: Vec<Vector3<f64>>,
}

pub(crate) struct PoleFamilies {
    pub family001: &'static [Vector3<f64>],
    pub family011: &'static [Vector3<f64>],
    pub family111: &'static [Vector3<f64>],
}

static CUBIC_FAMILY_001: Lazy<Vec<Vector3<f64>>> = Lazy::new(|| {
    vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ]
});

static CUBIC_FAMILY_011: Lazy<Vec<Vector3<f64>>> = Lazy::new(|| {
    let h2 = std::f64::consts::FRAC_1_SQRT_2;
    vec![
        Vector3::new(h2, h2, 0.0),
        Vector3::new(h2, 0.0, h2),
        Vector3::new(0.0, h2, h2),
        Vector3::new(-h2, -h2, 0.0),
        Vector3::new(-h2, 0.0, h2),
        Vector3::new(0.0, -h2, h2),
    ]
});

static CUBIC_FAMILY_111: Lazy<Vec<Vector3<f64>>> = Lazy::new(|| {
    let h3 = 1.0 / 3.0_f64.sqrt();
    vec![
        Vector3::new(h3, h3, h3),
        Vector3::new(-h3, h3, h3),
        Vector3::new(h3, -h3, h3),
        Vector3::new(h3, h3, -h3),
    ]
});

// Hexagonal/trigonal classes: the c-axis [0001], the a-axes <2-1-10> and the
// prism-plane normals <10-10> fill the three family slots.
static HEX_FAMILY_C: Lazy<Vec<Vector3<f64>>> = Lazy::new(|| vec![Vector3::new(0.0, 0.0, 1.0)]);

static HEX_FAMILY_A: Lazy<Vec<Vector3<f64>>> = Lazy::new(|| {
    let h3 = 3.0_f64.sqrt() / 2.0;
    vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(-0.5, h3, 0.0),
        Vector3::new(-0.5, -h3, 0.0),
    ]
});

static HEX_FAMILY_M: Lazy<Vec<Vector3<f64>>> = Lazy::new(|| {
    let h3 = 3.0_f64.sqrt() / 2.0;
    vec![
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(-h3, -0.5, 0.0),
        Vector3::new(h3, -0.5, 0.0),
    ]
});

pub(crate) fn pole_families_for(structure: CrystalStructure) -> PoleFamilies {
    match structure {
        CrystalStructure::HexagonalHigh
        | CrystalStructure::HexagonalLow
        | CrystalStructure::TrigonalHigh
        | CrystalStructure::TrigonalLow => PoleFamilies {
            family001: &HEX_FAMILY_C,
            family011: &HEX_FAMILY_A,
            family111: &HEX_FAMILY_M,
        },
        _ => PoleFamilies {
            family001: &CUBIC_FAMILY_001,
            family011: &CUBIC_FAMILY_011,
            family111: &CUBIC_FAMILY_111,
        },
    }
}

// One orientation's contribution: each family direction rotated into the
// sample frame by the transposed orientation matrix, antipodal pair stored.
type Block = (Vec<Vector3<f64>>, Vec<Vector3<f64>>, Vec<Vector3<f64>>);

fn orientation_block(families: &PoleFamilies, euler: &Euler) -> Block {
    let gt = euler_to_matrix(euler).transpose();
    let expand = |directions: &[Vector3<f64>]| {
        let mut out = Vec::with_capacity(directions.len() * 2);
        for d in directions {
            let v = gt * d;
            out.push(v);
            out.push(-v);
        }
        out
    };
    (
        expand(families.family001),
        expand(families.family011),
        expand(families.family111),
    )
}

/// Batch-transform Euler triples into pole-figure direction families.
///
/// Every orientation is independent, so the batch is processed in parallel
/// when the `parallel` feature is enabled; output order always matches input
/// order.
pub(crate) fn generate_sphere_coords(families: &PoleFamilies, eulers: &[Euler]) -> PoleFigureCoords {
    #[cfg(feature = "parallel")]
    let blocks: Vec<Block> = eulers
        .par_iter()
        .map(|e| orientation_block(families, e))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let blocks: Vec<Block> = eulers
        .iter()
        .map(|e| orientation_block(families, e))
        .collect();

    let mut coords = PoleFigureCoords {
        family001: Vec::with_capacity(eulers.len() * families.family001.len() * 2),
        family011: Vec::with_capacity(eulers.len() * families.family011.len() * 2),
        family111: Vec::with_capacity(eulers.len() * families.family111.len() * 2),
    };
    for (f001, f011, f111) in blocks {
        coords.family001.extend(f001);
        coords.family011.extend(f011);
        coords.family111.extend(f111);
    }
    coords
}
