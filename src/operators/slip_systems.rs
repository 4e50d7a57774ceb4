use nalgebra::{Quaternion, Vector3};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::orientation::conversions::quat_to_matrix;
use crate::symmetries::crystal_structure::CrystalStructure;

/// One slip system: unit plane normal and unit slip direction, both in the
/// crystal cartesian frame.
#[derive(Debug, Clone, Copy)]
pub struct SlipSystem {
    pub plane: Vector3<f64>,
    pub direction: Vector3<f64>,
}

impl SlipSystem {
    fn new(plane: Vector3<f64>, direction: Vector3<f64>) -> Self {
        Self {
            plane: plane.normalize(),
            direction: direction.normalize(),
        }
    }
}

/// Schmid factor together with the index of the winning slip system.
///
/// Classes without a slip-system model report the neutral zero result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SchmidFactor {
    pub factor: f64,
    pub slip_system: usize,
}

impl SchmidFactor {
    pub fn neutral() -> Self {
        Self {
            factor: 0.0,
            slip_system: 0,
        }
    }
}

// The 12 octahedral {111}<110> systems, grouped by plane normal. System ids
// follow this table order.
static CUBIC_SLIP_SYSTEMS: Lazy<Vec<SlipSystem>> = Lazy::new(|| {
    vec![
        SlipSystem::new(Vector3::new(1.0, 1.0, 1.0), Vector3::new(0.0, 1.0, -1.0)),
        SlipSystem::new(Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 0.0, -1.0)),
        SlipSystem::new(Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, -1.0, 0.0)),
        SlipSystem::new(Vector3::new(1.0, 1.0, -1.0), Vector3::new(1.0, -1.0, 0.0)),
        SlipSystem::new(Vector3::new(1.0, 1.0, -1.0), Vector3::new(1.0, 0.0, 1.0)),
        SlipSystem::new(Vector3::new(1.0, 1.0, -1.0), Vector3::new(0.0, 1.0, 1.0)),
        SlipSystem::new(Vector3::new(1.0, -1.0, 1.0), Vector3::new(1.0, 1.0, 0.0)),
        SlipSystem::new(Vector3::new(1.0, -1.0, 1.0), Vector3::new(0.0, 1.0, 1.0)),
        SlipSystem::new(Vector3::new(1.0, -1.0, 1.0), Vector3::new(1.0, 0.0, -1.0)),
        SlipSystem::new(Vector3::new(-1.0, 1.0, 1.0), Vector3::new(1.0, 1.0, 0.0)),
        SlipSystem::new(Vector3::new(-1.0, 1.0, 1.0), Vector3::new(1.0, 0.0, 1.0)),
        SlipSystem::new(Vector3::new(-1.0, 1.0, 1.0), Vector3::new(0.0, 1.0, -1.0)),
    ]
});

// Hexagonal basal (0001)<11-20> and prismatic {10-10}<11-20> systems in the
// crystal cartesian frame (a1 along x, c along z).
static HEXAGONAL_SLIP_SYSTEMS: Lazy<Vec<SlipSystem>> = Lazy::new(|| {
    let h3 = 3.0_f64.sqrt() / 2.0;
    let a1 = Vector3::new(1.0, 0.0, 0.0);
    let a2 = Vector3::new(-0.5, h3, 0.0);
    let a3 = Vector3::new(-0.5, -h3, 0.0);
    let c = Vector3::new(0.0, 0.0, 1.0);
    vec![
        SlipSystem::new(c, a1),
        SlipSystem::new(c, a2),
        SlipSystem::new(c, a3),
        // Prism plane normals are the a-directions rotated 90 degrees in the
        // basal plane; each pairs with the a-direction it contains.
        SlipSystem::new(Vector3::new(0.0, 1.0, 0.0), a1),
        SlipSystem::new(Vector3::new(-h3, -0.5, 0.0), a2),
        SlipSystem::new(Vector3::new(h3, -0.5, 0.0), a3),
    ]
});

/// Slip-system table for a crystal class, if one is defined.
///
/// This is the capability flag for every slip/interface-character query:
/// classes returning `None` answer those queries with neutral zeros.
pub(crate) fn slip_systems_for(structure: CrystalStructure) -> Option<&'static [SlipSystem]> {
    match structure {
        CrystalStructure::CubicHigh => Some(&CUBIC_SLIP_SYSTEMS),
        CrystalStructure::HexagonalHigh => Some(&HEXAGONAL_SLIP_SYSTEMS),
        _ => None,
    }
}

/// Maximum Schmid factor over a slip-system table for a crystal-frame load
/// direction. Ties keep the first system in table order.
pub(crate) fn schmid_factor(systems: &[SlipSystem], load_crystal: &Vector3<f64>) -> SchmidFactor {
    let mag = load_crystal.norm();
    if mag == 0.0 {
        return SchmidFactor::neutral();
    }
    let mut best = SchmidFactor::neutral();
    for (i, system) in systems.iter().enumerate() {
        let plane_component = (load_crystal.dot(&system.plane) / mag).abs();
        let direction_component = (load_crystal.dot(&system.direction) / mag).abs();
        let factor = plane_component * direction_component;
        if factor > best.factor {
            best = SchmidFactor {
                factor,
                slip_system: i,
            };
        }
    }
    best
}

/// Luster-Morris slip transmission parameter m' between two neighboring
/// orientations under a sample-frame load direction.
///
/// For each grain the most favorably oriented system is selected; m' is the
/// product of the plane-normal and slip-direction alignments of those two
/// systems, both expressed in the sample frame.
pub(crate) fn m_prime(
    systems: &[SlipSystem],
    q1: &Quaternion<f64>,
    q2: &Quaternion<f64>,
    load: &Vector3<f64>,
) -> f64 {
    let g1 = quat_to_matrix(q1);
    let g2 = quat_to_matrix(q2);
    let ss1 = schmid_factor(systems, &(g1 * load)).slip_system;
    let ss2 = schmid_factor(systems, &(g2 * load)).slip_system;
    let n1 = g1.transpose() * systems[ss1].plane;
    let n2 = g2.transpose() * systems[ss2].plane;
    let d1 = g1.transpose() * systems[ss1].direction;
    let d2 = g2.transpose() * systems[ss2].direction;
    n1.dot(&n2).abs() * d1.dot(&d2).abs()
}
