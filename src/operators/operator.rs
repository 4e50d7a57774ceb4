use nalgebra::{Matrix3, Quaternion, Vector3};

use crate::operators::pole_figure::{self, PoleFigureCoords};
use crate::operators::slip_systems::{self, SchmidFactor, SlipSystem};
use crate::operators::solver;
use crate::orientation::conversions::{
    axis_angle_to_rodrigues, homochoric_to_rodrigues, quat_to_matrix, rodrigues_to_axis_angle,
    rodrigues_to_euler, rodrigues_to_homochoric,
};
use crate::orientation::representations::{AxisAngle, Euler, RodriguesVector};
use crate::symmetries::crystal_structure::CrystalStructure;
use crate::symmetries::tables::{fundamental_zone, symmetry_table, FundamentalZoneSpec, SymmetryTable};

/// Orientation operator bound to a single crystal class.
///
/// A thin binding of the shared solver to one class's symmetry table and
/// fundamental-zone grid. Construction fails fast for the `Unknown` sentinel;
/// a constructed operator is `Copy`, carries no mutable state and may be
/// shared freely across threads (one per phase in a dataset is typical).
#[derive(Debug, Clone, Copy)]
pub struct OrientationOperator {
    structure: CrystalStructure,
    table: &'static SymmetryTable,
    zone: &'static FundamentalZoneSpec,
    slip: Option<&'static [SlipSystem]>,
}

impl OrientationOperator {
    /// Bind an operator to a crystal class; rejects `Unknown`.
    pub fn new(structure: CrystalStructure) -> crate::Result<Self> {
        let table = symmetry_table(structure)?;
        let zone = fundamental_zone(structure)?;
        Ok(Self {
            structure,
            table,
            zone,
            slip: slip_systems::slip_systems_for(structure),
        })
    }

    pub fn crystal_structure(&self) -> CrystalStructure {
        self.structure
    }

    /// Number of symmetry operators for this class
    pub fn symmetry_op_count(&self) -> usize {
        self.table.len()
    }

    pub fn quat_sym_op(&self, i: usize) -> Quaternion<f64> {
        self.table.quat_ops[i]
    }

    pub fn rod_sym_op(&self, i: usize) -> Vector3<f64> {
        self.table.rod_ops[i]
    }

    pub fn mat_sym_op(&self, i: usize) -> Matrix3<f64> {
        self.table.mat_ops[i]
    }

    /// Fundamental-zone grid bound to this class
    pub fn zone_spec(&self) -> &'static FundamentalZoneSpec {
        self.zone
    }

    /// Total number of ODF/MDF histogram bins for this class
    pub fn bin_count(&self) -> usize {
        self.zone.total_bins()
    }

    /// Minimal disorientation angle and axis between two orientations.
    ///
    /// The angle is always in [0, pi]; swapping q1 and q2 yields the same
    /// angle with a possibly antipodal axis.
    pub fn misorientation(&self, q1: &Quaternion<f64>, q2: &Quaternion<f64>) -> AxisAngle {
        solver::minimal_misorientation(&self.table.quat_ops, q1, q2)
    }

    /// Fold a Rodrigues vector into the fundamental zone nearest the origin.
    pub fn fundamental_zone_rodrigues(&self, r: &RodriguesVector) -> RodriguesVector {
        solver::rod_nearest_origin(&self.table.rod_ops, r)
    }

    /// Fold a misorientation (MDF) Rodrigues vector into the fundamental
    /// zone, normalizing the representation through an axis-angle round trip.
    pub fn fundamental_zone_misorientation_rodrigues(&self, r: &RodriguesVector) -> RodriguesVector {
        let folded = solver::rod_nearest_origin(&self.table.rod_ops, r);
        axis_angle_to_rodrigues(&rodrigues_to_axis_angle(&folded))
    }

    /// Of all symmetry-equivalent variants of `q`, the one closest to `q_ref`.
    pub fn nearest_symmetric_quat(
        &self,
        q_ref: &Quaternion<f64>,
        q: &Quaternion<f64>,
    ) -> Quaternion<f64> {
        solver::nearest_quat(&self.table.quat_ops, q_ref, q)
    }

    /// Fold a quaternion into this class's fundamental zone.
    pub fn fundamental_zone_quat(&self, q: &Quaternion<f64>) -> Quaternion<f64> {
        solver::quat_nearest_origin(&self.table.quat_ops, q)
    }

    /// ODF bin index of a Rodrigues vector: fold into the fundamental zone,
    /// map to homochoric coordinates, quantize on this class's grid.
    pub fn odf_bin(&self, r: &RodriguesVector) -> usize {
        let folded = self.fundamental_zone_rodrigues(r);
        let h = rodrigues_to_homochoric(&folded);
        solver::odf_bin_index(self.zone, &h)
    }

    /// MDF bin index of a misorientation Rodrigues vector.
    pub fn mdf_bin(&self, r: &RodriguesVector) -> usize {
        let folded = self.fundamental_zone_misorientation_rodrigues(r);
        let h = rodrigues_to_homochoric(&folded);
        solver::mdf_bin_index(self.zone, &h)
    }

    // Decode a linear bin index into per-axis indices, then take the
    // homochoric center of that cell.
    fn bin_center_homochoric(&self, bin: usize) -> Vector3<f64> {
        let b0 = bin % self.zone.bins[0];
        let b1 = (bin / self.zone.bins[0]) % self.zone.bins[1];
        let b2 = bin / (self.zone.bins[0] * self.zone.bins[1]);
        Vector3::new(
            self.zone.step[0] * (b0 as f64 + 0.5) - self.zone.dim[0],
            self.zone.step[1] * (b1 as f64 + 0.5) - self.zone.dim[1],
            self.zone.step[2] * (b2 as f64 + 0.5) - self.zone.dim[2],
        )
    }

    /// Representative (bin-center) misorientation Rodrigues vector for an MDF
    /// bin index.
    pub fn bin_rodrigues(&self, bin: usize) -> RodriguesVector {
        let h = self.bin_center_homochoric(bin);
        let r = homochoric_to_rodrigues(&h);
        self.fundamental_zone_misorientation_rodrigues(&r)
    }

    /// Representative (bin-center) Euler angles for an ODF bin index.
    pub fn bin_euler_angles(&self, bin: usize) -> Euler {
        let h = self.bin_center_homochoric(bin);
        let r = homochoric_to_rodrigues(&h);
        let folded = self.fundamental_zone_rodrigues(&r);
        rodrigues_to_euler(&folded)
    }

    /// Maximum Schmid factor and winning slip system for a sample-frame load
    /// direction acting on orientation `q`.
    ///
    /// Classes without a slip-system model return the neutral zero result so
    /// callers can iterate over all phases uniformly.
    pub fn schmid_factor(&self, load: &Vector3<f64>, q: &Quaternion<f64>) -> SchmidFactor {
        match self.slip {
            Some(systems) => slip_systems::schmid_factor(systems, &(quat_to_matrix(q) * load)),
            None => SchmidFactor::neutral(),
        }
    }

    /// Slip transmission parameter m' across a boundary between orientations
    /// q1 and q2 under a sample-frame load direction; zero for classes
    /// without a slip-system model.
    pub fn m_prime(&self, q1: &Quaternion<f64>, q2: &Quaternion<f64>, load: &Vector3<f64>) -> f64 {
        match self.slip {
            Some(systems) => slip_systems::m_prime(systems, q1, q2, load),
            None => 0.0,
        }
    }

    /// Batch-transform Euler triples into sample-frame pole-figure direction
    /// families for this class.
    pub fn generate_sphere_coords(&self, eulers: &[Euler]) -> PoleFigureCoords {
        let families = pole_figure::pole_families_for(self.structure);
        pole_figure::generate_sphere_coords(&families, eulers)
    }
}
