// Operators module: Contains the per-crystal-class orientation operator and the
// shared symmetry-equivalence search algorithms it dispatches to

// ======================== MODULE DECLARATIONS ========================
pub mod operator;
pub mod pole_figure;
pub mod slip_systems;
pub mod solver;

// Test modules
mod _tests_operator;

// ======================== CRYSTAL CLASS OPERATOR ========================
pub use operator::OrientationOperator; // struct - class-bound handle over the shared solver
// OrientationOperator impl methods:
//   new(structure: CrystalStructure) -> Result<Self>                    - binds tables, rejects Unknown
//   misorientation(&self, q1, q2) -> AxisAngle                          - minimal disorientation, angle in [0, pi]
//   fundamental_zone_rodrigues(&self, r) -> RodriguesVector             - ODF fold nearest the origin
//   fundamental_zone_misorientation_rodrigues(&self, r) -> RodriguesVector - MDF fold + axis-angle round trip
//   nearest_symmetric_quat(&self, q_ref, q) -> Quaternion<f64>          - equivalent of q closest to q_ref
//   fundamental_zone_quat(&self, q) -> Quaternion<f64>                  - fold quaternion into the zone
//   odf_bin(&self, r) / mdf_bin(&self, r) -> usize                      - histogram bin in [0, bin_count)
//   bin_rodrigues(&self, bin) / bin_euler_angles(&self, bin)            - bin-center representative orientation
//   schmid_factor(&self, load, q) -> SchmidFactor                       - neutral zero without a slip model
//   m_prime(&self, q1, q2, load) -> f64                                 - slip transmission parameter
//   generate_sphere_coords(&self, eulers) -> PoleFigureCoords           - batch pole-figure transform

// ======================== SHARED SEARCH ALGORITHMS ========================
pub use solver::{
    mdf_bin_index,          // fn(&FundamentalZoneSpec, &Vector3<f64>) -> usize
    minimal_misorientation, // fn(&[Quaternion<f64>], &q1, &q2) -> AxisAngle
    nearest_quat,           // fn(&[Quaternion<f64>], &q_ref, &q) -> Quaternion<f64>
    odf_bin_index,          // fn(&FundamentalZoneSpec, &Vector3<f64>) -> usize
    quat_nearest_origin,    // fn(&[Quaternion<f64>], &q) -> Quaternion<f64>
    rod_nearest_origin,     // fn(&[Vector3<f64>], &r) -> Vector3<f64>
};

// ======================== SLIP SYSTEMS & POLE FIGURES ========================
pub use pole_figure::PoleFigureCoords; // struct - per-family sample-frame direction batches
pub use slip_systems::{SchmidFactor, SlipSystem};
