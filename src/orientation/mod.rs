// Orientation module: Contains rotation representations and conversion functions
// This module provides the pure, stateless representation converter used by every
// symmetry operation in the library

// ======================== MODULE DECLARATIONS ========================
pub mod conversions;
pub mod representations;


// ======================== ROTATION REPRESENTATIONS ========================
pub use representations::{
    AxisAngle,        // struct - unit rotation axis + angle in [0, pi]
    Euler,            // struct - Bunge (phi1, Phi, phi2) Euler angles in radians
    HomochoricVector, // alias - Vector3<f64> in the volume-preserving binning space
    RodriguesVector,  // alias - Vector3<f64>, axis * tan(angle/2)
};

// ======================== CONVERSION FUNCTIONS ========================
pub use conversions::{
    axis_angle_to_quat,      // fn(&AxisAngle) -> Quaternion<f64>
    axis_angle_to_rodrigues, // fn(&AxisAngle) -> RodriguesVector
    clamp_cosine,            // fn(f64) -> f64 - clamp acos arguments into [-1, 1]
    euler_to_matrix,         // fn(&Euler) -> Matrix3<f64> - passive crystal->sample matrix
    euler_to_quat,           // fn(&Euler) -> Quaternion<f64>
    euler_to_rodrigues,      // fn(&Euler) -> RodriguesVector
    homochoric_to_rodrigues, // fn(&HomochoricVector) -> RodriguesVector - Newton inversion
    matrix_to_euler,         // fn(&Matrix3<f64>) -> Euler
    matrix_to_quat,          // fn(&Matrix3<f64>) -> Quaternion<f64> - w >= 0 branch method
    quat_to_axis_angle,      // fn(&Quaternion<f64>) -> AxisAngle - angle folded into [0, pi]
    quat_to_euler,           // fn(&Quaternion<f64>) -> Euler
    quat_to_matrix,          // fn(&Quaternion<f64>) -> Matrix3<f64>
    quat_to_rodrigues,       // fn(&Quaternion<f64>) -> RodriguesVector
    rodrigues_to_axis_angle, // fn(&RodriguesVector) -> AxisAngle
    rodrigues_to_euler,      // fn(&RodriguesVector) -> Euler
    rodrigues_to_homochoric, // fn(&RodriguesVector) -> HomochoricVector
};
