use nalgebra::{Matrix3, Quaternion, Vector3};
use std::f64::consts::PI;

use crate::config::{AXIS_TOLERANCE, HOMOCHORIC_NEWTON_MAX_ITER, HOMOCHORIC_NEWTON_TOLERANCE};
use crate::orientation::representations::{AxisAngle, Euler, HomochoricVector, RodriguesVector};

// Rotation convention: quaternions and matrices are passive crystal->sample
// descriptors built from Bunge ZXZ Euler angles. The stored matrix g maps a
// sample-frame vector into crystal coordinates; g^T maps crystal directions
// (c-axis, pole families) back into the sample frame. Quaternion composition
// is the Hamilton product, so conj(q2) * q1 is the relative orientation used
// by the misorientation search.

/// Clamp a computed cosine into [-1, 1] before inversion.
///
/// Floating round-off can push dot products slightly outside the domain of
/// `acos`; every inversion in this module goes through this clamp.
#[inline]
pub fn clamp_cosine(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Wrap an angle into [0, 2*pi).
#[inline]
fn wrap_two_pi(angle: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let wrapped = angle % two_pi;
    if wrapped < 0.0 {
        wrapped + two_pi
    } else {
        wrapped
    }
}

/// Convert Bunge Euler angles to a unit quaternion.
pub fn euler_to_quat(e: &Euler) -> Quaternion<f64> {
    let s = (0.5 * e.phi).sin();
    let c = (0.5 * e.phi).cos();
    let s1 = (0.5 * (e.phi1 - e.phi2)).sin();
    let c1 = (0.5 * (e.phi1 - e.phi2)).cos();
    let s2 = (0.5 * (e.phi1 + e.phi2)).sin();
    let c2 = (0.5 * (e.phi1 + e.phi2)).cos();
    Quaternion::new(c * c2, s * c1, s * s1, c * s2)
}

/// Convert a unit quaternion to Bunge Euler angles.
pub fn quat_to_euler(q: &Quaternion<f64>) -> Euler {
    let diff = q.j.atan2(q.i);
    let sum = q.k.atan2(q.w);
    let phi1 = wrap_two_pi(diff + sum);
    let phi2 = wrap_two_pi(sum - diff);
    let tmp = clamp_cosine((q.k * q.k + q.w * q.w).sqrt());
    let phi = 2.0 * tmp.acos();
    Euler::new(phi1, phi, phi2)
}

/// Convert Bunge Euler angles to the passive orientation matrix g.
pub fn euler_to_matrix(e: &Euler) -> Matrix3<f64> {
    let (s1, c1) = e.phi1.sin_cos();
    let (s, c) = e.phi.sin_cos();
    let (s2, c2) = e.phi2.sin_cos();
    Matrix3::new(
        c1 * c2 - s1 * s2 * c,
        s1 * c2 + c1 * s2 * c,
        s2 * s,
        -c1 * s2 - s1 * c2 * c,
        -s1 * s2 + c1 * c2 * c,
        c2 * s,
        s1 * s,
        -c1 * s,
        c,
    )
}

/// Convert an orientation matrix back to Bunge Euler angles.
pub fn matrix_to_euler(g: &Matrix3<f64>) -> Euler {
    let phi = clamp_cosine(g[(2, 2)]).acos();
    let s = phi.sin();
    if s.abs() < AXIS_TOLERANCE {
        // Gimbal-degenerate: the rotation is purely about z, so the whole
        // angle is carried by phi1 and phi2 is fixed at zero.
        let phi1 = wrap_two_pi(g[(0, 1)].atan2(g[(0, 0)]));
        return Euler::new(phi1, phi, 0.0);
    }
    let phi1 = wrap_two_pi(g[(2, 0)].atan2(-g[(2, 1)]));
    let phi2 = wrap_two_pi(g[(0, 2)].atan2(g[(1, 2)]));
    Euler::new(phi1, phi, phi2)
}

/// Convert a unit quaternion to the passive orientation matrix g.
pub fn quat_to_matrix(q: &Quaternion<f64>) -> Matrix3<f64> {
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);
    Matrix3::new(
        1.0 - 2.0 * (y * y + z * z),
        2.0 * (x * y + z * w),
        2.0 * (x * z - y * w),
        2.0 * (x * y - z * w),
        1.0 - 2.0 * (x * x + z * z),
        2.0 * (y * z + x * w),
        2.0 * (x * z + y * w),
        2.0 * (y * z - x * w),
        1.0 - 2.0 * (x * x + y * y),
    )
}

/// Convert an orientation matrix to a unit quaternion (w >= 0).
pub fn matrix_to_quat(g: &Matrix3<f64>) -> Quaternion<f64> {
    let trace = g[(0, 0)] + g[(1, 1)] + g[(2, 2)];
    let q = if trace > 0.0 {
        let s = (trace + 1.0).sqrt() * 2.0;
        Quaternion::new(
            0.25 * s,
            (g[(1, 2)] - g[(2, 1)]) / s,
            (g[(2, 0)] - g[(0, 2)]) / s,
            (g[(0, 1)] - g[(1, 0)]) / s,
        )
    } else if g[(0, 0)] > g[(1, 1)] && g[(0, 0)] > g[(2, 2)] {
        let s = (1.0 + g[(0, 0)] - g[(1, 1)] - g[(2, 2)]).sqrt() * 2.0;
        Quaternion::new(
            (g[(1, 2)] - g[(2, 1)]) / s,
            0.25 * s,
            (g[(0, 1)] + g[(1, 0)]) / s,
            (g[(2, 0)] + g[(0, 2)]) / s,
        )
    } else if g[(1, 1)] > g[(2, 2)] {
        let s = (1.0 + g[(1, 1)] - g[(0, 0)] - g[(2, 2)]).sqrt() * 2.0;
        Quaternion::new(
            (g[(2, 0)] - g[(0, 2)]) / s,
            (g[(0, 1)] + g[(1, 0)]) / s,
            0.25 * s,
            (g[(1, 2)] + g[(2, 1)]) / s,
        )
    } else {
        let s = (1.0 + g[(2, 2)] - g[(0, 0)] - g[(1, 1)]).sqrt() * 2.0;
        Quaternion::new(
            (g[(0, 1)] - g[(1, 0)]) / s,
            (g[(2, 0)] + g[(0, 2)]) / s,
            (g[(1, 2)] + g[(2, 1)]) / s,
            0.25 * s,
        )
    };
    if q.w < 0.0 {
        -q
    } else {
        q
    }
}

/// Convert a unit quaternion to an axis/angle pair.
///
/// The angle is folded into [0, pi] (axis-antipodal convention); a degenerate
/// rotation yields the default axis (0, 0, 1).
pub fn quat_to_axis_angle(q: &Quaternion<f64>) -> AxisAngle {
    let w = clamp_cosine(q.w);
    let mut angle = 2.0 * w.acos();
    if angle > PI {
        angle = 2.0 * PI - angle;
    }
    let denom = (1.0 - w * w).sqrt();
    if denom < AXIS_TOLERANCE || angle < AXIS_TOLERANCE {
        return AxisAngle::new(Vector3::new(0.0, 0.0, 1.0), angle);
    }
    AxisAngle::new(Vector3::new(q.i, q.j, q.k) / denom, angle)
}

/// Convert an axis/angle pair to a unit quaternion.
pub fn axis_angle_to_quat(ax: &AxisAngle) -> Quaternion<f64> {
    let half = 0.5 * ax.angle;
    let s = half.sin();
    Quaternion::new(half.cos(), s * ax.axis.x, s * ax.axis.y, s * ax.axis.z)
}

/// Convert an axis/angle pair to a Rodrigues vector.
///
/// Undefined at angle = pi (tan blows up); callers that can see half-turn
/// rotations must go through the symmetry tables, which cap the magnitude.
pub fn axis_angle_to_rodrigues(ax: &AxisAngle) -> RodriguesVector {
    ax.axis * (0.5 * ax.angle).tan()
}

/// Convert a Rodrigues vector to an axis/angle pair.
pub fn rodrigues_to_axis_angle(r: &RodriguesVector) -> AxisAngle {
    let rmag = r.norm();
    if rmag < AXIS_TOLERANCE {
        return AxisAngle::identity();
    }
    AxisAngle::new(r / rmag, 2.0 * rmag.atan())
}

/// Convert a unit quaternion to a Rodrigues vector.
///
/// Computed as (x, y, z) scaled by tan(acos(w)), i.e. the vector part over the
/// scalar part, so the result agrees with `euler_to_rodrigues` for every sign
/// of w.
pub fn quat_to_rodrigues(q: &Quaternion<f64>) -> RodriguesVector {
    let w = clamp_cosine(q.w);
    let angle = 2.0 * w.acos();
    let denom = (1.0 - w * w).sqrt();
    if denom < AXIS_TOLERANCE {
        return Vector3::zeros();
    }
    (Vector3::new(q.i, q.j, q.k) / denom) * (0.5 * angle).tan()
}

/// Convert Bunge Euler angles to a Rodrigues vector.
pub fn euler_to_rodrigues(e: &Euler) -> RodriguesVector {
    let sum = 0.5 * (e.phi1 + e.phi2);
    let diff = 0.5 * (e.phi1 - e.phi2);
    let t2 = (0.5 * e.phi).tan();
    Vector3::new(
        t2 * diff.cos() / sum.cos(),
        t2 * diff.sin() / sum.cos(),
        sum.tan(),
    )
}

/// Convert a Rodrigues vector to Bunge Euler angles.
pub fn rodrigues_to_euler(r: &RodriguesVector) -> Euler {
    let sum = r.z.atan();
    let diff = if r.x == 0.0 && r.y == 0.0 {
        0.0
    } else {
        (r.y / r.x).atan()
    };
    let phi = 2.0 * (r.x * sum.cos() / diff.cos()).atan();
    Euler::new(wrap_two_pi(sum + diff), phi, wrap_two_pi(sum - diff))
}

/// Convert a Rodrigues vector to homochoric coordinates.
pub fn rodrigues_to_homochoric(r: &RodriguesVector) -> HomochoricVector {
    let rmag = r.norm();
    if rmag < AXIS_TOLERANCE {
        return Vector3::zeros();
    }
    let w = 2.0 * rmag.atan();
    let f = (0.75 * (w - w.sin())).cbrt();
    (r / rmag) * f
}

/// Convert homochoric coordinates back to a Rodrigues vector.
///
/// Inverts h = (0.75 * (w - sin w))^(1/3) by Newton iteration; the small-angle
/// expansion gives the initial guess w = 2h.
pub fn homochoric_to_rodrigues(h: &HomochoricVector) -> RodriguesVector {
    let hmag = h.norm();
    if hmag < AXIS_TOLERANCE {
        return Vector3::zeros();
    }
    let target = hmag * hmag * hmag;
    let mut w = 2.0 * hmag;
    for _ in 0..HOMOCHORIC_NEWTON_MAX_ITER {
        let f = 0.75 * (w - w.sin()) - target;
        let fp = 0.75 * (1.0 - w.cos());
        if fp.abs() < f64::EPSILON {
            break;
        }
        let delta = f / fp;
        // Keep the iterate inside [0, pi]; out-of-range magnitudes (grid
        // corners beyond the rotation ball) saturate at the half turn.
        w = (w - delta).clamp(0.0, PI);
        if delta.abs() < HOMOCHORIC_NEWTON_TOLERANCE {
            break;
        }
    }
    (h / hmag) * (0.5 * w).tan()
}
