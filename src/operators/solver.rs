use nalgebra::{Quaternion, Vector3};
use std::f64::consts::PI;

use crate::orientation::conversions::{clamp_cosine, quat_to_axis_angle};
use crate::orientation::representations::AxisAngle;
use crate::symmetries::tables::FundamentalZoneSpec;

// The shared symmetry-equivalence searches. Every crystal class runs the same
// loops; only the operator table (and its length) differs. Ties are broken by
// table order: strict-less comparisons keep the first operator that achieves
// the minimum.

/// Minimal disorientation between two orientations under a symmetry group.
pub fn minimal_misorientation(
    sym: &[Quaternion<f64>],
    q1: &Quaternion<f64>,
    q2: &Quaternion<f64>,
) -> AxisAngle {
    let qr = q2.conjugate() * q1;
    let mut wmin = f64::MAX;
    let mut nmin = Vector3::zeros();
    for s in sym {
        let qc = qr * s;
        let qc = Quaternion::new(clamp_cosine(qc.w), qc.i, qc.j, qc.k);
        let ax = quat_to_axis_angle(&qc);
        let mut w = ax.angle;
        if w > PI {
            w = 2.0 * PI - w;
        }
        if w < wmin {
            wmin = w;
            nmin = ax.axis;
        }
    }
    let denom = nmin.norm();
    if denom == 0.0 || wmin == 0.0 {
        return AxisAngle::new(Vector3::new(0.0, 0.0, 1.0), wmin);
    }
    AxisAngle::new(nmin / denom, wmin)
}

/// Fold a Rodrigues vector to its symmetry-equivalent of smallest magnitude.
///
/// Each operator is composed with the input via the Rodrigues composition
/// rc = (r + s + r x s) / (1 - r . s); an operator whose composition is
/// singular (denominator 0) yields non-finite components and is skipped by
/// the NaN-rejecting comparison.
pub fn rod_nearest_origin(sym_rod: &[Vector3<f64>], r: &Vector3<f64>) -> Vector3<f64> {
    let mut smallest = f64::MAX;
    let mut best = *r;
    for s in sym_rod {
        let denom = 1.0 - r.dot(s);
        let rc = (r + s + r.cross(s)) / denom;
        let dist = rc.norm_squared();
        if dist < smallest {
            smallest = dist;
            best = rc;
        }
    }
    best
}

/// Of all symmetry-equivalent variants of `q`, return the one closest to
/// `q_ref` (used to keep running texture averages numerically stable).
pub fn nearest_quat(
    sym: &[Quaternion<f64>],
    q_ref: &Quaternion<f64>,
    q: &Quaternion<f64>,
) -> Quaternion<f64> {
    let mut smallest = f64::MAX;
    let mut best = *q;
    for s in sym {
        let mut qc = q * s;
        if qc.w < 0.0 {
            qc = -qc;
        }
        let dist = 1.0 - qc.dot(q_ref);
        if dist < smallest {
            smallest = dist;
            best = qc;
        }
    }
    best
}

/// Fold a quaternion to the symmetry-equivalent variant nearest the identity.
pub fn quat_nearest_origin(sym: &[Quaternion<f64>], q: &Quaternion<f64>) -> Quaternion<f64> {
    let mut smallest = f64::MAX;
    let mut best = *q;
    for s in sym {
        let qc = q * s;
        let dist = 1.0 - qc.w.abs();
        if dist < smallest {
            smallest = dist;
            best = qc;
        }
    }
    if best.w < 0.0 {
        best = -best;
    }
    best
}

fn quantize(value: f64, step: f64, bins: usize) -> usize {
    let b = (value / step) as i64;
    b.clamp(0, bins as i64 - 1) as usize
}

/// Quantize a homochoric vector into the class's ODF grid and return the
/// linear bin index in [0, total_bins).
pub fn odf_bin_index(zone: &FundamentalZoneSpec, h: &Vector3<f64>) -> usize {
    let b0 = quantize(h.x + zone.dim[0], zone.step[0], zone.bins[0]);
    let b1 = quantize(h.y + zone.dim[1], zone.step[1], zone.bins[1]);
    let b2 = quantize(h.z + zone.dim[2], zone.step[2], zone.bins[2]);
    b0 + b1 * zone.bins[0] + b2 * zone.bins[0] * zone.bins[1]
}

/// Quantize a misorientation homochoric vector into the MDF grid.
pub fn mdf_bin_index(zone: &FundamentalZoneSpec, h: &Vector3<f64>) -> usize {
    let b0 = quantize((h.x + zone.dim[0]).abs(), zone.step[0], zone.bins[0]);
    let b1 = quantize((h.y + zone.dim[1]).abs(), zone.step[1], zone.bins[1]);
    let b2 = quantize((h.z + zone.dim[2]).abs(), zone.step[2], zone.bins[2]);
    b0 + b1 * zone.bins[0] + b2 * zone.bins[0] * zone.bins[1]
}
