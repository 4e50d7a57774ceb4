#[cfg(test)]
mod _tests_operator {
    use super::super::operator::OrientationOperator;
    use crate::orientation::conversions::{axis_angle_to_quat, euler_to_rodrigues};
    use crate::orientation::representations::AxisAngle;
    use crate::symmetries::crystal_structure::CrystalStructure;
    use nalgebra::{Quaternion, Vector3};
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    fn sample_rods() -> Vec<Vector3<f64>> {
        vec![
            Vector3::zeros(),
            Vector3::new(0.1, 0.0, 0.0),
            Vector3::new(0.2, -0.1, 0.3),
            Vector3::new(-0.5, 0.4, 0.2),
            Vector3::new(1.5, -2.0, 0.7),
            Vector3::new(10.0, 10.0, 10.0),
        ]
    }

    #[test]
    fn test_unknown_structure_rejected_before_any_computation() {
        assert!(OrientationOperator::new(CrystalStructure::Unknown).is_err());
    }

    #[test]
    fn test_operator_is_cheap_and_shareable() {
        let a = OrientationOperator::new(CrystalStructure::CubicHigh).unwrap();
        let b = a; // Copy
        assert_eq!(a.symmetry_op_count(), b.symmetry_op_count());
    }

    #[test]
    fn test_fundamental_zone_idempotence() {
        for structure in CrystalStructure::ALL_KNOWN {
            let op = OrientationOperator::new(structure).unwrap();
            for r in sample_rods() {
                let once = op.fundamental_zone_rodrigues(&r);
                let twice = op.fundamental_zone_rodrigues(&once);
                assert!(
                    (twice - once).norm() < TOL,
                    "fold not idempotent for {} on {:?}",
                    structure,
                    r
                );
            }
        }
    }

    #[test]
    fn test_zero_rodrigues_folds_to_zero_for_every_class() {
        for structure in CrystalStructure::ALL_KNOWN {
            let op = OrientationOperator::new(structure).unwrap();
            assert!(op.fundamental_zone_rodrigues(&Vector3::zeros()).norm() < TOL);
            assert!(
                op.fundamental_zone_misorientation_rodrigues(&Vector3::zeros())
                    .norm()
                    < TOL
            );
        }
    }

    #[test]
    fn test_bin_indices_stay_in_bounds() {
        for structure in CrystalStructure::ALL_KNOWN {
            let op = OrientationOperator::new(structure).unwrap();
            let total = op.bin_count();
            for r in sample_rods() {
                assert!(op.odf_bin(&r) < total, "odf bin out of bounds for {}", structure);
                assert!(op.mdf_bin(&r) < total, "mdf bin out of bounds for {}", structure);
            }
        }
    }

    #[test]
    fn test_small_rotation_lands_in_central_bin_for_cubic() {
        // A rotation well inside the first positive cell on each axis; the
        // origin itself sits exactly on a cell edge and is deliberately
        // avoided here.
        let op = OrientationOperator::new(CrystalStructure::CubicHigh).unwrap();
        let expected = 9 + 9 * 18 + 9 * 18 * 18;
        assert_eq!(op.odf_bin(&Vector3::new(0.01, 0.01, 0.01)), expected);
    }

    #[test]
    fn test_bin_round_trip_through_representative_orientation() {
        let op = OrientationOperator::new(CrystalStructure::Triclinic).unwrap();
        for r in [
            Vector3::new(0.1, 0.2, 0.3),
            Vector3::new(-0.4, 0.05, 0.2),
            Vector3::new(0.0, -0.3, -0.1),
        ] {
            let bin = op.odf_bin(&r);
            let euler = op.bin_euler_angles(bin);
            let r_back = euler_to_rodrigues(&euler);
            assert_eq!(
                op.odf_bin(&r_back),
                bin,
                "representative orientation left its own bin"
            );

            let mdf_bin = op.mdf_bin(&r);
            let center = op.bin_rodrigues(mdf_bin);
            assert_eq!(op.mdf_bin(&center), mdf_bin);
        }
    }

    #[test]
    fn test_nearest_symmetric_quat_recovers_reference_variant() {
        let op = OrientationOperator::new(CrystalStructure::CubicHigh).unwrap();
        let q_ref = axis_angle_to_quat(&AxisAngle::new(
            Vector3::new(0.0, 0.0, 1.0),
            1.0_f64.to_radians(),
        ));
        // A symmetry-equivalent variant rotated by the +90 degree z operator
        let q_equiv = q_ref * op.quat_sym_op(6);
        let nearest = op.nearest_symmetric_quat(&q_ref, &q_equiv);
        assert!(
            (nearest.dot(&q_ref).abs() - 1.0).abs() < TOL,
            "nearest variant is not the reference-aligned one"
        );
        assert!(nearest.w >= 0.0);
    }

    #[test]
    fn test_fundamental_zone_quat_maximizes_scalar_part() {
        let op = OrientationOperator::new(CrystalStructure::CubicHigh).unwrap();
        // A 90 degree rotation about z is itself a symmetry operator, so its
        // fundamental-zone representative is the identity.
        let q = axis_angle_to_quat(&AxisAngle::new(Vector3::new(0.0, 0.0, 1.0), 0.5 * PI));
        let folded = op.fundamental_zone_quat(&q);
        assert!(folded.w > 1.0 - 1e-9);
    }

    #[test]
    fn test_misorientation_entry_point_matches_identity_scenario() {
        let op = OrientationOperator::new(CrystalStructure::Triclinic).unwrap();
        let q1 = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let q2 = axis_angle_to_quat(&AxisAngle::new(Vector3::new(0.0, 0.0, 1.0), 0.5 * PI));
        let miso = op.misorientation(&q1, &q2);
        assert!((miso.angle - 0.5 * PI).abs() < TOL);
        assert!((miso.axis.z.abs() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_schmid_factor_neutral_without_slip_model() {
        for structure in [
            CrystalStructure::Triclinic,
            CrystalStructure::Monoclinic,
            CrystalStructure::Orthorhombic,
            CrystalStructure::TetragonalHigh,
            CrystalStructure::TrigonalHigh,
            CrystalStructure::HexagonalLow,
            CrystalStructure::CubicLow,
        ] {
            let op = OrientationOperator::new(structure).unwrap();
            let q = Quaternion::new(1.0, 0.0, 0.0, 0.0);
            let schmid = op.schmid_factor(&Vector3::new(0.0, 0.0, 1.0), &q);
            assert_eq!(schmid.factor, 0.0, "expected neutral result for {}", structure);
            assert_eq!(schmid.slip_system, 0);
            assert_eq!(op.m_prime(&q, &q, &Vector3::new(0.0, 0.0, 1.0)), 0.0);
        }
    }

    #[test]
    fn test_cubic_schmid_factor_for_axial_load() {
        // Identity orientation, load along z: every octahedral plane has
        // |cos phi| = 1/sqrt(3) and the best direction |cos lambda| = 1/sqrt(2)
        let op = OrientationOperator::new(CrystalStructure::CubicHigh).unwrap();
        let q = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let schmid = op.schmid_factor(&Vector3::new(0.0, 0.0, 1.0), &q);
        let expected = 1.0 / (3.0_f64.sqrt() * 2.0_f64.sqrt());
        assert!((schmid.factor - expected).abs() < TOL);
        // The first table system (111)[01-1] already achieves the maximum
        assert_eq!(schmid.slip_system, 0);
    }

    #[test]
    fn test_m_prime_is_one_across_identical_orientations() {
        let op = OrientationOperator::new(CrystalStructure::CubicHigh).unwrap();
        let q = axis_angle_to_quat(&AxisAngle::new(
            Vector3::new(1.0, 1.0, 0.0).normalize(),
            0.3,
        ));
        let m = op.m_prime(&q, &q, &Vector3::new(0.0, 0.0, 1.0));
        assert!((m - 1.0).abs() < TOL);
    }
}
