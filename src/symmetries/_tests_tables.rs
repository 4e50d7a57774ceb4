#[cfg(test)]
mod _tests_tables {
    use super::super::crystal_structure::CrystalStructure;
    use super::super::tables::{fundamental_zone, symmetry_table};

    const TOL: f64 = 1e-9;

    #[test]
    fn test_operator_counts() {
        let expected = [
            (CrystalStructure::Triclinic, 1),
            (CrystalStructure::Monoclinic, 2),
            (CrystalStructure::Orthorhombic, 4),
            (CrystalStructure::TetragonalLow, 4),
            (CrystalStructure::TetragonalHigh, 8),
            (CrystalStructure::TrigonalLow, 3),
            (CrystalStructure::TrigonalHigh, 6),
            (CrystalStructure::HexagonalLow, 6),
            (CrystalStructure::HexagonalHigh, 12),
            (CrystalStructure::CubicLow, 12),
            (CrystalStructure::CubicHigh, 24),
        ];
        for (structure, count) in expected {
            let table = symmetry_table(structure).unwrap();
            assert_eq!(table.len(), count, "operator count for {}", structure);
            assert_eq!(table.mat_ops.len(), count);
            assert_eq!(table.rod_ops.len(), count);
        }
    }

    #[test]
    fn test_first_operator_is_identity() {
        for structure in CrystalStructure::ALL_KNOWN {
            let table = symmetry_table(structure).unwrap();
            let q = table.quat_ops[0];
            assert!((q.w - 1.0).abs() < TOL && q.i.abs() < TOL && q.j.abs() < TOL && q.k.abs() < TOL);
            assert!(table.rod_ops[0].norm() < TOL);
        }
    }

    #[test]
    fn test_operators_are_unit_quaternions() {
        for structure in CrystalStructure::ALL_KNOWN {
            let table = symmetry_table(structure).unwrap();
            for q in &table.quat_ops {
                assert!((q.norm() - 1.0).abs() < TOL, "non-unit operator in {}", structure);
            }
        }
    }

    #[test]
    fn test_matrix_operators_are_rotations() {
        for structure in CrystalStructure::ALL_KNOWN {
            let table = symmetry_table(structure).unwrap();
            for m in &table.mat_ops {
                assert!(((m * m.transpose()) - nalgebra::Matrix3::identity()).norm() < TOL);
                assert!((m.determinant() - 1.0).abs() < TOL);
            }
        }
    }

    #[test]
    fn test_cubic_high_group_closure() {
        // Composing any two operators must land back on a table operator
        // (up to quaternion sign)
        let table = symmetry_table(CrystalStructure::CubicHigh).unwrap();
        for a in &table.quat_ops {
            for b in &table.quat_ops {
                let c = a * b;
                let found = table.quat_ops.iter().any(|s| {
                    let direct = (c.w - s.w).abs() < TOL
                        && (c.i - s.i).abs() < TOL
                        && (c.j - s.j).abs() < TOL
                        && (c.k - s.k).abs() < TOL;
                    let flipped = (c.w + s.w).abs() < TOL
                        && (c.i + s.i).abs() < TOL
                        && (c.j + s.j).abs() < TOL
                        && (c.k + s.k).abs() < TOL;
                    direct || flipped
                });
                assert!(found, "product {:?} not in the cubic table", c);
            }
        }
    }

    #[test]
    fn test_unknown_structure_is_rejected() {
        assert!(symmetry_table(CrystalStructure::Unknown).is_err());
        assert!(fundamental_zone(CrystalStructure::Unknown).is_err());
    }

    #[test]
    fn test_zone_grid_consistency() {
        for structure in CrystalStructure::ALL_KNOWN {
            let zone = fundamental_zone(structure).unwrap();
            for i in 0..3 {
                assert!(zone.dim[i] > 0.0);
                // bins cells of width step cover the full [-dim, +dim] span
                let span = zone.step[i] * zone.bins[i] as f64;
                assert!((span - 2.0 * zone.dim[i]).abs() < TOL, "grid span for {}", structure);
            }
            assert!(zone.total_bins() > 0);
        }
    }

    #[test]
    fn test_cubic_high_zone_shape() {
        let zone = fundamental_zone(CrystalStructure::CubicHigh).unwrap();
        assert_eq!(zone.bins, [18, 18, 18]);
        assert_eq!(zone.total_bins(), 5832);
        // dim = (0.75 * (pi/2 - 1))^(1/3)
        let expected = (0.75 * (std::f64::consts::FRAC_PI_2 - 1.0)).cbrt();
        assert!((zone.dim[0] - expected).abs() < TOL);
    }

    #[test]
    fn test_half_turn_rodrigues_operators_are_capped() {
        let table = symmetry_table(CrystalStructure::Orthorhombic).unwrap();
        for r in table.rod_ops.iter().skip(1) {
            assert!(r.norm().is_finite());
            assert!(r.norm() <= 1.0e10 * (1.0 + TOL));
            assert!(r.norm() > 1.0e9, "half-turn operator should be near the cap");
        }
    }
}
