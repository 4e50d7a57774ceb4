use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use anyhow::Error;

/// The Laue crystal classes handled by the symmetry registry.
///
/// `Unknown` is a sentinel for unindexed or unsupported phases; every table
/// lookup rejects it before any computation is attempted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CrystalStructure {
    HexagonalHigh,
    CubicHigh,
    HexagonalLow,
    CubicLow,
    Triclinic,
    Monoclinic,
    Orthorhombic,
    TetragonalLow,
    TetragonalHigh,
    TrigonalLow,
    TrigonalHigh,
    Unknown,
}

impl CrystalStructure {
    /// All classes with defined symmetry tables, in registry order.
    pub const ALL_KNOWN: [CrystalStructure; 11] = [
        CrystalStructure::HexagonalHigh,
        CrystalStructure::CubicHigh,
        CrystalStructure::HexagonalLow,
        CrystalStructure::CubicLow,
        CrystalStructure::Triclinic,
        CrystalStructure::Monoclinic,
        CrystalStructure::Orthorhombic,
        CrystalStructure::TetragonalLow,
        CrystalStructure::TetragonalHigh,
        CrystalStructure::TrigonalLow,
        CrystalStructure::TrigonalHigh,
    ];

    /// Whether this identifier has symmetry tables
    pub fn is_known(&self) -> bool {
        !matches!(self, CrystalStructure::Unknown)
    }

    pub(crate) fn reject_unknown(&self) -> crate::Result<()> {
        if self.is_known() {
            Ok(())
        } else {
            Err(Error::msg(
                "Unknown crystal structure: no symmetry table is defined for this phase.",
            ))
        }
    }
}

impl fmt::Display for CrystalStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CrystalStructure::HexagonalHigh => "Hexagonal (6/mmm)",
            CrystalStructure::CubicHigh => "Cubic (m-3m)",
            CrystalStructure::HexagonalLow => "Hexagonal (6/m)",
            CrystalStructure::CubicLow => "Cubic (m-3)",
            CrystalStructure::Triclinic => "Triclinic (-1)",
            CrystalStructure::Monoclinic => "Monoclinic (2/m)",
            CrystalStructure::Orthorhombic => "Orthorhombic (mmm)",
            CrystalStructure::TetragonalLow => "Tetragonal (4/m)",
            CrystalStructure::TetragonalHigh => "Tetragonal (4/mmm)",
            CrystalStructure::TrigonalLow => "Trigonal (-3)",
            CrystalStructure::TrigonalHigh => "Trigonal (-3m)",
            CrystalStructure::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CrystalStructure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hexagonal" | "hexagonal-high" => Ok(CrystalStructure::HexagonalHigh),
            "hexagonal-low" => Ok(CrystalStructure::HexagonalLow),
            "cubic" | "cubic-high" => Ok(CrystalStructure::CubicHigh),
            "cubic-low" => Ok(CrystalStructure::CubicLow),
            "triclinic" => Ok(CrystalStructure::Triclinic),
            "monoclinic" => Ok(CrystalStructure::Monoclinic),
            "orthorhombic" => Ok(CrystalStructure::Orthorhombic),
            "tetragonal" | "tetragonal-high" => Ok(CrystalStructure::TetragonalHigh),
            "tetragonal-low" => Ok(CrystalStructure::TetragonalLow),
            "trigonal" | "trigonal-high" => Ok(CrystalStructure::TrigonalHigh),
            "trigonal-low" => Ok(CrystalStructure::TrigonalLow),
            other => Err(Error::msg(format!(
                "Unrecognized crystal structure name: {other}"
            ))),
        }
    }
}
