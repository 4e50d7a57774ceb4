// Symmetries module: Contains crystal-class identifiers and symmetry operator tables
// This module provides the process-wide, read-only registry that parameterizes the
// misorientation and fundamental-zone searches

// ======================== MODULE DECLARATIONS ========================
pub mod crystal_structure;
pub mod tables;

// Test modules
mod _tests_tables;

// ======================== CRYSTAL CLASS IDENTIFIERS ========================
pub use crystal_structure::CrystalStructure; // enum - Laue classes plus the Unknown sentinel

// ======================== SYMMETRY TABLE REGISTRY ========================
pub use tables::{
    fundamental_zone,    // fn(CrystalStructure) -> Result<&'static FundamentalZoneSpec>
    symmetry_table,      // fn(CrystalStructure) -> Result<&'static SymmetryTable>
    FundamentalZoneSpec, // struct - homochoric grid dims/steps/bins for one class
    SymmetryTable,       // struct - quaternion/matrix/Rodrigues operator lists
};
