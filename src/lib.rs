
//! Crystal symmetry orientation math library
//!
//! This library provides the per-crystal-class algorithms used by texture analysis
//! pipelines: conversions between orientation representations, minimal misorientation
//! under crystal symmetry, fundamental-zone folding, and ODF/MDF histogram binning.

pub mod config;
pub mod operators;
pub mod orientation;
pub mod symmetries;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
