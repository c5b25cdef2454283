//! Physical constants and unit-conversion factors for numerical relativity
//!
//! A flat table of `f64` constants: natural constants, reference masses,
//! factors into geometric units (G = c = μ₀/4π = 1, lengths in km) from
//! nuclear, CGS and SI units, electromagnetic factors, LORENE
//! normalisations and a few mathematical constants.
//!
//! Key properties:
//! - Every value is a `const`, evaluated at compile time
//! - Derived values keep the operand order of their formula, so results
//!   are bit-for-bit reproducible
//! - Works under `no_std`
//!
//! ```
//! use relunits_core::units;
//!
//! // 1.4 solar masses in km
//! let mass_km = 1.4 * units::MSkm;
//! assert!((mass_km - 2.0672).abs() < 1e-3);
//!
//! // A nuclear EOS pressure of 100 MeV fm⁻³ in km⁻²
//! let p_km = 100.0 * units::cMeVfm3km2;
//! assert!((p_km - 1.32379e-4).abs() < 1e-9);
//! ```
//!
//! The [`catalog`] module describes the same table at runtime: units,
//! sections, formulas and dependencies, with lookup by name.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod constants;
pub mod errors;

// Public API
pub use catalog::{Category, Derivation, NamedConstant};
pub use errors::{CatalogError, CatalogResult};

/// Every constant in one flat namespace.
///
/// Mirrors the layout numerical codes expect, `units::c0`, `units::MSkm`,
/// with section structure available through [`constants`].
pub mod units {
    pub use crate::constants::electromagnetic::*;
    pub use crate::constants::gravitational::cgs::*;
    pub use crate::constants::gravitational::nuclear::*;
    pub use crate::constants::gravitational::si::*;
    pub use crate::constants::lorene::*;
    pub use crate::constants::math::*;
    pub use crate::constants::natural::*;
    pub use crate::constants::reference::*;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn flat_namespace_matches_sections() {
        assert_eq!(units::c0, constants::natural::c0);
        assert_eq!(units::cMeVkm, constants::gravitational::nuclear::cMeVkm);
        assert_eq!(units::LmB_km, constants::lorene::LmB_km);
        assert_eq!(units::M_PHI, constants::math::M_PHI);
    }
}
