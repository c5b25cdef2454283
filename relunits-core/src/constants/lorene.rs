//! LORENE Units
//!
//! Normalisations used by the LORENE numerical-relativity library
//! (Lorene/C++/Include/unites.h), given here in SI, CGS, nuclear and
//! gravitational units so that initial data produced by LORENE can be
//! rescaled consistently.

#![allow(non_upper_case_globals)]

use super::gravitational::nuclear::{cfm3km3, cMeVkm};
use super::gravitational::si::ckgm3km2;
use super::natural::c0_2;
use super::reference::qe;

// ===== NUCLEAR DENSITY =====

/// LORENE's "arbitrary" nuclear density (kg m⁻³).
///
/// Source: LORENE, unites.h
pub const LrhoNuc_si: f64 = 1.66e+17;

/// LORENE nuclear density (g cm⁻³), = 1.66e+14.
pub const LrhoNuc_cgs: f64 = LrhoNuc_si * 1e-3;

/// LORENE nuclear density as an energy density (MeV fm⁻³), ≈ 93.11917937.
pub const LrhoNuc_MeV: f64 = LrhoNuc_si * c0_2 / qe * 1e-51;

/// LORENE nuclear density in gravitational units (km⁻²), ≈ 1.232702e-4.
pub const LrhoNuc_km: f64 = LrhoNuc_si * ckgm3km2;

// ===== BARYON MASS =====

/// LORENE mean baryon mass (MeV), ≈ 931.1917937.
///
/// Ten times the nuclear energy density, since LORENE fixes the nuclear
/// baryon number density at 0.1 fm⁻³.
pub const LmB_MeV: f64 = 10.0 * LrhoNuc_MeV;

/// LORENE mean baryon mass (km), ≈ 1.2327021e-57.
pub const LmB_km: f64 = LmB_MeV * cMeVkm;

// ===== BARYON NUMBER DENSITY =====

/// LORENE's "arbitrary" nuclear baryon number density (fm⁻³).
///
/// Source: LORENE, unites.h
pub const LnNuc_fm: f64 = 0.1;

/// LORENE nuclear baryon number density (km⁻³), ≈ 1e+53.
pub const LnNuc_km: f64 = LnNuc_fm * cfm3km3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nuclear_density_in_mev() {
        assert!((LrhoNuc_MeV - 93.11917937).abs() < 1e-5);
        assert!((LmB_MeV - 931.1917937).abs() < 1e-4);
    }

    #[test]
    fn baryon_mass_is_density_over_number_density() {
        let ratio = LrhoNuc_MeV / LnNuc_fm;
        assert!((ratio - LmB_MeV).abs() / LmB_MeV < 1e-15);
    }

    #[test]
    fn cgs_density() {
        assert_eq!(LrhoNuc_cgs, 1.66e14);
    }
}
