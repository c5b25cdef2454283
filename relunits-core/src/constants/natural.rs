//! Natural Constants
//!
//! Fundamental constants of nature in SI units, plus the powers of the
//! speed of light that the conversion factors are built from.
//!
//! Unless stated otherwise values are the CODATA 2014 recommendations:
//! P. J. Mohr et al., *CODATA Recommended Values of the Fundamental Physical
//! Constants: 2014*, arXiv:1507.07956.

#![allow(non_upper_case_globals)]

// ===== FUNDAMENTAL CONSTANTS =====

/// Speed of light in vacuum (m s⁻¹).
///
/// Exact by definition of the metre.
///
/// Source: CODATA 2014
pub const c0: f64 = 299792458.0;

/// Newtonian constant of gravitation (m³ kg⁻¹ s⁻²).
///
/// The least precisely known fundamental constant, relative standard
/// uncertainty 4.7e-5. Every gravitational-unit factor inherits it.
///
/// Source: CODATA 2014
pub const G: f64 = 6.67408e-11;

/// Magnetic vacuum permeability over 4π (m kg s⁻² A⁻²).
///
/// Set to one in gravitational units together with G and c.
pub const mu0over4pi: f64 = 1e-7;

/// Boltzmann constant (m² kg s⁻² K⁻¹).
///
/// Source: CODATA 2014
pub const kB: f64 = 1.38064852e-23;

/// Reduced Planck constant, h/2π (m² kg s⁻¹).
///
/// Source: CODATA 2014
pub const hbar: f64 = 1.054571800e-34;

// ===== POWERS OF THE SPEED OF LIGHT =====

/// c² (m² s⁻²).
pub const c0_2: f64 = c0 * c0;

/// c³ (m³ s⁻³).
pub const c0_3: f64 = c0_2 * c0;

/// c⁴ (m⁴ s⁻⁴).
pub const c0_4: f64 = c0_3 * c0;

/// c² in CGS units (cm² s⁻²), ≈ 8.98755e+20.
pub const c0c0_cgs: f64 = c0_2 * 1e4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_of_light_is_exact() {
        assert_eq!(c0, 299_792_458.0);
        assert_eq!(c0.fract(), 0.0);
    }

    #[test]
    fn powers_follow_table_order() {
        assert_eq!(c0_2.to_bits(), (c0 * c0).to_bits());
        assert_eq!(c0_3.to_bits(), (c0_2 * c0).to_bits());
        assert_eq!(c0_4.to_bits(), (c0_3 * c0).to_bits());
        assert_eq!(c0c0_cgs.to_bits(), (c0_2 * 1e4).to_bits());
    }

    #[test]
    fn codata_literals() {
        assert_eq!(G, 6.67408e-11);
        assert_eq!(kB, 1.38064852e-23);
        assert_eq!(hbar, 1.0545718e-34);
        assert_eq!(mu0over4pi, 1e-7);
    }
}
