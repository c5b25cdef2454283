//! Electromagnetic Units
//!
//! Conversion factors for electromagnetic quantities into gravitational
//! units with G = c = μ₀/4π = 1.
//!
//! The coefficient `0.02583424084427487` agrees with √(G/(μ₀/4π)) for the
//! CODATA 2014 G to the last printed digit, and `2.583424084427487e-9` is
//! the same number scaled by 1e-7. Both are kept as literals rather than
//! recomputed so downstream codes see exactly these bits.

#![allow(non_upper_case_globals)]

use super::natural::{c0, c0_2, c0_3};

/// Magnetic field factor, T to km⁻¹, ≈ 2.87445e-16.
pub const cTkm: f64 = 1.0 / c0_2 * 0.02583424084427487 * 1e3;

/// Current factor, A to dimensionless, ≈ 2.87445e-26.
pub const cA: f64 = 1.0 / c0_2 * 2.583424084427487e-9;

/// Charge factor, C to km, ≈ 8.61738e-21.
pub const cCkm: f64 = 2.583424084427487e-9 / c0 * 1e-3;

/// Potential factor, V to dimensionless, ≈ 9.58812e-28.
pub const cV: f64 = 0.02583424084427487 / c0_3;

/// Magnetic dipole moment factor, A m² to km², ≈ 2.87445e-32.
pub const cAm2km2: f64 = cA * 1e-6;

/// Magnetic field factor, G (gauss) to km⁻¹, ≈ 2.87445e-20.
pub const cGskm: f64 = cTkm * 1e-4;

/// Magnetic field factor, GT (gigatesla) to km⁻¹, ≈ 2.87445e-7.
pub const cGTkm: f64 = cTkm * 1e+9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauss_and_gigatesla_scale_tesla() {
        assert_eq!(cGskm.to_bits(), (cTkm * 1e-4).to_bits());
        assert_eq!(cGTkm.to_bits(), (cTkm * 1e9).to_bits());
    }

    #[test]
    fn tesla_and_ampere_share_mantissa() {
        // Same coefficient, scaled by 1e7 and the 1e3 km conversion
        let ratio = cTkm / cA;
        assert!((ratio - 1e10).abs() / 1e10 < 1e-14);
    }

    #[test]
    fn documented_magnitudes() {
        assert!((cCkm - 8.61738e-21).abs() / 8.61738e-21 < 2e-6);
        assert!((cV - 9.58812e-28).abs() / 9.58812e-28 < 2e-6);
        assert!((cAm2km2 - 2.87445e-32).abs() / 2.87445e-32 < 2e-6);
    }
}
