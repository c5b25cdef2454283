//! Mathematical Constants
//!
//! Literals carry 30 significant digits; they round to the nearest `f64`.

/// 2π.
pub const M_2PI: f64 = 6.28318530717958647692528676656;

/// 4π.
pub const M_4PI: f64 = 12.5663706143591729538505735331;

/// π².
#[doc(alias = "M_PI_SQUARE")]
pub const M_PI_SQARE: f64 = 9.86960440108935861883449099988;

/// Golden ratio, (√5 + 1)/2.
pub const M_PHI: f64 = 1.61803398874989484820458683437;

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn multiples_of_pi() {
        assert_eq!(M_2PI, 2.0 * PI);
        assert_eq!(M_4PI, 4.0 * PI);
        assert!((M_PI_SQARE - PI * PI).abs() < 1e-15);
    }

    #[test]
    fn golden_ratio() {
        let phi = (libm::sqrt(5.0) + 1.0) / 2.0;
        assert!((M_PHI - phi).abs() < 1e-15);
        // φ² = φ + 1
        assert!((M_PHI * M_PHI - M_PHI - 1.0).abs() < 1e-15);
    }
}
