//! Gravitational Units
//!
//! Conversion factors into the geometric unit system used by
//! numerical-relativity codes, where G = c = μ₀/4π = 1 and the unit of
//! length is the kilometre. Multiplying a quantity given in the source
//! unit by the factor yields the quantity in the matching power of km.
//!
//! ```text
//! mass:     M [km]    = G/c² · M [kg] · 1e-3
//! density:  ρ [km⁻²]  = G/c² · ρ [kg m⁻³] · 1e6
//! pressure: p [km⁻²]  = G/c⁴ · p [Pa] · 1e6
//! ```

#![allow(non_upper_case_globals)]

/// Nuclear units: MeV and fm.
pub mod nuclear {
    use crate::constants::natural::{c0_4, G};
    use crate::constants::reference::qe;

    /// Number density factor, fm⁻³ to km⁻³ (= 1e+54).
    pub const cfm3km3: f64 = 1e54;

    /// Energy factor, MeV to km, ≈ 1.32379e-60.
    ///
    /// One MeV is `qe·1e6` J; the geometric length of an energy E is
    /// G·E/c⁴ in metres.
    pub const cMeVkm: f64 = G * qe / c0_4 * 1e3;

    /// Energy density / pressure factor, MeV fm⁻³ to km⁻², ≈ 1.32379e-06.
    ///
    /// The usual factor for tabulated nuclear equations of state.
    pub const cMeVfm3km2: f64 = cMeVkm * cfm3km3;
}

/// CGS units.
pub mod cgs {
    use crate::constants::natural::{c0_2, c0_4, G};

    /// Pressure factor, dyn cm⁻² to km⁻², ≈ 8.26245e-40.
    pub const cdyncm2km2: f64 = G / c0_4 * 1e5;

    /// Mass density factor, g cm⁻³ to km⁻², ≈ 7.42592e-19.
    pub const cgcm3km2: f64 = G / c0_2 * 1e9;
}

/// SI units.
pub mod si {
    use crate::constants::natural::{c0, c0_2, c0_3, G};

    /// Frequency factor, Hz to km⁻¹, ≈ 3.33564e-6.
    pub const cHzkm: f64 = 1.0 / c0 * 1e3;

    /// Angular momentum factor, kg m² s⁻¹ to km².
    ///
    /// The formula evaluates to ≈ 2.47702e-42.
    pub const ckgm2s1km2: f64 = G / c0_3 * 1e-6;

    /// Moment of inertia factor, kg m² to km³, ≈ 7.42592e-37.
    pub const ckgm2km3: f64 = G / c0_2 * 1e-9;

    /// Mass density factor, kg m⁻³ to km⁻², ≈ 7.42592e-22.
    pub const ckgm3km2: f64 = G / c0_2 * 1e6;
}
