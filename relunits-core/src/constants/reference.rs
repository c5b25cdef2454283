//! Reference Values
//!
//! Particle masses, the elementary charge, and the solar and terrestrial
//! masses. The body masses are also given as gravitational radii
//! GM/c² in kilometres.

#![allow(non_upper_case_globals)]

use super::natural::{c0_2, G};

// ===== CHARGE =====

/// Elementary charge (C).
///
/// Also the conversion between electronvolt and joule.
///
/// Source: CODATA 2014
pub const qe: f64 = 1.6021766208e-19;

// ===== PARTICLE MASSES =====

/// Neutron mass (MeV).
///
/// Source: CODATA 2014
pub const mn: f64 = 939.5654133;

/// Proton mass (MeV).
///
/// Source: CODATA 2014
pub const mp: f64 = 938.2720813;

/// Electron mass (MeV).
///
/// Source: CODATA 2014
pub const me: f64 = 0.5109989461;

// ===== SOLAR SYSTEM BODIES =====

/// Solar mass (kg).
///
/// Source: The Astronomical Almanac, Selected Astronomical Constants 2016
pub const MSkg: f64 = 1.9884e+30;

/// Solar mass as a gravitational length (km per solar mass), ≈ 1.47657.
///
/// Source: derived from [`MSkg`]
pub const MSkm: f64 = MSkg * G / c0_2 * 1e-3;

/// Earth mass (kg).
///
/// Source: The Astronomical Almanac, Selected Astronomical Constants 2016
pub const MEkg: f64 = 5.9722e+24;

/// Earth mass as a gravitational length (km), ≈ 4.4349e-06.
pub const MEkm: f64 = MEkg * G / c0_2 * 1e-3;
