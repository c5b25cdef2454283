//! Constants for relunits
//!
//! The complete constant table, one module per section of the reference
//! listing. Every value is a `const f64` evaluated at compile time; derived
//! values are written with the exact operand order of their formula so
//! they reproduce the reference bits.
//!
//! ## Organization
//!
//! - **Natural**: fundamental constants and powers of c
//! - **Reference**: elementary charge, particle and body masses
//! - **Gravitational**: factors into G = c = 1 units (nuclear, CGS, SI)
//! - **Electromagnetic**: field, charge and current factors
//! - **LORENE**: normalisations of the LORENE library
//! - **Math**: multiples of π and the golden ratio
//!
//! ## References
//!
//! 1. P. J. Mohr et al., CODATA Recommended Values of the Fundamental
//!    Physical Constants: 2014, arXiv:1507.07956
//! 2. U.S. Nautical Almanac Office, The Astronomical Almanac, Selected
//!    Astronomical Constants 2016
//! 3. LORENE, Lorene/C++/Include/unites.h, <http://www.lorene.obspm.fr/>

/// Fundamental constants and powers of the speed of light.
pub mod natural;

/// Elementary charge, particle masses and solar system body masses.
pub mod reference;

/// Conversion factors into gravitational units.
pub mod gravitational;

/// Electromagnetic conversion factors into gravitational units.
pub mod electromagnetic;

/// LORENE normalisation constants.
pub mod lorene;

/// Mathematical constants.
pub mod math;
