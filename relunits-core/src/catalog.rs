//! Catalog of Named Constants
//!
//! ## Motivation
//!
//! The constants in [`crate::constants`] are plain `const f64` items, which
//! is what numerical code wants. Tooling wants more: the unit a value is
//! expressed in, which section it belongs to, which constants it is derived
//! from, and a way to look it up by the name used in papers and parameter
//! files. The catalog carries that metadata for every constant in table
//! order.
//!
//! ## Derivations
//!
//! Each derived record holds its formula twice: as text for humans, and as
//! a [`Derivation`] function that re-evaluates the formula at runtime.
//! [`verify`] walks the table and checks that
//!
//! 1. every dependency is declared before the record that uses it,
//! 2. the derivation reproduces the stored value (bit for bit for
//!    [`Derivation::Formula`], within [`CLOSED_FORM_REL_TOL`] for
//!    [`Derivation::ClosedForm`]),
//! 3. the value agrees with the approximation quoted in the reference
//!    listing within [`DOCUMENTED_REL_TOL`].
//!
//! ```rust
//! use relunits_core::catalog::{self, Category};
//!
//! let mskm = catalog::lookup("MSkm").unwrap();
//! assert_eq!(mskm.unit, "km");
//! assert_eq!(mskm.depends_on, &["MSkg", "G", "c0_2"]);
//!
//! assert_eq!(catalog::by_category(Category::Mathematical).count(), 4);
//! assert!(catalog::verify().is_ok());
//! ```

use core::f64::consts::PI;

use crate::errors::{CatalogError, CatalogResult};
use crate::units::*;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Relative tolerance for documented approximations.
///
/// The reference listing quotes derived values to six or more significant
/// digits; the worst rounding among them is about 1.2e-6.
pub const DOCUMENTED_REL_TOL: f64 = 2e-6;

/// Relative tolerance for closed-form checks of mathematical constants.
pub const CLOSED_FORM_REL_TOL: f64 = 4.0 * f64::EPSILON;

/// Section of the constant table a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Category {
    /// Fundamental constants and powers of c
    Natural,
    /// Charge, particle masses, body masses
    Reference,
    /// Gravitational-unit factors for nuclear units
    Nuclear,
    /// Gravitational-unit factors for CGS units
    Cgs,
    /// Gravitational-unit factors for SI units
    Si,
    /// Electromagnetic factors
    Electromagnetic,
    /// LORENE normalisations
    Lorene,
    /// Mathematical constants
    Mathematical,
}

impl Category {
    /// All categories in table order.
    pub const ALL: [Category; 8] = [
        Category::Natural,
        Category::Reference,
        Category::Nuclear,
        Category::Cgs,
        Category::Si,
        Category::Electromagnetic,
        Category::Lorene,
        Category::Mathematical,
    ];

    /// Section heading as used in the reference listing.
    pub const fn section(self) -> &'static str {
        match self {
            Category::Natural => "Natural constants",
            Category::Reference => "Reference values",
            Category::Nuclear => "Gravitational units: nuclear",
            Category::Cgs => "Gravitational units: CGS",
            Category::Si => "Gravitational units: SI",
            Category::Electromagnetic => "Electro-magnetic GSU units",
            Category::Lorene => "Lorene units",
            Category::Mathematical => "Mathematical constants",
        }
    }
}

/// Runtime re-evaluation of a constant
#[derive(Debug, Clone, Copy)]
pub enum Derivation {
    /// The documented formula; must reproduce the stored bits exactly.
    Formula(fn() -> f64),
    /// An equivalent closed form; compared within [`CLOSED_FORM_REL_TOL`].
    ClosedForm(fn() -> f64),
}

impl Derivation {
    /// Evaluate the derivation.
    pub fn evaluate(self) -> f64 {
        match self {
            Derivation::Formula(f) | Derivation::ClosedForm(f) => f(),
        }
    }

    /// Whether `actual` is an acceptable stored value for `expected`.
    pub fn accepts(self, expected: f64, actual: f64) -> bool {
        match self {
            Derivation::Formula(_) => expected.to_bits() == actual.to_bits(),
            Derivation::ClosedForm(_) => relative_difference(expected, actual) <= CLOSED_FORM_REL_TOL,
        }
    }
}

/// One entry of the constant table
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamedConstant {
    /// Identifier, exactly as in the reference listing
    pub name: &'static str,
    /// Unit of `value`, documentation only
    pub unit: &'static str,
    /// Table section
    pub category: Category,
    /// The constant
    pub value: f64,
    /// Derivation formula as text, for derived constants
    pub formula: Option<&'static str>,
    /// Constants the formula reads, in order of appearance
    pub depends_on: &'static [&'static str],
    /// Approximation quoted in the reference listing
    pub documented: Option<f64>,
    /// Runtime re-evaluation used by [`NamedConstant::check`]
    #[cfg_attr(feature = "serde", serde(skip))]
    pub derivation: Option<Derivation>,
}

impl NamedConstant {
    /// A primary constant: a literal with no dependencies.
    pub const fn primary(
        name: &'static str,
        unit: &'static str,
        category: Category,
        value: f64,
    ) -> Self {
        Self {
            name,
            unit,
            category,
            value,
            formula: None,
            depends_on: &[],
            documented: None,
            derivation: None,
        }
    }

    /// A constant computed from earlier ones by `formula`.
    pub const fn derived(
        name: &'static str,
        unit: &'static str,
        category: Category,
        value: f64,
        formula: &'static str,
        depends_on: &'static [&'static str],
        derive: fn() -> f64,
    ) -> Self {
        Self {
            name,
            unit,
            category,
            value,
            formula: Some(formula),
            depends_on,
            documented: None,
            derivation: Some(Derivation::Formula(derive)),
        }
    }

    /// Attach the approximation quoted in the reference listing.
    pub const fn with_documented(self, documented: f64) -> Self {
        Self { documented: Some(documented), ..self }
    }

    /// Attach a closed-form check to a literal.
    pub const fn with_closed_form(self, closed_form: fn() -> f64) -> Self {
        Self { derivation: Some(Derivation::ClosedForm(closed_form)), ..self }
    }

    /// True if the constant is computed from other constants.
    pub fn is_derived(&self) -> bool {
        !self.depends_on.is_empty()
    }

    /// Check the record against its derivation and documented value.
    ///
    /// Dependency order is a property of the whole table and is checked by
    /// [`verify`] instead.
    pub fn check(&self) -> CatalogResult<()> {
        if let Some(derivation) = self.derivation {
            let expected = derivation.evaluate();
            if !derivation.accepts(expected, self.value) {
                log_warn!("{} = {:e} does not match derivation {:e}", self.name, self.value, expected);
                return Err(CatalogError::DerivationMismatch {
                    name: self.name,
                    expected,
                    actual: self.value,
                });
            }
        }

        if let Some(documented) = self.documented {
            if relative_difference(documented, self.value) > DOCUMENTED_REL_TOL {
                log_warn!("{} = {:e} disagrees with documented {:e}", self.name, self.value, documented);
                return Err(CatalogError::DocumentedMismatch {
                    name: self.name,
                    documented,
                    actual: self.value,
                });
            }
        }

        Ok(())
    }
}

/// |a - b| / max(|a|, |b|), zero when both are equal.
pub fn relative_difference(a: f64, b: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    libm::fabs(a - b) / libm::fmax(libm::fabs(a), libm::fabs(b))
}

use Category::*;

static CATALOG: &[NamedConstant] = &[
    // ===== NATURAL CONSTANTS =====
    NamedConstant::primary("c0", "m s^-1", Natural, c0),
    NamedConstant::primary("G", "m^3 kg^-1 s^-2", Natural, G),
    NamedConstant::primary("mu0over4pi", "m kg s^-2 A^-2", Natural, mu0over4pi),
    NamedConstant::primary("kB", "m^2 kg s^-2 K^-1", Natural, kB),
    NamedConstant::primary("hbar", "m^2 kg s^-1", Natural, hbar),
    NamedConstant::derived("c0_2", "m^2 s^-2", Natural, c0_2, "c0*c0", &["c0"], || c0 * c0),
    NamedConstant::derived("c0_3", "m^3 s^-3", Natural, c0_3, "c0_2*c0", &["c0_2", "c0"], || c0_2 * c0),
    NamedConstant::derived("c0_4", "m^4 s^-4", Natural, c0_4, "c0_3*c0", &["c0_3", "c0"], || c0_3 * c0),
    NamedConstant::derived("c0c0_cgs", "cm^2 s^-2", Natural, c0c0_cgs, "c0_2*1e4", &["c0_2"], || c0_2 * 1e4)
        .with_documented(8.98755e+20),
    // ===== REFERENCE VALUES =====
    NamedConstant::primary("qe", "C", Reference, qe),
    NamedConstant::primary("mn", "MeV", Reference, mn),
    NamedConstant::primary("mp", "MeV", Reference, mp),
    NamedConstant::primary("me", "MeV", Reference, me),
    NamedConstant::primary("MSkg", "kg", Reference, MSkg),
    NamedConstant::derived("MSkm", "km", Reference, MSkm, "MSkg*G/c0_2*1e-3", &["MSkg", "G", "c0_2"], || {
        MSkg * G / c0_2 * 1e-3
    })
    .with_documented(1.47657),
    NamedConstant::primary("MEkg", "kg", Reference, MEkg),
    NamedConstant::derived("MEkm", "km", Reference, MEkm, "MEkg*G/c0_2*1e-3", &["MEkg", "G", "c0_2"], || {
        MEkg * G / c0_2 * 1e-3
    })
    .with_documented(4.4349e-06),
    // ===== GRAVITATIONAL UNITS: NUCLEAR =====
    NamedConstant::primary("cfm3km3", "km^-3 fm^3", Nuclear, cfm3km3),
    NamedConstant::derived("cMeVkm", "km MeV^-1", Nuclear, cMeVkm, "G*qe/c0_4*1e3", &["G", "qe", "c0_4"], || {
        G * qe / c0_4 * 1e3
    })
    .with_documented(1.32379e-60),
    NamedConstant::derived(
        "cMeVfm3km2",
        "km^-2 MeV^-1 fm^3",
        Nuclear,
        cMeVfm3km2,
        "cMeVkm*cfm3km3",
        &["cMeVkm", "cfm3km3"],
        || cMeVkm * cfm3km3,
    )
    .with_documented(1.32379e-06),
    // ===== GRAVITATIONAL UNITS: CGS =====
    NamedConstant::derived("cdyncm2km2", "km^-2 dyn^-1 cm^2", Cgs, cdyncm2km2, "G/c0_4*1e5", &["G", "c0_4"], || {
        G / c0_4 * 1e5
    })
    .with_documented(8.26245e-40),
    NamedConstant::derived("cgcm3km2", "km^-2 g^-1 cm^3", Cgs, cgcm3km2, "G/c0_2*1e9", &["G", "c0_2"], || {
        G / c0_2 * 1e9
    })
    .with_documented(7.42592e-19),
    // ===== GRAVITATIONAL UNITS: SI =====
    NamedConstant::derived("cHzkm", "km^-1 Hz^-1", Si, cHzkm, "1/c0*1e3", &["c0"], || 1.0 / c0 * 1e3)
        .with_documented(3.33564e-6),
    // The listing quotes 2.47702e-30 here, twelve orders of magnitude off its own formula.
    NamedConstant::derived("ckgm2s1km2", "km^2 kg^-1 m^-2 s", Si, ckgm2s1km2, "G/c0_3*1e-6", &["G", "c0_3"], || {
        G / c0_3 * 1e-6
    }),
    NamedConstant::derived("ckgm2km3", "km^3 kg^-1 m^-2", Si, ckgm2km3, "G/c0_2*1e-9", &["G", "c0_2"], || {
        G / c0_2 * 1e-9
    })
    .with_documented(7.42592e-37),
    NamedConstant::derived("ckgm3km2", "km^-2 kg^-1 m^3", Si, ckgm3km2, "G/c0_2*1e6", &["G", "c0_2"], || {
        G / c0_2 * 1e6
    })
    .with_documented(7.42592e-22),
    // ===== ELECTROMAGNETIC UNITS =====
    NamedConstant::derived(
        "cTkm",
        "km^-1 T^-1",
        Electromagnetic,
        cTkm,
        "1.0/c0_2*0.02583424084427487*1e3",
        &["c0_2"],
        || 1.0 / c0_2 * 0.02583424084427487 * 1e3,
    )
    .with_documented(2.87445e-16),
    NamedConstant::derived(
        "cA",
        "A^-1",
        Electromagnetic,
        cA,
        "1.0/c0_2*2.583424084427487e-9",
        &["c0_2"],
        || 1.0 / c0_2 * 2.583424084427487e-9,
    )
    .with_documented(2.87445e-26),
    NamedConstant::derived(
        "cCkm",
        "km C^-1",
        Electromagnetic,
        cCkm,
        "2.583424084427487e-9/c0*1e-3",
        &["c0"],
        || 2.583424084427487e-9 / c0 * 1e-3,
    )
    .with_documented(8.61738e-21),
    NamedConstant::derived(
        "cV",
        "V^-1",
        Electromagnetic,
        cV,
        "0.02583424084427487/c0_3",
        &["c0_3"],
        || 0.02583424084427487 / c0_3,
    )
    .with_documented(9.58812e-28),
    NamedConstant::derived("cAm2km2", "km^2 A^-1 m^-2", Electromagnetic, cAm2km2, "cA*1e-6", &["cA"], || cA * 1e-6)
        .with_documented(2.87445e-32),
    NamedConstant::derived("cGskm", "km^-1 G^-1", Electromagnetic, cGskm, "cTkm*1e-4", &["cTkm"], || cTkm * 1e-4)
        .with_documented(2.87445e-20),
    NamedConstant::derived("cGTkm", "km^-1 GT^-1", Electromagnetic, cGTkm, "cTkm*1e+9", &["cTkm"], || cTkm * 1e+9)
        .with_documented(2.87445e-7),
    // ===== LORENE UNITS =====
    NamedConstant::primary("LrhoNuc_si", "kg m^-3", Lorene, LrhoNuc_si),
    NamedConstant::derived(
        "LrhoNuc_cgs",
        "g cm^-3",
        Lorene,
        LrhoNuc_cgs,
        "LrhoNuc_si*1e-3",
        &["LrhoNuc_si"],
        || LrhoNuc_si * 1e-3,
    )
    .with_documented(1.66e+14),
    NamedConstant::derived(
        "LrhoNuc_MeV",
        "MeV fm^-3",
        Lorene,
        LrhoNuc_MeV,
        "LrhoNuc_si*c0_2/qe*1e-51",
        &["LrhoNuc_si", "c0_2", "qe"],
        || LrhoNuc_si * c0_2 / qe * 1e-51,
    )
    .with_documented(93.11917937),
    NamedConstant::derived(
        "LrhoNuc_km",
        "km^-2",
        Lorene,
        LrhoNuc_km,
        "LrhoNuc_si*ckgm3km2",
        &["LrhoNuc_si", "ckgm3km2"],
        || LrhoNuc_si * ckgm3km2,
    )
    .with_documented(1.232702e-4),
    NamedConstant::derived("LmB_MeV", "MeV", Lorene, LmB_MeV, "10*LrhoNuc_MeV", &["LrhoNuc_MeV"], || {
        10.0 * LrhoNuc_MeV
    })
    .with_documented(931.1917937),
    NamedConstant::derived("LmB_km", "km", Lorene, LmB_km, "LmB_MeV*cMeVkm", &["LmB_MeV", "cMeVkm"], || {
        LmB_MeV * cMeVkm
    })
    .with_documented(1.2327021e-57),
    NamedConstant::primary("LnNuc_fm", "fm^-3", Lorene, LnNuc_fm),
    NamedConstant::derived(
        "LnNuc_km",
        "km^-3",
        Lorene,
        LnNuc_km,
        "LnNuc_fm*cfm3km3",
        &["LnNuc_fm", "cfm3km3"],
        || LnNuc_fm * cfm3km3,
    )
    .with_documented(1e53),
    // ===== MATHEMATICAL CONSTANTS =====
    NamedConstant::primary("M_2PI", "1", Mathematical, M_2PI).with_closed_form(|| 2.0 * PI),
    NamedConstant::primary("M_4PI", "1", Mathematical, M_4PI).with_closed_form(|| 4.0 * PI),
    NamedConstant::primary("M_PI_SQARE", "1", Mathematical, M_PI_SQARE).with_closed_form(|| PI * PI),
    NamedConstant::primary("M_PHI", "1", Mathematical, M_PHI).with_closed_form(|| (libm::sqrt(5.0) + 1.0) / 2.0),
];

/// Every constant, in table order.
///
/// Table order is a topological order of the derivation graph.
pub fn all() -> &'static [NamedConstant] {
    CATALOG
}

/// Find a constant by its exact, case-sensitive name.
pub fn lookup(name: &str) -> Option<&'static NamedConstant> {
    let found = CATALOG.iter().find(|c| c.name == name);
    if found.is_none() {
        log_debug!("no constant named {:?}", name);
    }
    found
}

/// Value of the constant called `name`.
pub fn get(name: &str) -> CatalogResult<f64> {
    lookup(name)
        .map(|c| c.value)
        .ok_or_else(|| CatalogError::unknown(name))
}

/// Constants of one section, in table order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static NamedConstant> {
    CATALOG.iter().filter(move |c| c.category == category)
}

/// Check the whole table.
///
/// Stops at the first failing record.
pub fn verify() -> CatalogResult<()> {
    verify_table(CATALOG)
}

/// Check an arbitrary table with the same rules as [`verify`].
pub fn verify_table(table: &[NamedConstant]) -> CatalogResult<()> {
    for (i, constant) in table.iter().enumerate() {
        let declared = &table[..i];
        for &dependency in constant.depends_on {
            if !declared.iter().any(|c| c.name == dependency) {
                log_warn!("{} depends on {}, not declared before it", constant.name, dependency);
                return Err(CatalogError::UnresolvedDependency {
                    name: constant.name,
                    dependency,
                });
            }
        }
        constant.check()?;
    }
    Ok(())
}
