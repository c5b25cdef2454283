//! Integration tests for the constant catalog
//!
//! Tests the runtime description of the table:
//! - Catalog values are the public constants, bit for bit
//! - Dependency order, derivations and documented values verify
//! - Lookup by name, including misses
//! - Serialization of records

#![cfg(test)]

mod common;

use proptest::prelude::*;
use relunits_core::{
    catalog::{self, Category, Derivation, NamedConstant},
    units, CatalogError,
};

use common::assert_bits_eq;

#[test]
fn test_catalog_mirrors_constants() {
    let expected = [
        ("c0", units::c0),
        ("G", units::G),
        ("kB", units::kB),
        ("hbar", units::hbar),
        ("c0_4", units::c0_4),
        ("MSkm", units::MSkm),
        ("MEkm", units::MEkm),
        ("cMeVfm3km2", units::cMeVfm3km2),
        ("cgcm3km2", units::cgcm3km2),
        ("ckgm2s1km2", units::ckgm2s1km2),
        ("cGTkm", units::cGTkm),
        ("LmB_km", units::LmB_km),
        ("LnNuc_km", units::LnNuc_km),
        ("M_PI_SQARE", units::M_PI_SQARE),
    ];

    for (name, value) in expected {
        let constant = catalog::lookup(name).unwrap_or_else(|| panic!("{name} missing"));
        assert_bits_eq(name, constant.value, value);
    }
}

#[test]
fn test_catalog_verifies() {
    assert_eq!(catalog::verify(), Ok(()));
}

#[test]
fn test_every_record_checks() {
    for constant in catalog::all() {
        assert_eq!(constant.check(), Ok(()), "{}", constant.name);
    }
}

#[test]
fn test_derived_records_carry_formula() {
    for constant in catalog::all() {
        if constant.is_derived() {
            assert!(constant.formula.is_some(), "{} has no formula", constant.name);
            assert!(
                matches!(constant.derivation, Some(Derivation::Formula(_))),
                "{} has no formula derivation",
                constant.name
            );
        } else {
            assert!(constant.formula.is_none(), "{} is a literal", constant.name);
        }
    }
}

#[test]
fn test_formula_text_names_dependencies() {
    for constant in catalog::all() {
        if let Some(formula) = constant.formula {
            for dependency in constant.depends_on {
                assert!(
                    formula.contains(dependency),
                    "{}: formula {formula} does not mention {dependency}",
                    constant.name
                );
            }
        }
    }
}

#[test]
fn test_documented_values_only_on_derived() {
    for constant in catalog::all() {
        if constant.documented.is_some() {
            assert!(constant.is_derived(), "{}", constant.name);
        }
    }
    assert!(catalog::lookup("ckgm2s1km2").unwrap().documented.is_none());
}

#[test]
fn test_mathematical_constants_have_closed_forms() {
    for constant in catalog::by_category(Category::Mathematical) {
        assert!(matches!(constant.derivation, Some(Derivation::ClosedForm(_))));
        assert_eq!(constant.unit, "1");
    }
}

#[test]
fn test_verify_table_reports_wrong_formula() {
    let table = [
        NamedConstant::primary("c0", "m s^-1", Category::Natural, units::c0),
        NamedConstant::derived("c0_2", "m^2 s^-2", Category::Natural, units::c0_2, "c0*c0", &["c0"], || {
            units::c0 * units::c0
        }),
        NamedConstant::derived("c0_3", "m^3 s^-3", Category::Natural, units::c0_3, "c0_2*c0", &["c0_2", "c0"], || {
            units::c0_2 * units::c0_2
        }),
    ];

    match catalog::verify_table(&table) {
        Err(CatalogError::DerivationMismatch { name, expected, actual }) => {
            assert_eq!(name, "c0_3");
            assert_bits_eq(name, expected, units::c0_2 * units::c0_2);
            assert_bits_eq(name, actual, units::c0_3);
        }
        other => panic!("unexpected {other:?}"),
    }

    // The first two records alone are consistent
    assert_eq!(catalog::verify_table(&table[..2]), Ok(()));
}

#[test]
fn test_lookup_misses() {
    assert!(catalog::lookup("").is_none());
    assert!(catalog::lookup("c").is_none());
    assert!(catalog::lookup(" c0").is_none());

    match catalog::get("speed_of_light") {
        Err(CatalogError::UnknownConstant { name }) => assert_eq!(name.as_str(), "speed_of_light"),
        other => panic!("unexpected {other:?}"),
    }

    let long = "x".repeat(64);
    assert_eq!(catalog::get(&long), Err(CatalogError::NameTooLong { len: 64 }));
}

#[test]
fn test_section_names() {
    let sections: Vec<_> = Category::ALL.iter().map(|c| c.section()).collect();
    assert_eq!(sections.first(), Some(&"Natural constants"));
    assert_eq!(sections.last(), Some(&"Mathematical constants"));
    assert!(catalog::all().iter().all(|c| Category::ALL.contains(&c.category)));
}

#[cfg(feature = "serde")]
#[test]
fn test_record_serializes_without_derivation() {
    let record = catalog::lookup("MSkm").unwrap();
    let json = serde_json::to_value(record).unwrap();

    assert_eq!(json["name"], "MSkm");
    assert_eq!(json["unit"], "km");
    assert_eq!(json["category"], "Reference");
    assert_eq!(json["formula"], "MSkg*G/c0_2*1e-3");
    assert_eq!(json["depends_on"], serde_json::json!(["MSkg", "G", "c0_2"]));
    assert_eq!(json["value"].as_f64(), Some(units::MSkm));
    assert_eq!(json["documented"].as_f64(), Some(1.47657));
    assert!(json.get("derivation").is_none());
}

fn any_constant() -> impl Strategy<Value = NamedConstant> {
    prop::sample::select(catalog::all())
}

proptest! {
    #[test]
    fn lookup_finds_every_record(constant in any_constant()) {
        let found = catalog::lookup(constant.name).unwrap();
        prop_assert_eq!(found.value.to_bits(), constant.value.to_bits());
        prop_assert_eq!(catalog::get(constant.name), Ok(constant.value));
    }

    #[test]
    fn repeated_reads_are_bit_identical(constant in any_constant()) {
        let first = catalog::get(constant.name).unwrap();
        let second = catalog::get(constant.name).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn derivations_are_deterministic(constant in any_constant()) {
        if let Some(derivation) = constant.derivation {
            prop_assert_eq!(derivation.evaluate().to_bits(), derivation.evaluate().to_bits());
        }
    }

    #[test]
    fn dependencies_precede_dependents(constant in any_constant()) {
        let position = |name: &str| catalog::all().iter().position(|c| c.name == name);
        let own = position(constant.name).unwrap();
        for dependency in constant.depends_on {
            let dep = position(*dependency);
            prop_assert!(dep.is_some());
            prop_assert!(dep.unwrap() < own);
        }
    }

    #[test]
    fn unknown_names_are_reported(suffix in "[a-z]{1,8}") {
        let name = format!("zz_{suffix}");
        prop_assert_eq!(catalog::get(&name), Err(CatalogError::unknown(&name)));
    }
}
