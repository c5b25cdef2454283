//! Constant Table Example
//!
//! Prints the constant table section by section, then converts a few
//! astrophysical quantities into gravitational units.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_constant_table
//! ```

use relunits_core::{
    catalog::{self, Category},
    units,
};

fn main() {
    println!("relunits Constant Table");
    println!("=======================\n");

    for category in Category::ALL {
        println!("{}", category.section());
        for constant in catalog::by_category(category) {
            match constant.formula {
                Some(formula) => println!(
                    "  {:<12} = {:>24e}  [{}]  = {}",
                    constant.name, constant.value, constant.unit, formula
                ),
                None => println!("  {:<12} = {:>24e}  [{}]", constant.name, constant.value, constant.unit),
            }
        }
        println!();
    }

    match catalog::verify() {
        Ok(()) => println!("All {} constants verified\n", catalog::all().len()),
        Err(e) => println!("Verification failed: {}\n", e),
    }

    println!("Conversions");
    println!("-----------");

    // Canonical neutron star
    let mass_msun = 1.4;
    println!("  {} M_sun              = {:.5} km", mass_msun, mass_msun * units::MSkm);

    // Nuclear saturation density
    let rho_cgs = 2.7e14;
    println!("  {:e} g cm^-3     = {:e} km^-2", rho_cgs, rho_cgs * units::cgcm3km2);

    // Central pressure of a tabulated EOS
    let p_nuc = 150.0;
    println!("  {} MeV fm^-3         = {:e} km^-2", p_nuc, p_nuc * units::cMeVfm3km2);

    // Magnetar surface field
    let b_gauss = 1e15;
    println!("  {:e} G            = {:e} km^-1", b_gauss, b_gauss * units::cGskm);
}
