#![allow(non_upper_case_globals)]

//! Physical constants in SI units.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// proton mass (kg)
pub const mp: f64 = 1.67262192369e-27;
//              +/- 0.00000000051e-27

/// unified atomic mass unit (kg)
pub const mu: f64 = 1.66053906660e-27;
//              +/- 0.00000000050e-27

/// Joule to electron-volt conversion factor (eV J^-1), rounded to three
/// significant figures.
///
/// This is the factor used for every energy reported in eV by this crate.
pub const J_to_eV: f64 = 6.24e18;

/// Joule to electron-volt conversion factor (eV J^-1) as 1 / [`e`].
pub const J_to_eV_exact: f64 = 1.0 / e;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_factors_agree() {
        assert!((J_to_eV / J_to_eV_exact - 1.0).abs() < 1e-3);
    }

    #[test]
    fn hbar_value() {
        assert!((hbar - 1.054571817e-34).abs() < 1e-42);
    }
}
