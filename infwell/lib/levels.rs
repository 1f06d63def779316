//! Quantized energies of the infinite square well.
//!
//! ```
//! use infwell::{ levels, units };
//!
//! // an electron in a 1 nm well; `3` is an exclusive bound, giving n = 1, 2
//! let e = levels::energy_levels(3, 1e-9, units::me).unwrap();
//! assert_eq!(e.len(), 2);
//! assert!((e[0] - 0.376).abs() < 1e-3);
//! assert!((e[1] / e[0] - 4.0).abs() < 1e-12);
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use crate::{
    error::WellError,
    units,
    utils::array_diff,
    well::{ Well, WellResult, level_range },
};

/// Compute the energies (eV) of levels `1..states_excl` for a particle of mass
/// `mass` (kg) in a well of width `width` (m).
///
/// `states_excl` is an *exclusive* upper bound, so the result holds
/// `states_excl - 1` strictly increasing values, with level *n* at position
/// *n* - 1. A bound of 1 gives an empty array.
///
/// Fails with [`WellError`] if `states_excl == 0` or either physical
/// parameter is not positive.
pub fn energy_levels(states_excl: usize, width: f64, mass: f64)
    -> WellResult<nd::Array1<f64>>
{
    WellError::check_states(states_excl)?;
    let well = Well::new(width, mass)?;
    let energies = well.energies(states_excl);
    log::debug!(
        "computed {} energy levels for a = {:e} m, m = {:e} kg",
        energies.len(), width, mass,
    );
    Ok(energies)
}

impl Well {
    /// Energy of level `n` (eV),
    /// ```text
    ///       n² π² ħ²
    /// E_n = --------
    ///       2 m a²
    /// ```
    ///
    /// `n = 0` is not a bound state and gives 0.
    pub fn energy(&self, n: usize) -> f64 {
        (n as f64).powi(2) * PI.powi(2) * self.energy_unit() * units::J_to_eV
    }

    /// Energies (eV) of levels `1..states_excl`.
    pub fn energies(&self, states_excl: usize) -> nd::Array1<f64> {
        level_range(states_excl).map(|n| self.energy(n)).collect()
    }

    /// Differences between consecutive levels among `1..states_excl` (eV).
    ///
    /// Element *k* is *E*(*k* + 2) - *E*(*k* + 1).
    pub fn level_gaps(&self, states_excl: usize) -> nd::Array1<f64> {
        array_diff(&self.energies(states_excl))
    }

    /// Energy (eV) released by a transition from `n_from` to `n_to`; negative
    /// for absorption.
    pub fn transition_energy(&self, n_from: usize, n_to: usize) -> f64 {
        self.energy(n_from) - self.energy(n_to)
    }
}
