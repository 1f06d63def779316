//! Parameters of a one-dimensional infinite square well.

use std::ops::Range;
use crate::{
    error::WellError,
    units,
};

pub type WellResult<T> = Result<T, WellError>;

/// A particle of mass `mass` confined to `0 ≤ x ≤ width` by infinitely high
/// walls.
///
/// Both quantities are in SI units (m, kg) and are guaranteed positive and
/// finite by [`Self::new`]. Energy and wavefunction methods live in
/// [`levels`][crate::levels] and [`waves`][crate::waves].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Well {
    width: f64,
    mass: f64,
}

impl Well {
    /// Construct from a width (m) and particle mass (kg).
    pub fn new(width: f64, mass: f64) -> WellResult<Self> {
        WellError::check_width(width)?;
        WellError::check_mass(mass)?;
        Ok(Self { width, mass })
    }

    /// Construct for an electron ([`units::me`]) in a well of the given width
    /// (m).
    pub fn electron(width: f64) -> WellResult<Self> {
        Self::new(width, units::me)
    }

    /// Well width (m).
    pub fn width(&self) -> f64 { self.width }

    /// Particle mass (kg).
    pub fn mass(&self) -> f64 { self.mass }

    /// Natural energy scale of the well, ħ² / 2 *m* *a*² (J).
    ///
    /// Level *n* sits at *n*² π² times this value.
    pub fn energy_unit(&self) -> f64 {
        units::hbar.powi(2) / 2.0 / self.mass / self.width.powi(2)
    }
}

/// Quantum numbers evaluated for an exclusive upper bound: `1..states_excl`.
///
/// A bound of 0 or 1 gives an empty range.
pub fn level_range(states_excl: usize) -> Range<usize> {
    1..states_excl.max(1)
}

/// Number of levels in [`level_range`]`(states_excl)`.
pub fn level_count(states_excl: usize) -> usize {
    states_excl.saturating_sub(1)
}
