//! Stationary-state wavefunctions of the infinite square well, sampled on a
//! uniform grid spanning the well.
//!
//! Every level uses the amplitude 2 / *a*,
//! ```text
//!          2      n π x
//! ψ_n(x) = - sin(-----)
//!          a        a
//! ```
//! which is what the level diagrams in [`visualize`][crate::visualize] are
//! scaled against. Note that this is not the unit-norm amplitude √(2 / *a*);
//! see [`Well::probability_density`] and [`wf_norm`][crate::utils::wf_norm]
//! if a proper normalization is needed.
//!
//! ```
//! use infwell::waves;
//!
//! let (x, psi) = waves::wavefunctions(4, 1e-9, 100).unwrap();
//! assert_eq!(x.len(), 100);
//! assert_eq!(psi.shape(), &[3, 100]);
//! assert_eq!(x[99], 1e-9);
//! ```

use std::f64::consts::PI;
use ndarray as nd;
use crate::{
    error::WellError,
    units,
    well::{ Well, WellResult, level_count },
};

/// Sample the wavefunctions of levels `1..states_excl` at `samples` points
/// uniformly covering `[0, width]`, endpoints included.
///
/// Returns the positions (m) and a `(states_excl - 1) × samples` array holding
/// one wavefunction per row, ordered as in
/// [`energy_levels`][crate::levels::energy_levels]. A bound of 1 gives zero
/// rows while the positions are still fully sampled.
///
/// The wavefunctions are independent of the particle mass.
pub fn wavefunctions(states_excl: usize, width: f64, samples: usize)
    -> WellResult<(nd::Array1<f64>, nd::Array2<f64>)>
{
    WellError::check_states(states_excl)?;
    WellError::check_samples(samples)?;
    // mass plays no role here
    let well = Well::new(width, units::me)?;
    let x = well.positions(samples);
    let psi = well.sample_wavefunctions(states_excl, &x);
    log::debug!(
        "sampled {} wavefunctions over {} points for a = {:e} m",
        psi.nrows(), samples, width,
    );
    Ok((x, psi))
}

impl Well {
    /// Value of the level-`n` wavefunction at position `x` (m).
    pub fn psi(&self, n: usize, x: f64) -> f64 {
        (2.0 / self.width()) * (n as f64 * PI * x / self.width()).sin()
    }

    /// `samples` uniformly spaced positions from 0 to the well width.
    ///
    /// The final element is exactly the width.
    ///
    /// *Panics if `samples` is less than 2*.
    pub fn positions(&self, samples: usize) -> nd::Array1<f64> {
        let mut x: nd::Array1<f64>
            = nd::Array1::linspace(0.0, self.width(), samples);
        x[samples - 1] = self.width();
        x
    }

    /// Wavefunctions of levels `1..states_excl` on a grid of `samples`
    /// positions; see [`wavefunctions`].
    ///
    /// *Panics if `samples` is less than 2*.
    pub fn wavefunctions(&self, states_excl: usize, samples: usize)
        -> (nd::Array1<f64>, nd::Array2<f64>)
    {
        let x = self.positions(samples);
        let psi = self.sample_wavefunctions(states_excl, &x);
        (x, psi)
    }

    /// Probability density |ψ_n|² on a grid of `samples` positions.
    ///
    /// *Panics if `samples` is less than 2*.
    pub fn probability_density(&self, n: usize, samples: usize)
        -> nd::Array1<f64>
    {
        self.positions(samples).mapv(|xk| self.psi(n, xk).powi(2))
    }

    fn sample_wavefunctions(&self, states_excl: usize, x: &nd::Array1<f64>)
        -> nd::Array2<f64>
    {
        nd::Array2::from_shape_fn(
            (level_count(states_excl), x.len()),
            |(i, k)| self.psi(i + 1, x[k]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{ wf_dot, wf_norm };

    const A: f64 = 1e-9;

    #[test]
    fn grid_spans_well() {
        let (x, _) = wavefunctions(3, A, 57).unwrap();
        assert_eq!(x.len(), 57);
        assert_eq!(x[0], 0.0);
        assert_eq!(x[56], A);
        let dx = x[1] - x[0];
        assert!(x.iter().zip(x.iter().skip(1)).all(|(a, b)| ((b - a) - dx).abs() < 1e-9 * dx));
    }

    #[test]
    fn vanishes_at_walls() {
        let (_, psi) = wavefunctions(10, A, 100).unwrap();
        let amp = 2.0 / A;
        for row in psi.rows() {
            assert!(row[0].abs() < 1e-12 * amp);
            assert!(row[99].abs() < 1e-12 * amp);
        }
    }

    #[test]
    fn odd_harmonic_first_peak() {
        let well = Well::electron(A).unwrap();
        for n in [1, 3, 5, 7] {
            let peak = well.psi(n, A / (2.0 * n as f64));
            assert!((peak - 2.0 / A).abs() < 1e-9 * (2.0 / A));
        }
    }

    #[test]
    fn empty_rows_for_unit_bound() {
        let (x, psi) = wavefunctions(1, A, 100).unwrap();
        assert_eq!(x.len(), 100);
        assert_eq!(psi.shape(), &[0, 100]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(wavefunctions(3, A, 1), Err(WellError::BadSamples(1))));
        assert!(matches!(wavefunctions(0, A, 100), Err(WellError::BadStates(0))));
        assert!(matches!(wavefunctions(3, 0.0, 100), Err(WellError::BadWidth(_))));
    }

    #[test]
    fn distinct_levels_orthogonal() {
        // work in units of the well width so the integrals are O(1)
        let well = Well::electron(1.0).unwrap();
        let (x, psi) = well.wavefunctions(5, 4001);
        let dx = x[1] - x[0];
        let norm = wf_norm(&psi.row(0), dx);
        // ∫ (2 sin)² = 2 for a = 1
        assert!((norm - 2.0).abs() < 1e-6);
        for i in 0..psi.nrows() {
            for j in (i + 1)..psi.nrows() {
                assert!(wf_dot(&psi.row(i), &psi.row(j), dx).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn density_is_square() {
        let well = Well::electron(A).unwrap();
        let rho = well.probability_density(2, 11);
        let x = well.positions(11);
        for (r, xk) in rho.iter().zip(&x) {
            assert!((r - well.psi(2, *xk).powi(2)).abs() <= 1e-12 * r.abs().max(1.0));
        }
    }
}
