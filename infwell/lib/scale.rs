//! Display scaling for level diagrams.
//!
//! Wavefunction amplitudes (m^-1) and energies (eV) live on unrelated scales,
//! so each curve in a level diagram is multiplied by a per-level factor before
//! it is shifted onto its energy line. The factor is a cosmetic heuristic with
//! no physical meaning:
//! ```text
//! b_i = k * 10^(floor(log10(a)) - 1) * (E_{i+1} - E_i)
//! ```
//! where *k* is a single decimal digit read off the shortest text form of the
//! width *a* (see [`scale_digit`]). Nothing here feeds back into
//! [`levels`][crate::levels] or [`waves`][crate::waves].

use ndarray as nd;
use crate::utils::array_diff;

/// Per-level display factors for a level diagram, along with the two
/// quantities they were derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayScale {
    /// Heuristic digit *k*.
    pub digit: u32,
    /// Power of ten one below the width's order of magnitude.
    pub magnitude: f64,
    /// Factor *b_i* for each level.
    pub factors: nd::Array1<f64>,
}

impl DisplayScale {
    /// Derive all factors for a well of width `width` (m) with level energies
    /// `energies` (eV).
    pub fn new<S>(width: f64, energies: &nd::ArrayBase<S, nd::Ix1>) -> Self
    where S: nd::Data<Elem = f64>
    {
        let digit = scale_digit(width);
        let magnitude = scale_magnitude(width);
        let factors = level_scales(energies, digit, magnitude);
        log::debug!(
            "display scale for a = {:e} m: k = {}, scalar = {:e}",
            width, digit, magnitude,
        );
        Self { digit, magnitude, factors }
    }

    /// Factor for the level at position `i`, if any.
    pub fn factor(&self, i: usize) -> Option<f64> {
        self.factors.get(i).copied()
    }
}

// shortest round-trip decimal digits and exponent, as in `d.ddd × 10^exp`
fn decimal_parts(x: f64) -> (String, i32) {
    let repr = format!("{:e}", x.abs());
    let (mantissa, exp) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exp.parse().unwrap_or(0))
}

/// Heuristic digit *k* taken from the shortest decimal text of `width`.
///
/// For `1e-5 < width < 1` this is the *last* character of the text and
/// otherwise the *first*. The text is written positionally unless the decimal
/// exponent is below -4 (or at least 16), in which case it takes the form
/// `d.ddde-XX` with a two-digit exponent, so that every width in
/// `(1e-5, 1e-4)` reads `...e-05` and gets *k* = 5.
pub fn scale_digit(width: f64) -> u32 {
    let (digits, exp) = decimal_parts(width);
    let first = || digits.chars().next();
    let last = || {
        if exp < -4 {
            char::from_digit(exp.unsigned_abs() % 10, 10)
        } else {
            digits.chars().last()
        }
    };
    let c = if width > 1e-5 && width < 1.0 { last() } else { first() };
    c.and_then(|c| c.to_digit(10)).unwrap_or(1)
}

/// Power of ten one below the order of magnitude of `width`,
/// `10^(floor(log10(width)) - 1)`.
pub fn scale_magnitude(width: f64) -> f64 {
    10.0_f64.powf(width.log10().floor() - 1.0)
}

/// Per-level factors `digit * magnitude * (E_{i+1} - E_i)`.
///
/// The last level has no gap above it and repeats the previous factor. A
/// single level uses the gap to the level it would have next, 3 *E*₁.
pub fn level_scales<S>(
    energies: &nd::ArrayBase<S, nd::Ix1>,
    digit: u32,
    magnitude: f64,
) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let k = digit as f64 * magnitude;
    match energies.len() {
        0 => nd::Array1::zeros(0),
        1 => nd::array![k * 3.0 * energies[0]],
        _ => {
            let mut b: Vec<f64>
                = array_diff(energies).iter().map(|g| k * g).collect();
            let last = b[b.len() - 1];
            b.push(last);
            nd::Array1::from(b)
        },
    }
}
