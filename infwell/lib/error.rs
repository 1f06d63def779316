//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;

/// Returned when well parameters or sampling options are invalid.
///
/// All checks are performed eagerly, before any computation.
#[derive(Debug, Error)]
pub enum WellError {
    /// Returned when the exclusive upper bound on the level range is 0.
    ///
    /// A bound of 1 is valid and produces an empty level range.
    #[error("exclusive level bound must be at least 1; got {0}")]
    BadStates(usize),

    /// Returned when a non-positive or non-finite well width is encountered.
    #[error("well width must be positive and finite; got {0}")]
    BadWidth(f64),

    /// Returned when a non-positive or non-finite particle mass is
    /// encountered.
    #[error("particle mass must be positive and finite; got {0}")]
    BadMass(f64),

    /// Returned when fewer than two grid samples are requested.
    #[error("sample count must be at least 2; got {0}")]
    BadSamples(usize),
}

impl WellError {
    pub(crate) fn check_states(states_excl: usize) -> Result<(), Self> {
        (states_excl != 0).then_some(()).ok_or(Self::BadStates(states_excl))
    }

    pub(crate) fn check_width(width: f64) -> Result<(), Self> {
        (width.is_finite() && width > 0.0)
            .then_some(()).ok_or(Self::BadWidth(width))
    }

    pub(crate) fn check_mass(mass: f64) -> Result<(), Self> {
        (mass.is_finite() && mass > 0.0)
            .then_some(()).ok_or(Self::BadMass(mass))
    }

    pub(crate) fn check_samples(samples: usize) -> Result<(), Self> {
        (samples >= 2).then_some(()).ok_or(Self::BadSamples(samples))
    }
}

/// Returned from a [`Surface`][crate::render::Surface] when a chart cannot be
/// drawn.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Any failure reported by the plotting backend.
    #[error("plotting backend error: {0}")]
    Backend(String),

    /// Failure to prepare the output location.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub(crate) fn backend<E>(err: E) -> Self
    where E: std::fmt::Display
    {
        Self::Backend(err.to_string())
    }
}
