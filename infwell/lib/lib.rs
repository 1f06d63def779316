//! Provides closed-form energies and wavefunctions for a particle in a
//! one-dimensional infinite square well, along with level diagrams in which
//! every wavefunction is drawn on its own energy line.
//!
//! Provides:
//! - Energies (eV) of levels 1, ..., *N* - 1 for a given exclusive bound *N*,
//!   well width, and particle mass ([`levels`])
//! - Wavefunctions of the same levels sampled across the well ([`waves`])
//! - A display-only scaling heuristic for overlaying both ([`scale`])
//! - Chart assembly and pluggable rendering surfaces ([`visualize`],
//!   [`render`])
//!
//! All physical quantities are in SI units except energies, which are
//! reported in electron-volts. The particle mass is always passed explicitly;
//! use [`units::me`] for an electron.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod well;
pub mod levels;
pub mod waves;
pub mod scale;
pub mod render;
pub mod visualize;
pub mod utils;

pub mod docs;

/// Default number of grid points used to sample wavefunctions.
pub const DEF_SAMPLES: usize = 100;

pub use error::{ RenderError, WellError };
pub use levels::energy_levels;
pub use waves::wavefunctions;
pub use visualize::{ Spectrum, visualize, visualize_with };
pub use well::{ Well, WellResult };
