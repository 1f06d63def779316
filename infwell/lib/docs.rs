//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Energies](#energies)
//! - [Wavefunctions](#wavefunctions)
//! - [Level diagrams](#level-diagrams)
//!
//! # Background
//! A particle of mass *m* is confined to the interval 0 ≤ *x* ≤ *a* by a
//! potential that vanishes inside the interval and is infinite outside,
//! ```text
//!        { 0   0 ≤ x ≤ a
//! V(x) = {
//!        { ∞   otherwise
//! ```
//! Inside the well the time-independent Schrödinger equation (TISE) reduces to
//! that of a free particle,
//! ```text
//!    ħ² ∂²ψ
//! - --- --- = E ψ(x)
//!   2 m ∂x²
//! ```
//! while the infinite walls force *ψ*(0) = *ψ*(*a*) = 0. The only solutions
//! satisfying both boundary conditions are sines with an integer number of
//! half-wavelengths across the well, indexed by the quantum number *n* ∊
//! {1, 2, ...}. (*n* = 0 gives the trivial solution, which is not a state.)
//!
//! # Energies
//! Substituting *ψ* ∝ sin(*k* *x*) with *k* = *n* π / *a* gives
//! ```text
//!       n² π² ħ²
//! E_n = -------- = n² π² ε
//!        2 m a²
//! ```
//! where *ε* ≡ *ħ*²/2 *m* *a*² is the natural energy scale of the well (see
//! [`Well::energy_unit`][crate::well::Well::energy_unit]). Energies grow
//! quadratically with *n*, so the gap between adjacent levels,
//! ```text
//! E_{n+1} - E_n = (2 n + 1) π² ε
//! ```
//! grows linearly. Halving the width quadruples every energy and doubling the
//! mass halves it.
//!
//! All energies returned by this crate are in electron-volts, converted from
//! joules by [`units::J_to_eV`][crate::units::J_to_eV]. For an electron in a
//! 1 nm well, *E*₁ ≈ 0.376 eV.
//!
//! # Wavefunctions
//! The stationary states are
//! ```text
//!          2      n π x
//! ψ_n(x) = - sin(-----)
//!          a        a
//! ```
//! sampled on a uniform grid including both walls. States with distinct *n*
//! are orthogonal, and the odd states are symmetric about the center of the
//! well while the even states are antisymmetric. The first maximum of *ψ*ₙ
//! sits at *x* = *a* / 2 *n*.
//!
//! The amplitude 2 / *a* is kept for every level because it sets the height of
//! the curves in a level diagram. The unit-norm amplitude is √(2 / *a*), so
//! that ∫ |*ψ*ₙ|² d*x* computed with [`wf_norm`][crate::utils::wf_norm]
//! evaluates to 2 / *a* rather than 1.
//!
//! # Level diagrams
//! A level diagram draws, for each level, a dashed horizontal line at *E*ₙ
//! and the wavefunction on top of it. Since *ψ*ₙ is measured in m^-1 and *E*ₙ
//! in eV, each curve is multiplied by a display factor
//! ```text
//! b_n = k 10^(⌊log₁₀ a⌋ - 1) (E_{n+1} - E_n)
//! ```
//! before being shifted by *E*ₙ. The power of ten roughly cancels the 1 / *a*
//! in the amplitude, the gap keeps neighboring curves from overlapping, and
//! *k* is a single decimal digit read off the width (see
//! [`scale_digit`][crate::scale::scale_digit]). None of this has physical
//! meaning; the factors are computed in [`scale`][crate::scale] and never
//! reach the numeric results.
