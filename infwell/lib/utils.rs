//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the norm ∫ |ψ|² dx of a sampled wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len();
    let two = A::one() + A::one();
    (dx / two) * (
        q[0].powi(2)
        + two * q.iter().skip(1).take(n - 2)
            .fold(A::zero(), |acc, qk| acc + qk.powi(2))
        + q[n - 1].powi(2)
    )
}

/// Calculate the inner product ∫ ψ φ dx of two real wavefunctions.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len().min(p.len());
    let two = A::one() + A::one();
    (dx / two) * (
        q[0] * p[0]
        + two * q.iter().zip(p).skip(1).take(n - 2)
            .fold(A::zero(), |acc, (qk, pk)| acc + *qk * *pk)
        + q[n - 1] * p[n - 1]
    )
}

/// Return an array of differences between adjacent elements of a source
/// array.
///
/// The result is one element shorter than the source, or empty if the source
/// has fewer than two elements.
pub fn array_diff<S, A>(a: &nd::ArrayBase<S, Ix1>) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: std::ops::Sub<A, Output = A> + Copy,
{
    a.iter().skip(1).zip(a)
        .map(|(akp1, ak)| *akp1 - *ak)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trapz_linear_exact() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0, 21);
        let dx = x[1] - x[0];
        assert!((trapz(&x, dx) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn norm_of_sine() {
        // ∫₀^π sin² = π/2
        let x: nd::Array1<f64>
            = nd::Array1::linspace(0.0, std::f64::consts::PI, 2001);
        let dx = x[1] - x[0];
        let q = x.mapv(f64::sin);
        assert!((wf_norm(&q, dx) - std::f64::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((wf_dot(&q, &q, dx) - wf_norm(&q, dx)).abs() < 1e-12);
    }

    #[test]
    fn diff() {
        let a = nd::array![1.0, 4.0, 9.0, 16.0];
        assert_eq!(array_diff(&a), nd::array![3.0, 5.0, 7.0]);
        assert_eq!(array_diff(&nd::array![1.0]).len(), 0);
        assert_eq!(array_diff(&nd::Array1::<f64>::zeros(0)).len(), 0);
    }
}
