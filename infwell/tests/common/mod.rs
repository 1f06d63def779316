//! Helper functions for integration tests

#![allow(dead_code)]

use ndarray as nd;

/// Assert that two values agree to within a relative tolerance.
pub fn assert_close(a: f64, b: f64, rtol: f64, message: &str) {
    let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
    let err = (a - b).abs() / scale;
    assert!(
        err <= rtol,
        "{}: {} and {} differ by relative error {} (tolerance {})",
        message, a, b, err, rtol,
    );
}

/// Assert that two arrays agree elementwise to within a relative tolerance.
pub fn assert_all_close<S, T>(
    a: &nd::ArrayBase<S, nd::Ix1>,
    b: &nd::ArrayBase<T, nd::Ix1>,
    rtol: f64,
    message: &str,
)
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    assert_eq!(a.len(), b.len(), "{}: length mismatch", message);
    for (i, (ak, bk)) in a.iter().zip(b).enumerate() {
        assert_close(*ak, *bk, rtol, &format!("{} (element {})", message, i));
    }
}

/// Initialize logging once for tests that want to see library output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
