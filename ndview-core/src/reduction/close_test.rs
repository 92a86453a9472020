use super::*;
use num_complex::Complex;

#[test]
fn test_is_close_reflexive() {
    for value in [0.0f64, 1.0, -2.5, 1e300, 1e-300] {
        assert!(is_close(value, value, 1e-9, 0.0).unwrap());
        assert!(is_close(value, value, 0.0, 0.0).unwrap());
    }
}

#[test]
fn test_is_close_relative_tolerance() {
    assert!(is_close(1000.0f64, 1000.1, 1e-3, 0.0).unwrap());
    assert!(!is_close(1000.0f64, 1002.0, 1e-3, 0.0).unwrap());
}

#[test]
fn test_is_close_absolute_tolerance() {
    assert!(is_close(1e-10f64, 0.0, 0.0, 1e-8).unwrap());
    assert!(!is_close(1e-6f64, 0.0, 0.0, 1e-8).unwrap());
}

#[test]
fn test_is_close_nan_never_close() {
    assert!(!is_close(f64::NAN, f64::NAN, 1.0, 1.0).unwrap());
    assert!(!is_close(f64::NAN, 0.0, 1.0, 1.0).unwrap());
}

#[test]
fn test_is_close_infinities() {
    assert!(is_close(f64::INFINITY, f64::INFINITY, 0.0, 0.0).unwrap());
    assert!(is_close(f64::NEG_INFINITY, f64::NEG_INFINITY, 0.0, 0.0).unwrap());
    assert!(!is_close(f64::INFINITY, f64::NEG_INFINITY, 1.0, 1.0).unwrap());
    assert!(!is_close(f64::INFINITY, 1e300, 1.0, 1.0).unwrap());
}

#[test]
fn test_is_close_rejects_bad_tolerances() {
    assert!(matches!(
        is_close(1.0f64, 1.0, -1e-9, 0.0).unwrap_err(),
        NdViewError::InvalidTolerance { .. }
    ));
    assert!(matches!(
        is_close(1.0f64, 1.0, 0.0, f64::NAN).unwrap_err(),
        NdViewError::InvalidTolerance { .. }
    ));
}

#[test]
fn test_clamp_real() {
    assert_eq!(clamp(5.0f64, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0f64, 0.0, 1.0), 0.0);
    assert_eq!(clamp(0.5f64, 0.0, 1.0), 0.5);
    assert_eq!(clamp(7i64, -3, 3), 3);
}

#[test]
fn test_clamp_complex_componentwise() {
    let value = Complex::new(2.0f64, -2.0);
    let lo = Complex::new(0.0, 0.0);
    let hi = Complex::new(1.0, 1.0);
    assert_eq!(clamp(value, lo, hi), Complex::new(1.0, 0.0));
}
