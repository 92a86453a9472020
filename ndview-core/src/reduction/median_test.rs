use super::*;
use approx::assert_relative_eq;

#[test]
fn test_median_odd_length() {
    assert_eq!(median([3.0f64, 1.0, 4.0, 1.0, 5.0]).unwrap(), 3.0);
}

#[test]
fn test_median_even_length_averages() {
    assert_relative_eq!(median([4.0f64, 1.0, 3.0, 2.0]).unwrap(), 2.5);
    assert_relative_eq!(median([1.0f64, 2.0]).unwrap(), 1.5);
}

#[test]
fn test_median_single_element() {
    assert_eq!(median([9.0f64]).unwrap(), 9.0);
}

#[test]
fn test_median_unsorted_with_duplicates() {
    assert_eq!(median([5.0f64, 5.0, 1.0, 5.0, 2.0]).unwrap(), 5.0);
}

#[test]
fn test_median_empty_fails() {
    let empty: [f64; 0] = [];
    assert_eq!(
        median(empty).unwrap_err(),
        NdViewError::EmptyInput {
            operation: "median".to_string(),
        }
    );
}
