use crate::tensor::Tensor;
use crate::view::TensorView;

/// Checks that a materialized tensor matches an expected shape and data within
/// tolerance. Panics with the offending position on mismatch.
pub fn check_tensor_near(
    actual: &Tensor<f64>,
    expected_shape: &[usize],
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(
        actual.data().len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual.data().iter().zip(expected_data.iter()).enumerate() {
        let diff = (*a - *e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Helper to create a simple f64 tensor for testing purposes.
#[cfg(test)]
pub(crate) fn create_test_tensor(data: Vec<f64>, shape: Vec<usize>) -> Tensor<f64> {
    Tensor::new(data, shape).expect("Failed to create test tensor")
}
