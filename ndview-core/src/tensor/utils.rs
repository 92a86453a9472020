use crate::error::NdViewError;
use crate::types::Order;

/// Calculates the strides of a densely packed tensor with the given shape and
/// storage order.
///
/// Row-major packing gives the last axis a stride of 1; column-major packing
/// gives the first axis a stride of 1.
pub fn calculate_strides(shape: &[usize], order: Order) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    if shape.is_empty() {
        return strides;
    }
    match order {
        Order::RowMajor => {
            strides[shape.len() - 1] = 1;
            for i in (0..shape.len() - 1).rev() {
                strides[i] = strides[i + 1] * shape[i + 1];
            }
        }
        Order::ColMajor => {
            strides[0] = 1;
            for i in 1..shape.len() {
                strides[i] = strides[i - 1] * shape[i - 1];
            }
        }
    }
    strides
}

/// Validates a multi-dimensional index against a shape.
///
/// # Errors
/// [`NdViewError::RankMismatch`] when the number of indices differs from the
/// rank, [`NdViewError::IndexOutOfBounds`] when any index reaches past its
/// axis extent.
pub fn check_bounds(index: &[usize], shape: &[usize]) -> Result<(), NdViewError> {
    if index.len() != shape.len() {
        return Err(NdViewError::RankMismatch {
            expected: shape.len(),
            actual: index.len(),
        });
    }
    for (&idx, &extent) in index.iter().zip(shape.iter()) {
        if idx >= extent {
            return Err(NdViewError::IndexOutOfBounds {
                index: index.to_vec(),
                shape: shape.to_vec(),
            });
        }
    }
    Ok(())
}

/// Decodes a linear position into the multi-dimensional index it denotes when
/// walking `shape` in the given traversal order.
///
/// `out` must have length `shape.len()`.
pub fn decode_linear(mut linear: usize, shape: &[usize], order: Order, out: &mut [usize]) {
    debug_assert_eq!(out.len(), shape.len());
    match order {
        Order::RowMajor => {
            for dim in (0..shape.len()).rev() {
                let extent = shape[dim];
                if extent > 0 {
                    out[dim] = linear % extent;
                    linear /= extent;
                } else {
                    out[dim] = 0;
                }
            }
        }
        Order::ColMajor => {
            for dim in 0..shape.len() {
                let extent = shape[dim];
                if extent > 0 {
                    out[dim] = linear % extent;
                    linear /= extent;
                } else {
                    out[dim] = 0;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;
