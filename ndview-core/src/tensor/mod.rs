// src/tensor/mod.rs

use crate::error::NdViewError;
use crate::tensor::utils::{calculate_strides, check_bounds};
use crate::types::Order;
use crate::view::TensorView;

pub mod create;
pub mod utils;

/// An owned, densely stored multi-dimensional array.
///
/// `Tensor` is the storage container the structural views borrow from and the
/// target type of [`TensorView::copy`]. It owns its element buffer; every view
/// built on top of it holds a plain reference, so the borrow checker enforces
/// that the tensor outlives its views.
///
/// Elements are stored densely in the order given at construction
/// ([`Order::RowMajor`] by default); `layout()` reports that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
    order: Order,
}

impl<T> Tensor<T> {
    /// Creates a new row-major `Tensor` from a flat data vector and a shape.
    ///
    /// # Errors
    /// Returns [`NdViewError::TensorCreationError`] if the data length does not
    /// match the number of elements implied by `shape`.
    pub fn new(data: Vec<T>, shape: Vec<usize>) -> Result<Self, NdViewError> {
        Self::new_with_order(data, shape, Order::RowMajor)
    }

    /// Creates a new `Tensor` whose elements are densely packed in `order`.
    ///
    /// `data` must already be laid out in that order.
    pub fn new_with_order(
        data: Vec<T>,
        shape: Vec<usize>,
        order: Order,
    ) -> Result<Self, NdViewError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(NdViewError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(Self::from_parts(data, shape, order))
    }

    /// Internal constructor for callers that already guarantee
    /// `data.len() == shape.iter().product()`.
    pub(crate) fn from_parts(data: Vec<T>, shape: Vec<usize>, order: Order) -> Self {
        let strides = calculate_strides(&shape, order);
        Tensor {
            data,
            shape,
            strides,
            order,
        }
    }

    /// Immutable access to the flat element buffer, in storage order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Linear offset of a multi-dimensional index into the flat buffer.
    pub(crate) fn offset_of(&self, index: &[usize]) -> Result<usize, NdViewError> {
        check_bounds(index, &self.shape)?;
        Ok(index
            .iter()
            .zip(self.strides.iter())
            .map(|(&i, &s)| i * s)
            .sum())
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: &[usize]) -> Result<&T, NdViewError> {
        let offset = self.offset_of(index)?;
        Ok(&self.data[offset])
    }
}

impl<T: Copy> TensorView for Tensor<T> {
    type Elem = T;

    fn shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    fn layout(&self) -> Order {
        self.order
    }

    fn at(&self, index: &[usize]) -> Result<T, NdViewError> {
        let offset = self.offset_of(index)?;
        Ok(self.data[offset])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_data_length() {
        let err = Tensor::new(vec![1.0f64, 2.0, 3.0], vec![2, 2]).unwrap_err();
        assert_eq!(
            err,
            NdViewError::TensorCreationError {
                data_len: 3,
                shape: vec![2, 2],
            }
        );
    }

    #[test]
    fn test_get_row_major() {
        let t = Tensor::new(vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
        assert_eq!(*t.get(&[0, 0]).unwrap(), 1.0);
        assert_eq!(*t.get(&[0, 2]).unwrap(), 3.0);
        assert_eq!(*t.get(&[1, 1]).unwrap(), 5.0);
    }

    #[test]
    fn test_get_col_major() {
        // Same logical matrix as above, packed column by column.
        let t = Tensor::new_with_order(
            vec![1.0f64, 4.0, 2.0, 5.0, 3.0, 6.0],
            vec![2, 3],
            Order::ColMajor,
        )
        .unwrap();
        assert_eq!(t.layout(), Order::ColMajor);
        assert_eq!(*t.get(&[0, 2]).unwrap(), 3.0);
        assert_eq!(*t.get(&[1, 1]).unwrap(), 5.0);
    }

    #[test]
    fn test_out_of_bounds_and_rank_mismatch() {
        let t = Tensor::new(vec![1i64, 2, 3, 4], vec![2, 2]).unwrap();
        assert_eq!(
            t.get(&[2, 0]).unwrap_err(),
            NdViewError::IndexOutOfBounds {
                index: vec![2, 0],
                shape: vec![2, 2],
            }
        );
        assert_eq!(
            t.get(&[0]).unwrap_err(),
            NdViewError::RankMismatch {
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_scalar_tensor() {
        let t = Tensor::new(vec![7.0f64], vec![]).unwrap();
        assert_eq!(t.numel(), 1);
        assert_eq!(*t.get(&[]).unwrap(), 7.0);
    }
}
