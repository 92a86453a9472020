use crate::error::NdViewError;
use crate::tensor::utils::check_bounds;
use crate::types::Order;
use crate::view::TensorView;
use num_traits::{One, Zero};
use std::marker::PhantomData;

/// Generated identity-matrix view: ones on the offset-`k` diagonal, zeros
/// elsewhere. Owns only its extents; there is no backing source.
#[derive(Debug, Clone)]
pub struct Eye<T> {
    rows: usize,
    cols: usize,
    k: isize,
    marker: PhantomData<T>,
}

impl<T> Eye<T> {
    pub fn new(rows: usize, cols: usize, k: isize) -> Self {
        Eye {
            rows,
            cols,
            k,
            marker: PhantomData,
        }
    }

    /// Square identity with the ones on the main diagonal.
    pub fn square(n: usize) -> Self {
        Eye::new(n, n, 0)
    }
}

impl<T: Copy + Zero + One> TensorView for Eye<T> {
    type Elem = T;

    fn shape(&self) -> Vec<usize> {
        vec![self.rows, self.cols]
    }

    fn layout(&self) -> Order {
        Order::RowMajor
    }

    fn at(&self, index: &[usize]) -> Result<T, NdViewError> {
        check_bounds(index, &[self.rows, self.cols])?;
        let (i, j) = (index[0], index[1]);
        let on_diagonal = if self.k >= 0 {
            j >= self.k as usize && j - self.k as usize == i
        } else {
            i >= self.k.unsigned_abs() && i - self.k.unsigned_abs() == j
        };
        if on_diagonal {
            Ok(T::one())
        } else {
            Ok(T::zero())
        }
    }
}
