use crate::tensor::Tensor;
use crate::types::Order;
use num_traits::{One, Zero};

// Implementation block for Tensor creation methods (zeros, ones, full).
impl<T> Tensor<T>
where
    T: Clone, // Required for filling the Vec
{
    /// Creates a new row-major `Tensor` filled with zeros with the specified shape.
    pub fn zeros(shape: Vec<usize>) -> Self
    where
        T: Zero,
    {
        let numel = shape.iter().product();
        Tensor::from_parts(vec![T::zero(); numel], shape, Order::RowMajor)
    }

    /// Creates a new row-major `Tensor` filled with ones with the specified shape.
    pub fn ones(shape: Vec<usize>) -> Self
    where
        T: One,
    {
        let numel = shape.iter().product();
        Tensor::from_parts(vec![T::one(); numel], shape, Order::RowMajor)
    }

    /// Creates a new row-major `Tensor` filled with `value`.
    pub fn full(shape: Vec<usize>, value: T) -> Self {
        let numel = shape.iter().product();
        Tensor::from_parts(vec![value; numel], shape, Order::RowMajor)
    }
}
