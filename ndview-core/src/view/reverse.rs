use crate::error::NdViewError;
use crate::tensor::utils::check_bounds;
use crate::types::Order;
use crate::view::TensorView;

/// Lazy view presenting selected axes of its source in reversed index order.
///
/// For every configured axis, logical index `i` is remapped to
/// `extent - 1 - i` before delegating to the source; indices on other axes
/// pass through unchanged. The remapping is an involution, so reversing the
/// same axes twice restores the source element-for-element.
///
/// Axes outside the source rank are ignored during remapping; validating the
/// axis set is the caller's responsibility.
#[derive(Debug)]
pub struct Reverse<'a, V: TensorView> {
    source: &'a V,
    axes: Vec<usize>,
}

impl<'a, V: TensorView> Reverse<'a, V> {
    pub fn new(source: &'a V, axes: Vec<usize>) -> Self {
        Reverse { source, axes }
    }
}

impl<'a, V: TensorView> TensorView for Reverse<'a, V> {
    type Elem = V::Elem;

    fn shape(&self) -> Vec<usize> {
        self.source.shape()
    }

    fn layout(&self) -> Order {
        self.source.layout()
    }

    fn at(&self, index: &[usize]) -> Result<V::Elem, NdViewError> {
        let shape = self.source.shape();
        check_bounds(index, &shape)?;
        let mut mapped = index.to_vec();
        for &axis in &self.axes {
            if axis < shape.len() {
                mapped[axis] = shape[axis] - 1 - index[axis];
            }
        }
        self.source.at(&mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::Tensor;
    use crate::types::Order;

    #[test]
    fn test_reverse_1d() {
        let t = Tensor::new(vec![1.0f64, 2.0, 3.0, 4.0], vec![4]).unwrap();
        let r = t.reversed(vec![0]);
        let values: Vec<f64> = r.iter(Order::RowMajor).collect();
        assert_eq!(values, vec![4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_reverse_single_axis_of_matrix() {
        let t = Tensor::new(vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
        // Reverse columns only.
        let r = t.reversed(vec![1]);
        assert_eq!(r.shape(), vec![2, 3]);
        assert_eq!(r.at(&[0, 0]).unwrap(), 3.0);
        assert_eq!(r.at(&[0, 2]).unwrap(), 1.0);
        assert_eq!(r.at(&[1, 1]).unwrap(), 5.0);
    }

    #[test]
    fn test_reverse_involution() {
        let t = Tensor::new((1..=24).map(|x| x as f64).collect(), vec![2, 3, 4]).unwrap();
        let twice = Reverse::new(&t, vec![0, 2]);
        let twice = twice.reversed(vec![0, 2]);
        let restored = twice.copy().unwrap();
        assert_eq!(restored.data(), t.data());
    }

    #[test]
    fn test_reverse_out_of_bounds() {
        let t = Tensor::new(vec![1.0f64, 2.0], vec![2]).unwrap();
        let r = t.reversed(vec![0]);
        assert_eq!(
            r.at(&[2]).unwrap_err(),
            NdViewError::IndexOutOfBounds {
                index: vec![2],
                shape: vec![2],
            }
        );
    }

    #[test]
    fn test_reverse_ignores_axis_beyond_rank() {
        let t = Tensor::new(vec![1.0f64, 2.0, 3.0], vec![3]).unwrap();
        let r = t.reversed(vec![0, 5]);
        assert_eq!(r.at(&[0]).unwrap(), 3.0);
    }
}
