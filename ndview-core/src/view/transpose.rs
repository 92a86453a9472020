use crate::error::NdViewError;
use crate::numeric::Conjugate;
use crate::tensor::utils::check_bounds;
use crate::types::Order;
use crate::view::TensorView;

/// Lazy transpose view of a matrix.
///
/// `rows() = source.cols()` and `cols() = source.rows()`; element `(i, j)`
/// delegates to source `(j, i)`. No data moves: only the logical indexing is
/// swapped. For sources of higher rank the full axis order is reversed, which
/// coincides with the row/column swap in the 2-D case.
#[derive(Debug)]
pub struct Transpose<'a, V: TensorView> {
    source: &'a V,
}

impl<'a, V: TensorView> Transpose<'a, V> {
    pub fn new(source: &'a V) -> Self {
        Transpose { source }
    }
}

impl<'a, V: TensorView> TensorView for Transpose<'a, V> {
    type Elem = V::Elem;

    fn shape(&self) -> Vec<usize> {
        let mut shape = self.source.shape();
        shape.reverse();
        shape
    }

    fn layout(&self) -> Order {
        self.source.layout()
    }

    fn at(&self, index: &[usize]) -> Result<V::Elem, NdViewError> {
        check_bounds(index, &self.shape())?;
        let mapped: Vec<usize> = index.iter().rev().copied().collect();
        self.source.at(&mapped)
    }
}

/// Lazy conjugate-transpose view of a matrix.
///
/// Same index remapping as [`Transpose`], with complex conjugation applied to
/// every retrieved element. For real element types the conjugation is the
/// identity, so this behaves exactly like [`Transpose`].
#[derive(Debug)]
pub struct ConjTranspose<'a, V: TensorView> {
    source: &'a V,
}

impl<'a, V: TensorView> ConjTranspose<'a, V>
where
    V::Elem: Conjugate,
{
    pub fn new(source: &'a V) -> Self {
        ConjTranspose { source }
    }
}

impl<'a, V: TensorView> TensorView for ConjTranspose<'a, V>
where
    V::Elem: Conjugate,
{
    type Elem = V::Elem;

    fn shape(&self) -> Vec<usize> {
        let mut shape = self.source.shape();
        shape.reverse();
        shape
    }

    fn layout(&self) -> Order {
        self.source.layout()
    }

    fn at(&self, index: &[usize]) -> Result<V::Elem, NdViewError> {
        check_bounds(index, &self.shape())?;
        let mapped: Vec<usize> = index.iter().rev().copied().collect();
        Ok(self.source.at(&mapped)?.conj())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::Tensor;
    use num_complex::Complex;

    fn matrix() -> Tensor<f64> {
        Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap()
    }

    #[test]
    fn test_transpose_basic() {
        let t = matrix();
        let tr = t.transposed();
        assert_eq!(tr.shape(), vec![3, 2]);
        assert_eq!(tr.at(&[0, 0]).unwrap(), 1.0);
        assert_eq!(tr.at(&[0, 1]).unwrap(), 4.0);
        assert_eq!(tr.at(&[2, 0]).unwrap(), 3.0);
        assert_eq!(tr.at(&[2, 1]).unwrap(), 6.0);
    }

    #[test]
    fn test_transpose_involution() {
        let t = matrix();
        let back = Transpose::new(&t);
        let back = back.transposed();
        assert_eq!(back.copy().unwrap(), t);
    }

    #[test]
    fn test_transpose_materialized() {
        let t = matrix();
        let owned = t.transposed().copy().unwrap();
        assert_eq!(owned.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_conj_transpose_real_equals_transpose() {
        let t = matrix();
        let ct = t.conj_transposed().copy().unwrap();
        let tr = t.transposed().copy().unwrap();
        assert_eq!(ct, tr);
    }

    #[test]
    fn test_conj_transpose_complex() {
        let t = Tensor::new(
            vec![
                Complex::new(1.0f64, 2.0),
                Complex::new(3.0, -1.0),
                Complex::new(0.0, 1.0),
                Complex::new(2.0, 0.0),
            ],
            vec![2, 2],
        )
        .unwrap();
        let ct = t.conj_transposed();
        assert_eq!(ct.at(&[0, 1]).unwrap(), Complex::new(0.0, -1.0));
        assert_eq!(ct.at(&[1, 0]).unwrap(), Complex::new(3.0, 1.0));

        // Applying the conjugate transpose twice recovers the original.
        let twice = ct.conj_transposed().copy().unwrap();
        assert_eq!(twice, t);
    }

    #[test]
    fn test_transpose_out_of_bounds() {
        let t = matrix();
        let tr = t.transposed();
        assert!(matches!(
            tr.at(&[0, 2]),
            Err(NdViewError::IndexOutOfBounds { .. })
        ));
    }
}
