use crate::error::NdViewError;
use crate::tensor::utils::check_bounds;
use crate::types::Order;
use crate::view::TensorView;
use num_traits::Zero;

/// Lazy 1-D view of the offset-`k` diagonal of a 2-D source.
///
/// `k >= 0` selects a diagonal above the main one (row `i` maps to column
/// `i + k`), `k < 0` one below it. The length is
/// `min(rows, cols - k)` for `k >= 0` (zero once `cols <= k`) and
/// `min(rows + k, cols)` for `k < 0` (zero once `rows <= -k`).
///
/// The source must be 2-D; this is a documented precondition, not validated
/// beyond the shape arithmetic above.
#[derive(Debug)]
pub struct Diagonal<'a, V: TensorView> {
    source: &'a V,
    k: isize,
}

impl<'a, V: TensorView> Diagonal<'a, V> {
    pub fn new(source: &'a V, k: isize) -> Self {
        Diagonal { source, k }
    }

    fn len(&self) -> usize {
        let shape = self.source.shape();
        let (rows, cols) = (shape[0], shape[1]);
        if self.k >= 0 {
            let k = self.k as usize;
            if cols <= k {
                0
            } else {
                rows.min(cols - k)
            }
        } else {
            let k = self.k.unsigned_abs();
            if rows <= k {
                0
            } else {
                (rows - k).min(cols)
            }
        }
    }
}

impl<'a, V: TensorView> TensorView for Diagonal<'a, V> {
    type Elem = V::Elem;

    fn shape(&self) -> Vec<usize> {
        vec![self.len()]
    }

    fn layout(&self) -> Order {
        self.source.layout()
    }

    fn at(&self, index: &[usize]) -> Result<V::Elem, NdViewError> {
        check_bounds(index, &self.shape())?;
        let i = index[0];
        if self.k >= 0 {
            self.source.at(&[i, i + self.k as usize])
        } else {
            self.source.at(&[i + self.k.unsigned_abs(), i])
        }
    }
}

/// Lazy 2-D view laying a 1-D source on the offset-`k` diagonal of an
/// otherwise-zero square matrix.
///
/// The matrix extent is `source.size() + |k|` on each axis, so the whole
/// source fits on the selected diagonal. Off-diagonal elements read as the
/// additive identity.
#[derive(Debug)]
pub struct DiagMatrix<'a, V: TensorView> {
    source: &'a V,
    k: isize,
}

impl<'a, V: TensorView> DiagMatrix<'a, V> {
    pub fn new(source: &'a V, k: isize) -> Self {
        DiagMatrix { source, k }
    }

    fn extent(&self) -> usize {
        self.source.size() + self.k.unsigned_abs()
    }
}

impl<'a, V: TensorView> TensorView for DiagMatrix<'a, V>
where
    V::Elem: Zero,
{
    type Elem = V::Elem;

    fn shape(&self) -> Vec<usize> {
        let n = self.extent();
        vec![n, n]
    }

    fn layout(&self) -> Order {
        self.source.layout()
    }

    fn at(&self, index: &[usize]) -> Result<V::Elem, NdViewError> {
        check_bounds(index, &self.shape())?;
        let (i, j) = (index[0], index[1]);
        if self.k >= 0 {
            let k = self.k as usize;
            if j >= k && j - k == i {
                return self.source.at(&[i]);
            }
        } else {
            let k = self.k.unsigned_abs();
            if i >= k && i - k == j {
                return self.source.at(&[j]);
            }
        }
        Ok(V::Elem::zero())
    }
}
