use crate::error::NdViewError;
use crate::tensor::utils::check_bounds;
use crate::types::Order;
use crate::view::TensorView;

/// Lazy view presenting selected axes of its source circularly shifted.
///
/// Shift amounts are zipped with the axis list: axis `axes[i]` is shifted by
/// `shifts[i]`. Logical index `i` on a shifted axis is remapped to
/// `(i + s) mod extent`, with the residue normalized into `[0, extent)` for
/// negative or oversized shifts.
///
/// Sign convention: a positive shift moves elements toward **lower** logical
/// indices, so `roll([1, 2, 3, 4], +1)` reads as `[2, 3, 4, 1]`. Rolling by
/// `-s` on the same axes undoes a roll by `s`.
#[derive(Debug)]
pub struct Roll<'a, V: TensorView> {
    source: &'a V,
    shifts: Vec<isize>,
    axes: Vec<usize>,
}

impl<'a, V: TensorView> Roll<'a, V> {
    pub fn new(source: &'a V, shifts: Vec<isize>, axes: Vec<usize>) -> Self {
        Roll {
            source,
            shifts,
            axes,
        }
    }

    /// Rolls a single axis; shorthand for the common 1-axis case.
    pub fn along(source: &'a V, shift: isize, axis: usize) -> Self {
        Roll::new(source, vec![shift], vec![axis])
    }
}

impl<'a, V: TensorView> TensorView for Roll<'a, V> {
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
        for (&axis, &shift) in self.axes.iter().zip(self.shifts.iter()) {
            if axis < shape.len() && shape[axis] > 0 {
                let extent = shape[axis] as isize;
                mapped[axis] = (index[axis] as isize + shift).rem_euclid(extent) as usize;
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
    fn test_roll_positive_shift() {
        let t = Tensor::new(vec![1.0f64, 2.0, 3.0, 4.0], vec![4]).unwrap();
        let r = Roll::along(&t, 1, 0);
        let values: Vec<f64> = r.iter(Order::RowMajor).collect();
        // First element moves to the end under a +1 shift.
        assert_eq!(values, vec![2.0, 3.0, 4.0, 1.0]);
    }

    #[test]
    fn test_roll_negative_shift() {
        let t = Tensor::new(vec![1.0f64, 2.0, 3.0, 4.0], vec![4]).unwrap();
        let r = Roll::along(&t, -1, 0);
        let values: Vec<f64> = r.iter(Order::RowMajor).collect();
        assert_eq!(values, vec![4.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_roll_oversized_shift_wraps() {
        let t = Tensor::new(vec![1.0f64, 2.0, 3.0, 4.0], vec![4]).unwrap();
        let plain = Roll::along(&t, 1, 0).copy().unwrap();
        let wrapped = Roll::along(&t, 9, 0).copy().unwrap(); // 9 ≡ 1 (mod 4)
        assert_eq!(plain.data(), wrapped.data());

        let negative = Roll::along(&t, -7, 0).copy().unwrap(); // -7 ≡ 1 (mod 4)
        assert_eq!(plain.data(), negative.data());
    }

    #[test]
    fn test_roll_round_trip() {
        let t = Tensor::new((1..=12).map(|x| x as f64).collect(), vec![3, 4]).unwrap();
        let rolled = t.rolled(vec![2, -1], vec![0, 1]);
        let back = rolled.rolled(vec![-2, 1], vec![0, 1]);
        assert_eq!(back.copy().unwrap().data(), t.data());
    }

    #[test]
    fn test_roll_2d_single_axis() {
        let t = Tensor::new(vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
        let r = Roll::along(&t, 1, 1);
        assert_eq!(r.at(&[0, 0]).unwrap(), 2.0);
        assert_eq!(r.at(&[0, 2]).unwrap(), 1.0);
        assert_eq!(r.at(&[1, 0]).unwrap(), 5.0);
    }

    #[test]
    fn test_roll_out_of_bounds() {
        let t = Tensor::new(vec![1.0f64, 2.0], vec![2]).unwrap();
        let r = Roll::along(&t, 1, 0);
        assert!(matches!(
            r.at(&[5]),
            Err(NdViewError::IndexOutOfBounds { .. })
        ));
    }
}
