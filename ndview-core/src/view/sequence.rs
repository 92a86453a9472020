use crate::error::NdViewError;
use crate::numeric::Numeric;
use crate::tensor::utils::check_bounds;
use crate::types::Order;
use crate::view::TensorView;

/// Generated 1-D view of evenly spaced values. Owns only scalars; there is no
/// backing source.
///
/// In linear mode element `i` is `start + i * step`. In log mode it is
/// `base^(start + i * step)`, i.e. the exponents are evenly spaced.
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    start: T,
    step: T,
    count: usize,
    log_base: Option<T>,
}

impl<T: Numeric> Sequence<T> {
    /// Evenly spaced values `start, start + step, ...` of the given length.
    pub fn new(start: T, step: T, count: usize) -> Self {
        Sequence {
            start,
            step,
            count,
            log_base: None,
        }
    }

    /// `count` samples spaced evenly over the inclusive interval
    /// `[start, stop]`.
    pub fn linspace(start: T, stop: T, count: usize) -> Self {
        let step = if count > 1 {
            (stop - start) / T::from(count - 1).unwrap_or_else(T::one)
        } else {
            T::zero()
        };
        Sequence::new(start, step, count)
    }

    /// `base^(start + i * step)` for each element index `i`.
    pub fn log_steps(start: T, step: T, count: usize, base: T) -> Self {
        Sequence {
            start,
            step,
            count,
            log_base: Some(base),
        }
    }

    /// `count` samples whose exponents are spaced evenly over `[start, stop]`,
    /// i.e. `base^start ..= base^stop`.
    pub fn logspace(start: T, stop: T, count: usize, base: T) -> Self {
        let mut seq = Sequence::linspace(start, stop, count);
        seq.log_base = Some(base);
        seq
    }
}

impl<T: Numeric> TensorView for Sequence<T> {
    type Elem = T;

    fn shape(&self) -> Vec<usize> {
        vec![self.count]
    }

    fn layout(&self) -> Order {
        Order::RowMajor
    }

    fn at(&self, index: &[usize]) -> Result<T, NdViewError> {
        check_bounds(index, &[self.count])?;
        let i = T::from(index[0]).ok_or_else(|| {
            NdViewError::InternalError(format!(
                "sequence index {} not representable in the element type",
                index[0]
            ))
        })?;
        let value = self.start + self.step * i;
        match self.log_base {
            Some(base) => Ok(base.powf(value)),
            None => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sequence_determinism() {
        let s = Sequence::new(2.0f64, 0.5, 5);
        assert_eq!(s.shape(), vec![5]);
        for i in 0..5 {
            assert_eq!(s.at(&[i]).unwrap(), 2.0 + i as f64 * 0.5);
        }
    }

    #[test]
    fn test_linspace_endpoints() {
        let s = Sequence::linspace(0.0f64, 1.0, 11);
        assert_eq!(s.size(), 11);
        assert_relative_eq!(s.at(&[0]).unwrap(), 0.0);
        assert_relative_eq!(s.at(&[10]).unwrap(), 1.0);
        assert_relative_eq!(s.at(&[5]).unwrap(), 0.5);
    }

    #[test]
    fn test_linspace_single_sample() {
        let s = Sequence::linspace(3.0f64, 9.0, 1);
        assert_eq!(s.at(&[0]).unwrap(), 3.0);
    }

    #[test]
    fn test_logspace() {
        let s = Sequence::logspace(0.0f64, 3.0, 4, 10.0);
        let values: Vec<f64> = s.iter(Order::RowMajor).collect();
        for (value, expected) in values.iter().zip([1.0, 10.0, 100.0, 1000.0]) {
            assert_relative_eq!(*value, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_sequence_copy() {
        let owned = Sequence::new(1.0f32, 1.0, 3).copy().unwrap();
        assert_eq!(owned.data(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sequence_out_of_bounds() {
        let s = Sequence::new(0.0f64, 1.0, 2);
        assert!(matches!(
            s.at(&[2]),
            Err(NdViewError::IndexOutOfBounds { .. })
        ));
    }
}
