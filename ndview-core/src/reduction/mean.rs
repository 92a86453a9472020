use crate::error::NdViewError;
use crate::numeric::Modulus;
use num_traits::{Float, NumCast, Zero};
use std::ops::{Div, Sub};

// usize -> real cast used by the normalizing divisions below.
fn real_count<R: Float + NumCast>(n: usize) -> Result<R, NdViewError> {
    R::from(n).ok_or_else(|| {
        NdViewError::InternalError(format!("element count {} not representable as a real", n))
    })
}

/// Arithmetic mean of a range. Complex inputs yield a complex mean.
///
/// # Errors
/// [`NdViewError::EmptyInput`] on an empty range.
pub fn mean<I, T>(values: I) -> Result<T, NdViewError>
where
    I: IntoIterator<Item = T>,
    T: Zero + Modulus + Div<<T as Modulus>::Real, Output = T>,
{
    let mut acc = T::zero();
    let mut n = 0usize;
    for v in values {
        acc = acc + v;
        n += 1;
    }
    if n == 0 {
        return Err(NdViewError::EmptyInput {
            operation: "mean".to_string(),
        });
    }
    Ok(acc / real_count::<T::Real>(n)?)
}

/// Variance of a range with `ddof` delta degrees of freedom.
///
/// Computed as the mean squared deviation from the mean, normalized by
/// `n - ddof` (`ddof = 0` gives the population variance, `ddof = 1` the
/// unbiased sample variance). Deviations pass through the modulus before
/// squaring, so complex elements produce a real, non-negative variance.
///
/// # Errors
/// [`NdViewError::EmptyInput`] on an empty range,
/// [`NdViewError::InvalidDdof`] when `ddof >= n`.
pub fn var<I, T>(values: I, ddof: usize) -> Result<<T as Modulus>::Real, NdViewError>
where
    I: IntoIterator<Item = T>,
    T: Zero + Modulus + Sub<Output = T> + Div<<T as Modulus>::Real, Output = T>,
{
    let data: Vec<T> = values.into_iter().collect();
    if data.is_empty() {
        return Err(NdViewError::EmptyInput {
            operation: "var".to_string(),
        });
    }
    if data.len() <= ddof {
        return Err(NdViewError::InvalidDdof {
            ddof,
            len: data.len(),
        });
    }

    let center = mean(data.iter().copied())?;
    let mut acc = <T as Modulus>::Real::zero();
    for &v in &data {
        let deviation = (v - center).modulus();
        acc = acc + deviation * deviation;
    }
    Ok(acc / real_count::<T::Real>(data.len() - ddof)?)
}

/// Standard deviation: the square root of [`var`].
pub fn stddev<I, T>(values: I, ddof: usize) -> Result<<T as Modulus>::Real, NdViewError>
where
    I: IntoIterator<Item = T>,
    T: Zero + Modulus + Sub<Output = T> + Div<<T as Modulus>::Real, Output = T>,
{
    Ok(var(values, ddof)?.sqrt())
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
