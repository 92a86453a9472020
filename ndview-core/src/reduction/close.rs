use crate::error::NdViewError;
use crate::numeric::ClampParts;
use num_traits::Float;
use std::fmt::Debug;

/// Approximate equality under relative and absolute tolerances.
///
/// Two finite numbers are close when
/// `|a - b| <= max(rtol * max(|a|, |b|), atol)`. If either operand is NaN the
/// result is always false; two infinities are close iff they share a sign.
///
/// # Errors
/// [`NdViewError::InvalidTolerance`] if either tolerance is negative or NaN.
pub fn is_close<T>(a: T, b: T, rtol: T, atol: T) -> Result<bool, NdViewError>
where
    T: Float + Debug,
{
    if rtol < T::zero() || atol < T::zero() || rtol.is_nan() || atol.is_nan() {
        return Err(NdViewError::InvalidTolerance {
            message: format!(
                "rtol = {:?}, atol = {:?}, both must be non-negative",
                rtol, atol
            ),
        });
    }
    if a.is_nan() || b.is_nan() {
        return Ok(false);
    }
    if a.is_infinite() || b.is_infinite() {
        // Equal infinities (same sign) compare equal; anything else is not close.
        return Ok(a == b);
    }
    let tolerance = T::max(rtol * T::max(a.abs(), b.abs()), atol);
    Ok((a - b).abs() <= tolerance)
}

/// Clamps `value` into `[a_min, a_max]`.
///
/// Values below `a_min` become `a_min`, values above `a_max` become `a_max`.
/// Complex values clamp their real and imaginary parts independently.
pub fn clamp<T: ClampParts>(value: T, a_min: T, a_max: T) -> T {
    value.clamp_parts(a_min, a_max)
}

#[cfg(test)]
#[path = "close_test.rs"]
mod tests;
