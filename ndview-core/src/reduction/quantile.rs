use crate::error::NdViewError;
use crate::numeric::Numeric;
use crate::reduction::median::cmp_partial;
use std::str::FromStr;

/// How to resolve a quantile that falls between two order statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuantileMethod {
    /// The lower of the two bracketing order statistics.
    Lower,
    /// The higher of the two.
    Higher,
    /// Whichever fractional position is numerically closer to `q`;
    /// exact ties resolve to the higher statistic.
    Nearest,
    /// Arithmetic mean of the two.
    Midpoint,
    /// Linear interpolation between the two (the default).
    #[default]
    Linear,
}

impl FromStr for QuantileMethod {
    type Err = NdViewError;

    fn from_str(s: &str) -> Result<Self, NdViewError> {
        match s {
            "lower" => Ok(QuantileMethod::Lower),
            "higher" => Ok(QuantileMethod::Higher),
            "nearest" => Ok(QuantileMethod::Nearest),
            "midpoint" => Ok(QuantileMethod::Midpoint),
            "linear" => Ok(QuantileMethod::Linear),
            other => Err(NdViewError::UnknownQuantileMethod {
                name: other.to_string(),
            }),
        }
    }
}

/// Quantile `q ∈ [0, 1]` of a range.
///
/// The bracketing order statistics at indices `floor((n-1)·q)` and
/// `ceil((n-1)·q)` are found by partial selection on a temporary copy; the
/// `method` decides how they combine. `Linear` interpolates with the
/// fractional weight `t = (n-1)·q - floor((n-1)·q)`.
///
/// # Errors
/// [`NdViewError::InvalidQuantile`] when `q` falls outside `[0, 1]`,
/// [`NdViewError::EmptyInput`] on an empty range.
pub fn quantile<I, T>(values: I, q: f64, method: QuantileMethod) -> Result<T, NdViewError>
where
    I: IntoIterator<Item = T>,
    T: Numeric,
{
    if !(0.0..=1.0).contains(&q) {
        return Err(NdViewError::InvalidQuantile { q });
    }
    let mut data: Vec<T> = values.into_iter().collect();
    let n = data.len();
    if n == 0 {
        return Err(NdViewError::EmptyInput {
            operation: "quantile".to_string(),
        });
    }

    let pos = (n - 1) as f64 * q;
    let lo_idx = pos.floor() as usize;
    let hi_idx = pos.ceil() as usize;

    let hi = {
        let (_, v, _) = data.select_nth_unstable_by(hi_idx, cmp_partial);
        *v
    };
    let lo = if lo_idx == hi_idx {
        hi
    } else {
        let (_, v, _) = data.select_nth_unstable_by(lo_idx, cmp_partial);
        *v
    };

    match method {
        QuantileMethod::Lower => Ok(lo),
        QuantileMethod::Higher => Ok(hi),
        QuantileMethod::Nearest => {
            // Compare distances in index space (both candidates differ from q
            // by these amounts scaled by n-1). Ties go to the higher statistic.
            if pos - (lo_idx as f64) < hi_idx as f64 - pos {
                Ok(lo)
            } else {
                Ok(hi)
            }
        }
        QuantileMethod::Midpoint => {
            let two = T::one() + T::one();
            Ok((lo + hi) / two)
        }
        QuantileMethod::Linear => {
            let t = T::from(pos - lo_idx as f64).ok_or_else(|| {
                NdViewError::InternalError(
                    "interpolation weight not representable in the element type".to_string(),
                )
            })?;
            Ok(lo + (hi - lo) * t)
        }
    }
}

#[cfg(test)]
#[path = "quantile_test.rs"]
mod tests;
