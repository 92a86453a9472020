use crate::error::NdViewError;
use crate::numeric::Numeric;
use std::cmp::Ordering;

// Comparator for partial selection; incomparable pairs (NaN) rank as equal.
pub(crate) fn cmp_partial<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Median of a range.
///
/// Uses partial selection (`select_nth_unstable_by`) on a temporary copy, so
/// the expected cost is linear rather than a full sort. Even-length ranges
/// average the two central order statistics.
///
/// # Errors
/// [`NdViewError::EmptyInput`] on an empty range.
pub fn median<I, T>(values: I) -> Result<T, NdViewError>
where
    I: IntoIterator<Item = T>,
    T: Numeric,
{
    let mut data: Vec<T> = values.into_iter().collect();
    let n = data.len();
    if n == 0 {
        return Err(NdViewError::EmptyInput {
            operation: "median".to_string(),
        });
    }

    let mid = n / 2;
    let (lower, pivot, _) = data.select_nth_unstable_by(mid, cmp_partial);
    let upper_central = *pivot;
    if n % 2 == 1 {
        return Ok(upper_central);
    }

    // The lower partition holds the n/2 smallest values; its maximum is the
    // other central order statistic.
    let mut lower_central = lower[0];
    for &v in lower.iter().skip(1) {
        if lower_central < v {
            lower_central = v;
        }
    }
    let two = T::one() + T::one();
    Ok((lower_central + upper_central) / two)
}

#[cfg(test)]
#[path = "median_test.rs"]
mod tests;
