use crate::error::NdViewError;

/// Maximum element of a range.
///
/// Linear scan with strict comparison; ties keep the earliest value found.
///
/// # Errors
/// [`NdViewError::EmptyInput`] on an empty range.
pub fn max<I>(values: I) -> Result<I::Item, NdViewError>
where
    I: IntoIterator,
    I::Item: PartialOrd + Copy,
{
    let mut iter = values.into_iter();
    let first = iter.next().ok_or_else(|| NdViewError::EmptyInput {
        operation: "max".to_string(),
    })?;
    Ok(iter.fold(first, |best, v| if best < v { v } else { best }))
}

/// Minimum element of a range. Ties keep the earliest value found.
///
/// # Errors
/// [`NdViewError::EmptyInput`] on an empty range.
pub fn min<I>(values: I) -> Result<I::Item, NdViewError>
where
    I: IntoIterator,
    I::Item: PartialOrd + Copy,
{
    let mut iter = values.into_iter();
    let first = iter.next().ok_or_else(|| NdViewError::EmptyInput {
        operation: "min".to_string(),
    })?;
    Ok(iter.fold(first, |best, v| if v < best { v } else { best }))
}

/// 0-based position of the first occurrence of the maximal value.
///
/// # Errors
/// [`NdViewError::EmptyInput`] on an empty range.
pub fn argmax<I>(values: I) -> Result<usize, NdViewError>
where
    I: IntoIterator,
    I::Item: PartialOrd + Copy,
{
    let mut iter = values.into_iter();
    let mut best = iter.next().ok_or_else(|| NdViewError::EmptyInput {
        operation: "argmax".to_string(),
    })?;
    let mut best_pos = 0;
    for (offset, v) in iter.enumerate() {
        // Strict comparison keeps the first occurrence on ties.
        if best < v {
            best = v;
            best_pos = offset + 1;
        }
    }
    Ok(best_pos)
}

/// 0-based position of the first occurrence of the minimal value.
///
/// # Errors
/// [`NdViewError::EmptyInput`] on an empty range.
pub fn argmin<I>(values: I) -> Result<usize, NdViewError>
where
    I: IntoIterator,
    I::Item: PartialOrd + Copy,
{
    let mut iter = values.into_iter();
    let mut best = iter.next().ok_or_else(|| NdViewError::EmptyInput {
        operation: "argmin".to_string(),
    })?;
    let mut best_pos = 0;
    for (offset, v) in iter.enumerate() {
        if v < best {
            best = v;
            best_pos = offset + 1;
        }
    }
    Ok(best_pos)
}

#[cfg(test)]
#[path = "minmax_test.rs"]
mod tests;
