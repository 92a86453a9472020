use num_traits::Zero;

/// True iff every element is truthy (not equal to the additive identity).
/// Vacuously true on an empty range.
pub fn all<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: Zero + PartialEq,
{
    values.into_iter().all(|v| v != I::Item::zero())
}

/// True iff some element is truthy. Vacuously false on an empty range.
pub fn any<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: Zero + PartialEq,
{
    values.into_iter().any(|v| v != I::Item::zero())
}

/// Number of elements not equal to the additive identity.
pub fn count_nonzero<I>(values: I) -> usize
where
    I: IntoIterator,
    I::Item: Zero + PartialEq,
{
    values
        .into_iter()
        .filter(|v| *v != I::Item::zero())
        .count()
}

#[cfg(test)]
#[path = "predicate_test.rs"]
mod tests;
