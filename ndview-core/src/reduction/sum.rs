use num_traits::{One, Zero};
use std::ops::{Add, Mul};

/// Sum of a range.
///
/// Linear accumulation; an empty range yields the additive identity.
pub fn sum<I>(values: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero + Add<Output = I::Item> + Copy,
{
    values.into_iter().fold(I::Item::zero(), |acc, v| acc + v)
}

/// Product of a range.
///
/// Linear accumulation; an empty range yields the multiplicative identity.
pub fn product<I>(values: I) -> I::Item
where
    I: IntoIterator,
    I::Item: One + Mul<Output = I::Item> + Copy,
{
    values.into_iter().fold(I::Item::one(), |acc, v| acc * v)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
