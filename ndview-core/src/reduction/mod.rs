// src/reduction/mod.rs
//
// Range reductions over iterator ranges. Each function is a pure computation
// over an `IntoIterator`; views plug in through `TensorView::iter`, but any
// iterator of elements works.

pub mod close;
pub mod mean;
pub mod median;
pub mod minmax;
pub mod predicate;
pub mod quantile;
pub mod sum;
pub mod utils;

pub use close::{clamp, is_close};
pub use mean::{mean, stddev, var};
pub use median::median;
pub use minmax::{argmax, argmin, max, min};
pub use predicate::{all, any, count_nonzero};
pub use quantile::{quantile, QuantileMethod};
pub use sum::{product, sum};
pub use utils::{cumulative, fill_step};
