// src/view/mod.rs
//
// The lazy structural views. Every view is a cheap adapter holding a
// reference to its source tensor(s) plus small remapping parameters; element
// values are computed on access and never cached.

pub mod concat;
pub mod diagonal;
pub mod identity;
pub mod iter;
pub mod reverse;
pub mod roll;
pub mod sequence;
pub mod transpose;

pub use concat::Concat;
pub use diagonal::{DiagMatrix, Diagonal};
pub use identity::Eye;
pub use iter::ViewIter;
pub use reverse::Reverse;
pub use roll::Roll;
pub use sequence::Sequence;
pub use transpose::{ConjTranspose, Transpose};

use crate::error::NdViewError;
use crate::numeric::Conjugate;
use crate::tensor::Tensor;
use crate::types::Order;

/// Read-only, tensor-like access computed from zero or more underlying sources.
///
/// This is the capability interface shared by the dense [`Tensor`] and all
/// structural views. Implementors own no element storage beyond small scalar
/// metadata; a view borrows its source, so the source must outlive the view
/// (enforced by the borrow checker).
///
/// Views are logically immutable: no operation here ever mutates a source.
pub trait TensorView {
    type Elem: Copy;

    /// The logical shape of the view.
    ///
    /// Recomputed from the construction parameters and the current source
    /// shape on every call; never cached.
    fn shape(&self) -> Vec<usize>;

    /// Extent of a single axis.
    ///
    /// Panics if `axis` is not smaller than the rank.
    fn shape_at(&self, axis: usize) -> usize {
        let shape = self.shape();
        assert!(
            axis < shape.len(),
            "axis {} out of range for rank {}",
            axis,
            shape.len()
        );
        shape[axis]
    }

    /// Total number of elements.
    fn size(&self) -> usize {
        self.shape().iter().product()
    }

    /// Storage order of the underlying source.
    ///
    /// Views only remap logical indices, they never reorder physical storage,
    /// so this always reports the source's layout. Generated views with no
    /// source ([`Eye`], [`Sequence`]) report [`Order::RowMajor`].
    fn layout(&self) -> Order;

    /// Element at a logical multi-index, by value.
    ///
    /// # Errors
    /// [`NdViewError::IndexOutOfBounds`] / [`NdViewError::RankMismatch`] when
    /// the index does not address an element of `shape()`.
    fn at(&self, index: &[usize]) -> Result<Self::Elem, NdViewError>;

    /// Iterates the view's elements in an explicit traversal order.
    ///
    /// The order is independent of `layout()`: any view can be walked either
    /// row-major or column-major regardless of how its source is stored.
    fn iter(&self, order: Order) -> ViewIter<'_, Self>
    where
        Self: Sized,
    {
        ViewIter::new(self, order)
    }

    /// Materializes the view into a newly allocated, owned, row-major tensor.
    ///
    /// This is the only way a view's data becomes independently owned and
    /// mutable; the view itself is left untouched.
    fn copy(&self) -> Result<Tensor<Self::Elem>, NdViewError>
    where
        Self: Sized,
    {
        let shape = self.shape();
        log::debug!(
            "materializing view of shape {:?} ({} elements)",
            shape,
            self.size()
        );
        let data: Vec<Self::Elem> = self.iter(Order::RowMajor).collect();
        Tensor::new(data, shape)
    }

    // --- Structural adapters ---
    // Convenience constructors so views chain the way tensor methods do.

    /// View with the given axes index-reversed.
    fn reversed(&self, axes: Vec<usize>) -> Reverse<'_, Self>
    where
        Self: Sized,
    {
        Reverse::new(self, axes)
    }

    /// View with the given axes circularly shifted by the paired amounts.
    fn rolled(&self, shifts: Vec<isize>, axes: Vec<usize>) -> Roll<'_, Self>
    where
        Self: Sized,
    {
        Roll::new(self, shifts, axes)
    }

    /// Transposed view of a matrix.
    fn transposed(&self) -> Transpose<'_, Self>
    where
        Self: Sized,
    {
        Transpose::new(self)
    }

    /// Conjugate-transposed view of a matrix.
    fn conj_transposed(&self) -> ConjTranspose<'_, Self>
    where
        Self: Sized,
        Self::Elem: Conjugate,
    {
        ConjTranspose::new(self)
    }

    /// 1-D view of the offset-`k` diagonal of a matrix.
    fn diagonal(&self, k: isize) -> Diagonal<'_, Self>
    where
        Self: Sized,
    {
        Diagonal::new(self, k)
    }
}

#[cfg(test)]
#[path = "roundtrip_test.rs"]
mod roundtrip_tests;
