use crate::tensor::utils::decode_linear;
use crate::types::Order;
use crate::view::TensorView;

/// Const, bidirectional, exact-size iterator over a view's elements.
///
/// The iterator keeps a pair of linear cursors and decodes each position into
/// a multi-index according to the requested traversal [`Order`], so the same
/// view can be walked row-major or column-major regardless of how its source
/// is stored. The shape is sampled once at creation; resizing a source while
/// an iterator is live is outside the supported contract.
#[derive(Debug)]
pub struct ViewIter<'a, V: TensorView> {
    view: &'a V,
    shape: Vec<usize>,
    order: Order,
    front: usize,
    /// One past the last unconsumed linear position.
    back: usize,
    scratch: Vec<usize>,
}

impl<'a, V: TensorView> ViewIter<'a, V> {
    pub(crate) fn new(view: &'a V, order: Order) -> Self {
        let shape = view.shape();
        let total = shape.iter().product();
        let rank = shape.len();
        ViewIter {
            view,
            shape,
            order,
            front: 0,
            back: total,
            scratch: vec![0; rank],
        }
    }

    fn element_at(&mut self, linear: usize) -> V::Elem {
        decode_linear(linear, &self.shape, self.order, &mut self.scratch);
        // Linear cursors stay within [0, total), so the decoded index is
        // always a valid address of the sampled shape.
        self.view
            .at(&self.scratch)
            .expect("iterator index within bounds")
    }
}

impl<'a, V: TensorView> Iterator for ViewIter<'a, V> {
    type Item = V::Elem;

    fn next(&mut self) -> Option<V::Elem> {
        if self.front >= self.back {
            return None;
        }
        let item = self.element_at(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, V: TensorView> DoubleEndedIterator for ViewIter<'a, V> {
    fn next_back(&mut self) -> Option<V::Elem> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.element_at(self.back))
    }
}

impl<'a, V: TensorView> ExactSizeIterator for ViewIter<'a, V> {}
