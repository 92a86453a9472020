use crate::error::NdViewError;
use crate::tensor::utils::check_bounds;
use crate::types::Order;
use crate::view::TensorView;

/// Lazy 1-D concatenation view: the elements of `first` followed by the
/// elements of `second`.
///
/// Index `i < first.size()` delegates to `first`; larger indices delegate to
/// `second` at `i - first.size()`. Both sources are expected to be 1-D; no
/// further shape compatibility is checked.
#[derive(Debug)]
pub struct Concat<'a, A, B>
where
    A: TensorView,
    B: TensorView<Elem = A::Elem>,
{
    first: &'a A,
    second: &'a B,
}

impl<'a, A, B> Concat<'a, A, B>
where
    A: TensorView,
    B: TensorView<Elem = A::Elem>,
{
    pub fn new(first: &'a A, second: &'a B) -> Self {
        Concat { first, second }
    }
}

impl<'a, A, B> TensorView for Concat<'a, A, B>
where
    A: TensorView,
    B: TensorView<Elem = A::Elem>,
{
    type Elem = A::Elem;

    fn shape(&self) -> Vec<usize> {
        vec![self.first.size() + self.second.size()]
    }

    fn layout(&self) -> Order {
        self.first.layout()
    }

    fn at(&self, index: &[usize]) -> Result<A::Elem, NdViewError> {
        check_bounds(index, &self.shape())?;
        let i = index[0];
        let split = self.first.size();
        if i < split {
            self.first.at(&[i])
        } else {
            self.second.at(&[i - split])
        }
    }
}
