/// Defines the traversal / storage orders for tensors and views.
///
/// A view's iteration order can be chosen independently of the `layout()`
/// of the underlying storage: the order only decides which axis varies
/// fastest while walking the logical index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// C order: the last index varies fastest.
    #[default]
    RowMajor,
    /// Fortran order: the first index varies fastest.
    ColMajor,
}
