// Core modules of the crate
pub mod error;
pub mod numeric;
pub mod reduction;
pub mod tensor;
pub mod types;
pub mod utils;
pub mod view;

// Re-export the main types so they are accessible directly via `ndview_core::...`
pub use error::NdViewError;
pub use tensor::Tensor;
pub use types::Order;
pub use view::{
    Concat, ConjTranspose, DiagMatrix, Diagonal, Eye, Reverse, Roll, Sequence, TensorView,
    Transpose,
};

// Re-export traits required by public functions/structs
pub use num_traits;
