//! Lowering of the finalized binding table to the Java class model.

mod table;
pub mod traits;
mod wrapper;

pub use traits::{IrCtx, ToIR};
pub use wrapper::WrapperSource;
