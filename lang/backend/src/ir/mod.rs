//! Java class model of the generated sources.
//!
//! The IR knows nothing about declarations or naming: it is produced from the finalized binding
//! table (see [`crate::table2ir`]) and printed to Java text through the pretty printer.

pub mod file;
pub mod table;
pub mod wrapper;

pub use file::*;
pub use table::*;
pub use wrapper::*;
