pub mod config;
pub mod generator;
pub mod ir;
pub mod naming;
pub mod normalize;
pub mod result;
pub mod table;
pub mod table2ir;
mod validate;

pub use config::GeneratorConfig;
pub use generator::{Finalized, GeneratedUnit, Generator, RenderedFile};
pub use naming::{NamingMode, compute_flat_name, unescape_flat_name};
pub use normalize::{NormalizeContext, normalize_type};
pub use table::{BindingEntry, BindingGroup, BindingTable};
pub use result::{BackendError, BackendResult, ConfigError, GenerateError};
