//! Declarations of natives interfaces as they are handed to the generator.
//!
//! A processing unit consists of one or more rounds, and every round is a list of
//! [`InterfaceDecl`]s. Declarations are usually read from declaration files, see [`parse_round`].

mod decls;
mod ident;
mod input;
mod result;
mod types;

pub use decls::*;
pub use ident::*;
pub use input::*;
pub use result::*;
pub use types::*;
