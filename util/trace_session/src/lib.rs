//! Coordination of a single trace recording: a state machine, a controller driving a tracing
//! backend through it, and an instance slot that lets tests swap out a production binding.

mod controller;
mod result;
mod slot;
mod state;

pub use controller::*;
pub use result::*;
pub use slot::*;
pub use state::*;
