mod fs;
pub mod paths;
mod render_reports;
mod result;
mod session;

pub use fs::*;
pub use paths::*;
pub use render_reports::*;
pub use result::*;
pub use session::*;
