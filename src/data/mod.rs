mod layout;
mod project;

pub use layout::*;
pub use project::*;
