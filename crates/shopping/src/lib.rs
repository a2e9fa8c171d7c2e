mod categorize;
mod consolidate;
mod error;
mod list;

pub use categorize::*;
pub use consolidate::*;
pub use error::*;
pub use list::*;
