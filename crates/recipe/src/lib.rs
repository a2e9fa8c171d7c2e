mod filter;
mod query;
mod sort;

pub use filter::*;
pub use query::*;
pub use sort::*;
