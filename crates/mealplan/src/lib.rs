mod classify;
mod error;
mod nutrition;
mod plan;
mod progress;
mod saved;

pub use classify::*;
pub use error::*;
pub use nutrition::*;
pub use plan::*;
pub use progress::*;
pub use saved::*;
