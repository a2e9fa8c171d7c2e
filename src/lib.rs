pub mod catalog;
pub mod cli;
pub mod config;
pub mod observability;
pub mod seed;

pub use catalog::Catalog;
pub use config::Config;
