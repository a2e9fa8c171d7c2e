pub mod mealplan;
pub mod nutrition;
pub mod recipe;
pub mod shopping;
pub mod user;

pub use mealplan::*;
pub use nutrition::*;
pub use recipe::*;
pub use shopping::*;
pub use user::*;
