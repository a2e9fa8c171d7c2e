use thiserror::Error;

pub type ShoppingResult<T> = Result<T, ShoppingError>;

#[derive(Error, Debug, PartialEq)]
pub enum ShoppingError {
    #[error("Grocery item name must not be empty")]
    EmptyName,

    #[error("Grocery item not found: {0}")]
    ItemNotFound(String),
}
