use thiserror::Error;

use super::Direction;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(i64),
    #[error("Custom {0:?} is disabled by the payment configuration")]
    DirectionDisabled(Direction),
    #[error("{0:?} of {1} is not allowed for this user and balance boundary")]
    NotAllowed(Direction, i64),
    #[error("Name must be between 1 and 64 characters, got {0}")]
    InvalidNameLength(usize),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Field '{0}' is required")]
    MissingField(&'static str),
}
