//! Headless form state. Each form owns its input, validates it locally and hands it to a service;
//! the value survives a failed submit so the user can try again.

pub mod article;
pub mod button_set;
pub mod custom_transaction;
pub mod error;
pub mod user_edit;
pub mod validator;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Deposit,
    Dispense,
}

impl Direction {
    pub fn multiplier(&self) -> i64 {
        match self {
            Direction::Deposit => 1,
            Direction::Dispense => -1,
        }
    }

    pub fn signed(&self, magnitude: i64) -> i64 {
        magnitude * self.multiplier()
    }
}
