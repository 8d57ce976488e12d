pub mod alerts;
pub mod api_client;
pub mod articles;
pub mod config;
pub mod error_handler;
pub mod forms;
pub mod sound;
pub mod store;
pub mod transactions;
pub mod users;

#[cfg(test)]
mod test_utils;
