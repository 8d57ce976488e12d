use serde_json::{json, Value};

use crate::{transactions::models::Transaction, users::models::User};

pub const TEST_CREATED: &str = "2024-11-10T12:03:34Z";

pub fn user_json(id: i64, balance: i64) -> Value {
    json!({
        "id": id,
        "name": format!("tester {}", id),
        "email": format!("user{}@mail.com", id),
        "balance": balance,
        "isDisabled": false,
    })
}

pub fn transaction_json(id: i64, user: Value, amount: i64) -> Value {
    json!({
        "id": id,
        "user": user,
        "amount": amount,
        "created": TEST_CREATED,
        "isDeleted": false,
        "isDeletable": true,
    })
}

pub fn user(id: i64, balance: i64) -> User {
    serde_json::from_value(user_json(id, balance)).unwrap()
}

pub fn transaction(id: i64, user_id: i64, amount: i64) -> Transaction {
    serde_json::from_value(transaction_json(id, user_json(user_id, 0), amount)).unwrap()
}
