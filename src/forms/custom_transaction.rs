use crate::{
    config::PaymentConfig,
    store::AppState,
    transactions::{models::{CreateTransactionParams, Transaction}, TransactionService},
    users::state::get_user,
};

use super::{error::*, validator::is_transaction_valid, Direction};

///
/// Free-form deposit / dispense input for one user.
///
pub struct CustomTransactionForm {
    user_id: i64,
    value: i64,
    payment: PaymentConfig,
}

impl CustomTransactionForm {
    pub fn new(user_id: i64, payment: PaymentConfig) -> Self {
        CustomTransactionForm { user_id, value: 0, payment }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    pub fn is_enabled(&self, direction: Direction) -> bool {
        match direction {
            Direction::Deposit => self.payment.deposit.custom,
            Direction::Dispense => self.payment.dispense.custom,
        }
    }

    pub fn is_valid(&self, state: &AppState, direction: Direction) -> bool {
        self.is_enabled(direction) && is_transaction_valid(
            self.value,
            get_user(state, self.user_id),
            direction,
            &self.payment.boundary,
        )
    }

    /// Submits the entered value. The value is cleared only when the backend created the transaction.
    pub async fn submit(
        &mut self,
        state: &AppState,
        tx_svc: &(dyn TransactionService + Send + Sync),
        direction: Direction,
    ) -> Result<Option<Transaction>> {
        if !self.is_enabled(direction) {
            return Err(Error::DirectionDisabled(direction));
        }
        if self.value <= 0 {
            return Err(Error::NonPositiveAmount(self.value));
        }
        if !self.is_valid(state, direction) {
            return Err(Error::NotAllowed(direction, self.value));
        }

        let params = CreateTransactionParams::with_amount(direction.signed(self.value));
        let result = tx_svc.create_transaction(self.user_id, params).await;

        if result.is_some() {
            self.value = 0;
        }
        Ok(result)
    }
}
