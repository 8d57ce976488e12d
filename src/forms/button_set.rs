use crate::transactions::{models::{CreateTransactionParams, Transaction}, TransactionService};

/// 0.50, 1, 2 and 5 in cents
pub const QUICK_VALUES: [i64; 4] = [50, 100, 200, 500];

///
/// Row of one-tap transaction buttons. `positive` decides whether presses deposit or dispense.
///
pub struct TransactionButtonSet {
    pub positive: bool,
    pub values: Vec<i64>,
}

impl TransactionButtonSet {
    pub fn new(positive: bool) -> Self {
        TransactionButtonSet { positive, values: QUICK_VALUES.to_vec() }
    }

    pub fn amount_for(&self, value: i64) -> i64 {
        if self.positive { value } else { -value }
    }

    pub async fn add_transaction(
        &self,
        tx_svc: &(dyn TransactionService + Send + Sync),
        user_id: i64,
        value: i64,
    ) -> Option<Transaction> {
        tx_svc.create_transaction(user_id, CreateTransactionParams::with_amount(self.amount_for(value))).await
    }
}
