use std::collections::BTreeMap;

use crate::store::{Action, AppState};

use super::models::Transaction;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionState {
    by_id: BTreeMap<i64, Transaction>,
}

impl TransactionState {
    /// Inserts `tx`, replacing any record with the same id.
    pub fn upsert(&mut self, tx: Transaction) {
        self.by_id.insert(tx.id, tx);
    }

    pub fn get(&self, id: i64) -> Option<&Transaction> {
        self.by_id.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

pub fn reducer(mut state: TransactionState, action: &Action) -> TransactionState {
    match action {
        Action::TransactionsLoaded(txs) => {
            for tx in txs {
                state.upsert(tx.clone());
            }
            state
        }
        _ => state,
    }
}

pub fn get_transaction_state(state: &AppState) -> &TransactionState {
    &state.transaction
}

pub fn get_transaction(state: &AppState, id: i64) -> Option<&Transaction> {
    get_transaction_state(state).get(id)
}

pub fn is_transaction_deletable(state: &AppState, id: i64) -> bool {
    get_transaction(state, id).map(|tx| tx.is_deletable).unwrap_or(false)
}

/// Transactions owned by `user_id`, newest first
pub fn get_user_transactions(state: &AppState, user_id: i64) -> Vec<&Transaction> {
    let mut txs = get_transaction_state(state)
        .iter()
        .filter(|tx| tx.user.id == user_id)
        .collect::<Vec<_>>();
    txs.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
    txs
}
