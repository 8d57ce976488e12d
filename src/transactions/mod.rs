use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::{
    api_client::{post_json, DynApiClient},
    error_handler::error_handler,
    sound::DynSoundPlayer,
    store::{Action, Dispatch, DynStore},
};

use models::*;

pub mod models;
pub mod state;

pub type DynTransactionService = Arc<dyn TransactionService + Send + Sync>;

pub const USER_TRANSACTIONS_LOADING_ERROR: &str = "USER_TRANSACTIONS_LOADING_ERROR";
pub const USER_TRANSACTION_CREATION_ERROR: &str = "USER_TRANSACTION_CREATION_ERROR";
pub const USER_TRANSACTION_DELETION_ERROR: &str = "USER_TRANSACTION_DELETION_ERROR";


#[async_trait]
pub trait TransactionService {
    /// Loads one page of `user_id`'s transactions into the store. `None` requests the first 15.
    async fn load_transactions(
        &self,
        user_id: i64,
        page: Option<Page>,
    ) -> Option<TransactionsResponse>;

    /// Creates a transaction. There is no idempotency key, so every call is a new transaction.
    async fn create_transaction(
        &self,
        user_id: i64,
        params: CreateTransactionParams,
    ) -> Option<Transaction>;

    /// Reverses a transaction. The backend keeps it around flagged as deleted.
    async fn delete_transaction(
        &self,
        user_id: i64,
        transaction_id: i64,
    );
}

pub struct ApiTransactionService {
    api: DynApiClient,
    store: DynStore,
    sound: DynSoundPlayer,
}

impl ApiTransactionService {
    pub fn new_dyn(
        api: DynApiClient,
        store: DynStore,
        sound: DynSoundPlayer,
    ) -> DynTransactionService {
        Arc::new(Self {
            api, store, sound
        })
    }

    fn apply_transaction(&self, tx: &Transaction) {
        // The user snapshot is authoritative for the balance
        self.store.dispatch(Action::UserDetailsLoaded(tx.user.clone()));
        self.store.dispatch(Action::TransactionsLoaded(vec![tx.clone()]));
    }
}

#[async_trait]
impl TransactionService for ApiTransactionService {
    async fn load_transactions(
        &self,
        user_id: i64,
        page: Option<Page>,
    ) -> Option<TransactionsResponse> {
        let page = page.unwrap_or_default();
        let path = format!("user/{}/transaction{}", user_id, page.to_query());

        let data = error_handler::<TransactionsResponse, _>(
            self.store.as_ref(),
            self.api.get(&path),
            USER_TRANSACTIONS_LOADING_ERROR,
        ).await?;

        self.store.dispatch(Action::TransactionsLoaded(data.transactions.clone()));
        Some(data)
    }

    async fn create_transaction(
        &self,
        user_id: i64,
        params: CreateTransactionParams,
    ) -> Option<Transaction> {
        self.sound.play_cash_sound(&params);

        let path = format!("user/{}/transaction", user_id);

        let data = error_handler::<TransactionResponse, _>(
            self.store.as_ref(),
            post_json(self.api.as_ref(), &path, &params),
            USER_TRANSACTION_CREATION_ERROR,
        ).await?;

        info!("Created transaction {} for user {} ({})", data.transaction.id, user_id, data.transaction.amount);
        self.apply_transaction(&data.transaction);
        Some(data.transaction)
    }

    async fn delete_transaction(
        &self,
        user_id: i64,
        transaction_id: i64,
    ) {
        let path = format!("user/{}/transaction/{}", user_id, transaction_id);

        let data = error_handler::<TransactionResponse, _>(
            self.store.as_ref(),
            self.api.delete(&path),
            USER_TRANSACTION_DELETION_ERROR,
        ).await;

        if let Some(data) = data {
            info!("Deleted transaction {} for user {}", transaction_id, user_id);
            self.apply_transaction(&data.transaction);
        }
    }
}
