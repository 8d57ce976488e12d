use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use crate::{
    alerts::{self, AlertState, Notification},
    articles::{models::Article, state::{self as article_state, ArticleState}},
    transactions::{models::Transaction, state::{self as transaction_state, TransactionState}},
    users::{models::User, state::{self as user_state, UserState}},
};


pub type DynStore = Arc<Store>;

///
/// Every state change the store knows about. Reducers match on the variants they own and pass the
/// rest through untouched.
///
#[derive(Debug, Clone)]
pub enum Action {
    TransactionsLoaded(Vec<Transaction>),
    UserDetailsLoaded(User),
    UsersLoaded(Vec<User>),
    ArticlesLoaded(Vec<Article>),
    ErrorOccurred(Notification),
    ErrorsDismissed,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::TransactionsLoaded(_) => "TRANSACTIONS_LOADED",
            Action::UserDetailsLoaded(_) => "USER_DETAILS_LOADED",
            Action::UsersLoaded(_) => "USERS_LOADED",
            Action::ArticlesLoaded(_) => "ARTICLES_LOADED",
            Action::ErrorOccurred(_) => "ERROR_OCCURRED",
            Action::ErrorsDismissed => "ERRORS_DISMISSED",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub transaction: TransactionState,
    pub user: UserState,
    pub article: ArticleState,
    pub alerts: AlertState,
}

impl AppState {
    pub fn reduce(self, action: &Action) -> Self {
        AppState {
            transaction: transaction_state::reducer(self.transaction, action),
            user: user_state::reducer(self.user, action),
            article: article_state::reducer(self.article, action),
            alerts: alerts::reducer(self.alerts, action),
        }
    }
}

///
/// The single mutation boundary. Services receive one of these instead of touching state directly.
///
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

///
/// Process-wide state container. Constructed once and shared by `Arc`; reads go through `select`.
///
#[derive(Debug, Default)]
pub struct Store {
    state: RwLock<AppState>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_dyn() -> DynStore {
        Arc::new(Self::new())
    }

    pub fn select<R>(&self, selector: impl FnOnce(&AppState) -> R) -> R {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        selector(&state)
    }

    pub fn snapshot(&self) -> AppState {
        self.select(AppState::clone)
    }

    pub fn reset(&self) {
        debug!("Resetting store");
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = AppState::default();
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        debug!("Dispatching {}", action.name());
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let current = std::mem::take(&mut *state);
        *state = current.reduce(&action);
    }
}
