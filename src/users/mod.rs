pub mod models;
pub mod state;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    api_client::{post_json, DynApiClient},
    error_handler::error_handler,
    store::{Action, Dispatch, DynStore},
};

use models::*;

pub type DynUserService = Arc<dyn UserService + Send + Sync>;

pub const USERS_LOADING_ERROR: &str = "USERS_LOADING_ERROR";
pub const USER_DETAILS_LOADING_ERROR: &str = "USER_DETAILS_LOADING_ERROR";
pub const USER_UPDATE_ERROR: &str = "USER_UPDATE_ERROR";

#[cfg(test)]
mod test;

#[async_trait]
pub trait UserService {
    async fn load_users(&self) -> Option<Vec<User>>;
    async fn load_user(&self, user_id: i64) -> Option<User>;
    async fn update_user(&self, user_id: i64, params: UpdateUserParams) -> Option<User>;
}

pub struct ApiUserService {
    api: DynApiClient,
    store: DynStore,
}

#[async_trait]
impl UserService for ApiUserService {
    async fn load_users(&self) -> Option<Vec<User>> {
        let data = error_handler::<UsersResponse, _>(
            self.store.as_ref(),
            self.api.get("user"),
            USERS_LOADING_ERROR,
        ).await?;

        self.store.dispatch(Action::UsersLoaded(data.users.clone()));
        Some(data.users)
    }

    async fn load_user(&self, user_id: i64) -> Option<User> {
        let data = error_handler::<UserResponse, _>(
            self.store.as_ref(),
            self.api.get(&format!("user/{}", user_id)),
            USER_DETAILS_LOADING_ERROR,
        ).await?;

        self.store.dispatch(Action::UserDetailsLoaded(data.user.clone()));
        Some(data.user)
    }

    async fn update_user(&self, user_id: i64, params: UpdateUserParams) -> Option<User> {
        let path = format!("user/{}", user_id);
        let data = error_handler::<UserResponse, _>(
            self.store.as_ref(),
            post_json(self.api.as_ref(), &path, &params),
            USER_UPDATE_ERROR,
        ).await?;

        self.store.dispatch(Action::UserDetailsLoaded(data.user.clone()));
        Some(data.user)
    }
}

impl ApiUserService {
    pub fn new_dyn(api: DynApiClient, store: DynStore) -> DynUserService {
        Arc::new(Self { api, store, })
    }
}
