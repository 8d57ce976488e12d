use std::sync::Arc;

use mockall::predicate::eq;
use reqwest::StatusCode;
use serde_json::json;

use crate::{
    alerts::Notification,
    api_client::{error::Error, MockApiClient},
    store::Store,
    test_utils::user_json,
};

use super::{
    models::UpdateUserParams, state::{get_user, get_users}, ApiUserService,
    USERS_LOADING_ERROR, USER_UPDATE_ERROR,
};

#[tokio::test]
async fn test_load_users() {
    let mut api = MockApiClient::new();
    api.expect_get()
        .with(eq("user"))
        .times(1)
        .returning(|_| Ok(json!({ "users": [user_json(7, 1000), user_json(8, -250)] })));
    let store = Store::new_dyn();
    let svc = ApiUserService::new_dyn(Arc::new(api), store.clone());

    let users = svc.load_users().await;

    assert_eq!(Some(2), users.map(|u| u.len()));
    store.select(|state| {
        assert_eq!(2, get_users(state).len());
        assert_eq!(-250, get_user(state, 8).unwrap().balance);
    });
}

#[tokio::test]
async fn test_load_users_failure() {
    let mut api = MockApiClient::new();
    api.expect_get()
        .times(1)
        .returning(|_| Err(Error::StatusCodeFetchError(StatusCode::SERVICE_UNAVAILABLE, String::new())));
    let store = Store::new_dyn();
    let svc = ApiUserService::new_dyn(Arc::new(api), store.clone());

    assert!(svc.load_users().await.is_none());
    store.select(|state| {
        assert!(get_users(state).is_empty());
        assert_eq!(&[Notification::new(USERS_LOADING_ERROR)], state.alerts.notifications());
    });
}

#[tokio::test]
async fn test_load_user_overwrites_cache() {
    let mut api = MockApiClient::new();
    api.expect_get()
        .with(eq("user/7"))
        .times(1)
        .returning(|_| Ok(json!({ "user": user_json(7, 4200) })));
    let store = Store::new_dyn();
    let svc = ApiUserService::new_dyn(Arc::new(api), store.clone());

    let user = svc.load_user(7).await;

    assert_eq!(Some(4200), user.map(|u| u.balance));
    assert_eq!(Some(4200), store.select(|state| get_user(state, 7).map(|u| u.balance)));
}

#[tokio::test]
async fn test_update_user() {
    let mut api = MockApiClient::new();
    api.expect_post()
        .with(eq("user/7"), eq(json!({ "name": "renamed", "email": null, "isDisabled": true })))
        .times(1)
        .returning(|_, _| {
            let mut user = user_json(7, 0);
            user["name"] = json!("renamed");
            user["isDisabled"] = json!(true);
            Ok(json!({ "user": user }))
        });
    let store = Store::new_dyn();
    let svc = ApiUserService::new_dyn(Arc::new(api), store.clone());

    let params = UpdateUserParams { name: String::from("renamed"), email: None, is_disabled: true };
    let user = svc.update_user(7, params).await;

    assert!(matches!(user, Some(u) if u.is_disabled && u.name == "renamed"));
    assert_eq!(Some(true), store.select(|state| get_user(state, 7).map(|u| u.is_disabled)));
}

#[tokio::test]
async fn test_update_user_error_payload() {
    let mut api = MockApiClient::new();
    api.expect_post()
        .times(1)
        .returning(|_, _| Ok(json!({ "error": { "code": null } })));
    let store = Store::new_dyn();
    let svc = ApiUserService::new_dyn(Arc::new(api), store.clone());

    let params = UpdateUserParams { name: String::from("name"), email: None, is_disabled: false };

    assert!(svc.update_user(7, params).await.is_none());
    store.select(|state| {
        assert!(get_user(state, 7).is_none());
        assert_eq!(&[Notification::new(USER_UPDATE_ERROR)], state.alerts.notifications());
    });
}
