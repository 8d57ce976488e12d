use std::future::Future;

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{alerts::Notification, api_client, store::{Action, Dispatch}};

use models::MaybeResponse;

pub mod models;


///
/// Awaits `request` and hands back its payload as `T`.
///
/// A transport error, an error status, an `error` indicator in the payload or a payload that does
/// not fit `T` all dispatch exactly one notification and yield `None`. The notification key is the
/// backend's error code when it sent one, `default_error` otherwise.
///
pub async fn error_handler<T, F>(
    dispatch: &(dyn Dispatch + Send + Sync),
    request: F,
    default_error: &str,
) -> Option<T>
where
    T: DeserializeOwned,
    F: Future<Output = api_client::error::Result<Value>>,
{
    let value = match request.await {
        Ok(value) => value,
        Err(err) => {
            warn!("{}", err);
            notify(dispatch, err.error_code(), default_error);
            return None;
        }
    };

    // Anything that isn't an object (an array, null, ...) carries no error indicator
    let maybe = serde_json::from_value::<MaybeResponse>(value.clone()).unwrap_or_default();
    if let Some(indicator) = maybe.error.filter(|e| e.is_failure()) {
        let code = indicator.code();
        warn!("API answered with error indicator {:?}", code);
        notify(dispatch, code, default_error);
        return None;
    }

    match serde_json::from_value::<T>(value) {
        Ok(data) => Some(data),
        Err(err) => {
            warn!("Unexpected response shape: {}", err);
            notify(dispatch, None, default_error);
            None
        }
    }
}

fn notify(dispatch: &(dyn Dispatch + Send + Sync), code: Option<String>, default_error: &str) {
    let key = code.unwrap_or_else(|| default_error.to_string());
    dispatch.dispatch(Action::ErrorOccurred(Notification::new(&key)));
}
