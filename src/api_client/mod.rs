use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

#[cfg(test)]
use mockall::automock;

use error::*;
use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;

pub mod error;

#[cfg(test)]
mod test;

pub type DynApiClient = Arc<dyn ApiClient + Send + Sync>;

///
/// JSON client for the Tally backend. Paths are relative to the configured base url,
/// e.g. `user/7/transaction`.
///
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApiClient {
    async fn get(&self, path: &str) -> Result<Value>;
    async fn post(&self, path: &str, body: Value) -> Result<Value>;
    async fn delete(&self, path: &str) -> Result<Value>;
}

pub struct ReqwestApiClient {
    client: Client,
    base_url: String,
}

impl ReqwestApiClient {
    pub fn new_dyn(client: Client, base_url: &str) -> DynApiClient {
        Arc::new(ReqwestApiClient { client, base_url: base_url.to_string() })
    }

    fn url(&self, path: &str) -> String {
        build_url(&self.base_url, path)
    }

    async fn send(&self, req: RequestBuilder) -> Result<Value> {
        let res = req.send().await?;
        let status = res.status();

        let body = if status.is_success() {
            res.text().await?
        } else {
            res.text().await.unwrap_or(String::new())
        };
        parse_response(status, body)
    }
}

/// Turns a status and raw body into the JSON payload, or the matching error.
pub fn parse_response(status: StatusCode, body: String) -> Result<Value> {
    if !status.is_success() {
        return Err(Error::StatusCodeFetchError(status, body));
    }

    // DELETE may answer with an empty body
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str::<Value>(&body)?)
}

/// Serializes `body` and POSTs it. A body that does not serialize fails like any other request.
pub async fn post_json<T: Serialize + Sync>(
    api: &(dyn ApiClient + Send + Sync),
    path: &str,
    body: &T,
) -> Result<Value> {
    let body = serde_json::to_value(body)?;
    api.post(path, body).await
}

pub fn build_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    async fn get(&self, path: &str) -> Result<Value> {
        debug!("GET {}", path);
        self.send(self.client.get(self.url(path))).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        debug!("POST {}", path);
        let req = self.client.post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(&body)?);
        self.send(req).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        debug!("DELETE {}", path);
        self.send(self.client.delete(self.url(path))).await
    }
}
