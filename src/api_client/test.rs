use std::collections::HashMap;

use mockall::predicate::eq;
use reqwest::StatusCode;

use serde_json::{json, Value};

use super::{build_url, error::Error, parse_response, post_json, MockApiClient};

#[test]
fn test_build_url_joins_single_slash() {
    assert_eq!("http://tally.local/api/user/7", build_url("http://tally.local/api/", "user/7"));
    assert_eq!("http://tally.local/api/user/7", build_url("http://tally.local/api", "/user/7"));
    assert_eq!(
        "http://tally.local/api/user/7/transaction?offset=0&limit=15",
        build_url("http://tally.local/api", "user/7/transaction?offset=0&limit=15")
    );
}

#[test]
fn test_error_code_from_status_body() {
    let err = Error::StatusCodeFetchError(
        StatusCode::BAD_REQUEST,
        String::from(r#"{ "error": { "code": "TRANSACTION_BOUNDARY_EXCEEDED" } }"#),
    );
    assert_eq!(Some(String::from("TRANSACTION_BOUNDARY_EXCEEDED")), err.error_code());

    let err = Error::StatusCodeFetchError(StatusCode::BAD_REQUEST, String::from(r#"{ "error": "USER_NOT_FOUND" }"#));
    assert_eq!(Some(String::from("USER_NOT_FOUND")), err.error_code());
}

#[test]
fn test_error_code_missing_for_plain_body() {
    let err = Error::StatusCodeFetchError(StatusCode::BAD_GATEWAY, String::from("<html>Bad gateway</html>"));
    assert_eq!(None, err.error_code());

    let err = Error::StatusCodeFetchError(StatusCode::INTERNAL_SERVER_ERROR, String::new());
    assert_eq!(None, err.error_code());
}

#[test]
fn test_parse_response_success_body() -> anyhow::Result<()> {
    let value = parse_response(StatusCode::OK, String::from(r#"{ "transactions": [] }"#))?;
    assert_eq!(json!({ "transactions": [] }), value);

    Ok(())
}

#[test]
fn test_parse_response_empty_body_is_null() -> anyhow::Result<()> {
    assert_eq!(Value::Null, parse_response(StatusCode::NO_CONTENT, String::new())?);
    assert_eq!(Value::Null, parse_response(StatusCode::OK, String::from("  \n"))?);

    Ok(())
}

#[test]
fn test_parse_response_error_status_keeps_body() {
    let res = parse_response(StatusCode::NOT_FOUND, String::from(r#"{ "error": "USER_NOT_FOUND" }"#));

    assert!(matches!(
        res,
        Err(Error::StatusCodeFetchError(status, ref body)) if status == StatusCode::NOT_FOUND && body.contains("USER_NOT_FOUND")
    ));
}

#[test]
fn test_parse_response_invalid_json() {
    let res = parse_response(StatusCode::OK, String::from("<html>ok</html>"));

    assert!(matches!(res, Err(Error::ParseError(_))));
}

#[tokio::test]
async fn test_post_json_serializes_body() -> anyhow::Result<()> {
    let mut api = MockApiClient::new();
    api.expect_post()
        .with(eq("user/7/transaction"), eq(json!({ "amount": 5 })))
        .times(1)
        .returning(|_, body| Ok(body));

    let value = post_json(&api, "user/7/transaction", &json!({ "amount": 5 })).await?;
    assert_eq!(json!({ "amount": 5 }), value);

    Ok(())
}

#[tokio::test]
async fn test_post_json_unserializable_body_never_sent() {
    // JSON object keys must be strings
    let body = HashMap::from([((1, 2), 3)]);
    let mut api = MockApiClient::new();
    api.expect_post().times(0);

    let res = post_json(&api, "article", &body).await;

    assert!(matches!(res, Err(Error::ParseError(_))));
}
