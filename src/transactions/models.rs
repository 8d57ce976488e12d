use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::{articles::models::Article, users::models::User};

pub const DEFAULT_PAGE_SIZE: u64 = 15;

///
/// Model representing a single transaction. `amount` is signed cents: positive credits the user,
/// negative debits them.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub user: User,
    #[serde(default)]
    pub article: Option<Article>,
    #[serde(default)]
    pub sender: Option<User>,
    #[serde(default)]
    pub recipient: Option<User>,
    #[serde(default)]
    pub comment: Option<String>,
    pub amount: i64,
    #[serde(deserialize_with = "deserialize_created")]
    pub created: DateTime<Utc>,
    pub is_deleted: bool,
    pub is_deletable: bool,
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// RFC 3339 timestamps keep their offset. Timestamps without one are taken as UTC.
pub fn parse_created(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS.iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_created<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_created(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub count: Option<u64>,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionResponse {
    pub transaction: Transaction,
}

///
/// Body of a create request. Only `amount` is required; `article_id` marks a purchase,
/// `recipient_id` a transfer, `comment` annotates free-form deposits and withdrawals.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionParams {
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CreateTransactionParams {
    pub fn with_amount(amount: i64) -> Self {
        CreateTransactionParams { amount, ..Default::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Page {
    pub fn new(offset: u64, limit: u64) -> Self {
        Page { offset, limit }
    }

    pub fn to_query(&self) -> String {
        format!("?offset={}&limit={}", self.offset, self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page { offset: 0, limit: DEFAULT_PAGE_SIZE }
    }
}
