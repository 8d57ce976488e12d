use serde::Deserialize;
use serde_json::Value;

///
/// Envelope every backend response may take: an `error` indicator in place of data.
///
#[derive(Debug, Default, Deserialize)]
pub struct MaybeResponse {
    #[serde(default)]
    pub error: Option<ErrorIndicator>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorIndicator {
    Code(String),
    Detailed { code: Option<String> },
    Flag(bool),
    /// Any other shape still means the request failed
    Other(Value),
}

impl ErrorIndicator {
    pub fn code(self) -> Option<String> {
        match self {
            ErrorIndicator::Code(code) => Some(code),
            ErrorIndicator::Detailed { code } => code,
            ErrorIndicator::Flag(_) | ErrorIndicator::Other(_) => None,
        }
    }

    /// `{ "error": false }` is not a failure
    pub fn is_failure(&self) -> bool {
        !matches!(self, ErrorIndicator::Flag(false))
    }
}
