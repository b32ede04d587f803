use serde::{Deserialize, Serialize};

/// Body carried by non-2xx responses: `{ "error": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// The `error` text of a raw body, if it has a non-empty one.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
    }
}
