use serde::{Deserialize, Serialize};

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// `[api]` table of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiSettings {
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiSettings,
}

/// Strip trailing slashes so `"{base}{path}"` joins cleanly.
/// Returns `None` for blank input.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
