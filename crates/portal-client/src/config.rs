use shared_types::{normalize_base_url, DEFAULT_API_BASE};

/// Path to the optional config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Environment variable naming the backend base URL.
pub const API_BASE_ENV: &str = "FARMDESK_API_BASE";

/// Where the portal's backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    /// Resolve the base URL.
    ///
    /// Order: `config.toml` `[api] base_url`, runtime `FARMDESK_API_BASE`
    /// (after loading `.env`), the value baked in at compile time, and
    /// finally `http://localhost:5000`. The browser build only has the last
    /// two.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(url) = read_config_file() {
                return Self::new(url);
            }
            let _ = dotenvy::dotenv();
            if let Some(url) = std::env::var(API_BASE_ENV)
                .ok()
                .and_then(|v| normalize_base_url(&v))
            {
                return Self::new(url);
            }
        }
        Self::from_layers(None, option_env!("FARMDESK_API_BASE"))
    }

    /// Pick the first usable candidate, falling back to the local default.
    pub fn from_layers(runtime: Option<&str>, compiled: Option<&str>) -> Self {
        let base_url = [runtime, compiled]
            .into_iter()
            .flatten()
            .find_map(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self { base_url }
    }

    /// Join an absolute API path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> Option<String> {
    let contents = std::fs::read_to_string(CONFIG_PATH).ok()?;
    match toml::from_str::<shared_types::PortalConfig>(&contents) {
        Ok(config) => config.api.base_url.as_deref().and_then(normalize_base_url),
        Err(e) => {
            tracing::warn!(error = %e, path = CONFIG_PATH, "Failed to parse config file, ignoring it");
            None
        }
    }
}
