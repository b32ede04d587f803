use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use shared_types::AppError;

use crate::config::ClientConfig;

/// Shared HTTP handle for every portal operation.
///
/// Cheap to clone; clones share one connection pool and, on native targets,
/// one cookie jar. In the browser the session cookie lives in the browser's
/// own jar and every request opts into sending it.
#[derive(Clone, Debug)]
pub struct PortalClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PortalClient {
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        let http = builder.build().map_err(|e| {
            tracing::error!(error = %e, "Failed to build HTTP client");
            AppError::network()
        })?;
        tracing::debug!(base_url = %config.base_url, "Portal client ready");
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.url(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Send a request and return the body of a 2xx response.
    ///
    /// Transport failures become `NetworkFailure`; non-2xx responses become
    /// `AuthFailure`/`RequestFailure` carrying the server's `error` text or
    /// `fallback`.
    pub(crate) async fn execute(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<String, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Request failed before a response arrived");
            AppError::network()
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!(error = %e, status = status.as_u16(), "Failed to read response body");
            AppError::network()
        })?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Backend rejected request");
            return Err(AppError::from_status(status.as_u16(), &body, fallback));
        }
        Ok(body)
    }

    /// `execute` and decode the body as `T`.
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<T, AppError> {
        let body = self.execute(builder, fallback).await?;
        decode(&body)
    }
}

/// Clients are interchangeable when they talk to the same backend.
impl PartialEq for PortalClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "Response body did not match expected shape");
        AppError::malformed_response()
    })
}
