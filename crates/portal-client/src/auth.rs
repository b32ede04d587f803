use reqwest::Method;
use shared_types::{AppError, Identity, LoginForm, Portal, ValidateRequest};

use crate::client::PortalClient;
use crate::session::Resolution;

pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const LOGIN_FAILED: &str = "Login failed";

/// Where a successful login lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Home view of the portal that was logged into.
    pub home: Portal,
    /// Identity re-read right after login. `None` if the backend accepted
    /// the credentials but `/api/auth/me` did not confirm the session.
    pub identity: Option<Identity>,
}

impl PortalClient {
    /// Authenticate against the selected portal's login endpoint.
    ///
    /// Blank fields fail validation without a request. On success the
    /// session cookie is set by the backend and the identity is refreshed
    /// before the outcome is returned.
    #[tracing::instrument(skip(self, form), fields(portal = form.portal.label(), company_id = %form.company_id.trim()))]
    pub async fn login(&self, form: &LoginForm) -> Result<LoginOutcome, AppError> {
        let request = form.to_request();
        request.validate_request()?;

        self.execute(
            self.request(Method::POST, form.portal.login_path()).json(&request),
            LOGIN_FAILED,
        )
        .await?;

        let identity = match self.resolve().await {
            Resolution::Authenticated(identity) => Some(identity),
            Resolution::Anonymous => {
                tracing::warn!("Login accepted but session did not resolve");
                None
            }
        };
        tracing::info!(username = %request.username, "Logged in");
        Ok(LoginOutcome {
            home: form.portal,
            identity,
        })
    }

    /// End the session. Failures are logged and otherwise ignored; the
    /// caller navigates to the login view regardless.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) {
        match self
            .execute(self.request(Method::POST, LOGOUT_PATH), "Logout failed")
            .await
        {
            Ok(_) => tracing::info!("Logged out"),
            Err(e) => tracing::warn!(error = %e, "Logout request failed, ignoring"),
        }
    }
}
