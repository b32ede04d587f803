use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use reqwest::Method;
use shared_types::Identity;

use crate::client::PortalClient;

pub const ME_PATH: &str = "/api/auth/me";

/// Outcome of asking the backend who the caller is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Authenticated(Identity),
    Anonymous,
}

impl Resolution {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Resolution::Authenticated(identity) => Some(identity),
            Resolution::Anonymous => None,
        }
    }
}

impl PortalClient {
    /// Resolve the current session via `GET /api/auth/me`.
    ///
    /// Total: a non-2xx status, a transport failure, or an unreadable body
    /// all collapse to `Anonymous`. The session cookie is always sent.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self) -> Resolution {
        let body = match self.execute(self.request(Method::GET, ME_PATH), "").await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(error = %e, "No active session");
                return Resolution::Anonymous;
            }
        };
        match Identity::from_body(&body) {
            Some(identity) => {
                tracing::debug!(username = %identity.username, role = %identity.role, "Session resolved");
                Resolution::Authenticated(identity)
            }
            None => {
                tracing::warn!("Identity body unreadable, treating caller as anonymous");
                Resolution::Anonymous
            }
        }
    }

    /// Resolve for a guard instance, dropping the result if the guard was
    /// torn down while the request was in flight.
    pub async fn resolve_for(&self, liveness: &Liveness) -> Option<GuardState> {
        let resolution = self.resolve().await;
        if !liveness.is_alive() {
            tracing::debug!("Guard gone before session resolved, discarding result");
            return None;
        }
        Some(GuardState::Loading.settle(resolution))
    }
}

/// Lifecycle of one guarded navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Loading,
    Authenticated(Identity),
    Redirecting,
}

impl GuardState {
    /// Apply a finished resolution. Only `Loading` moves; terminal states
    /// stay where they are.
    pub fn settle(self, resolution: Resolution) -> Self {
        match (self, resolution) {
            (GuardState::Loading, Resolution::Authenticated(identity)) => {
                GuardState::Authenticated(identity)
            }
            (GuardState::Loading, Resolution::Anonymous) => GuardState::Redirecting,
            (state, _) => state,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            GuardState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GuardState::Loading)
    }
}

/// Shared "still mounted" flag for an in-flight resolution.
///
/// Starts alive; `revoke` is called once when the owning view goes away and
/// every later `is_alive` returns false.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
