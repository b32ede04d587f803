//! HTTP client for the FarmDesk portal backend.
//!
//! Every operation rides on the session cookie set at login; nothing here
//! ever sends a company id of its own.

pub mod auth;
pub mod client;
pub mod config;
pub mod confirm;
pub mod crops;
pub mod officers;
pub mod session;

pub use auth::LoginOutcome;
pub use client::PortalClient;
pub use config::ClientConfig;
pub use confirm::{Confirmed, DeleteTarget, PendingDelete};
pub use crops::CropCatalog;
pub use officers::OfficerDirectory;
pub use session::{GuardState, Liveness, Resolution};
