//! Two-step delete confirmation.
//!
//! Delete operations only accept a [`Confirmed`] target, and the only way
//! to get one is to accept a [`PendingDelete`] prompt. A cancelled prompt
//! yields nothing, so no request can go out.

use shared_types::{Crop, Officer};

/// Something that can be deleted behind a confirmation prompt.
pub trait DeleteTarget {
    /// Backend key the delete request addresses.
    fn key(&self) -> &str;
    /// Question shown to the user.
    fn prompt(&self) -> String;
}

impl DeleteTarget for Officer {
    fn key(&self) -> &str {
        &self.id
    }

    fn prompt(&self) -> String {
        "Delete this officer? This action cannot be undone.".to_string()
    }
}

impl DeleteTarget for Crop {
    fn key(&self) -> &str {
        &self.crop_name
    }

    fn prompt(&self) -> String {
        format!("Delete \"{}\"? This action cannot be undone.", self.crop_name)
    }
}

/// A delete the user has asked for but not yet confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete<T> {
    target: T,
}

impl<T: DeleteTarget> PendingDelete<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub fn prompt(&self) -> String {
        self.target.prompt()
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn confirm(self) -> Confirmed<T> {
        Confirmed { target: self.target }
    }

    /// Drop the request. Returns the untouched target so the caller can
    /// keep showing it.
    pub fn cancel(self) -> T {
        tracing::debug!(key = self.target.key(), "Delete cancelled");
        self.target
    }

    /// Ask `decide` with the prompt text and confirm only if it says yes.
    pub fn resolve_with(self, decide: impl FnOnce(&str) -> bool) -> Option<Confirmed<T>> {
        if decide(&self.prompt()) {
            Some(self.confirm())
        } else {
            self.cancel();
            None
        }
    }
}

/// A delete the user has explicitly accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmed<T> {
    target: T,
}

impl<T: DeleteTarget> Confirmed<T> {
    pub fn key(&self) -> &str {
        self.target.key()
    }

    pub fn into_inner(self) -> T {
        self.target
    }
}
