//! Presentational components shared by the portal pages.
//!
//! Styling lives in the application's stylesheet; these components only
//! emit the class names it targets.

pub mod components;

pub use components::*;
