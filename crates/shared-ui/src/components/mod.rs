pub mod button;
pub mod card;
pub mod confirm_dialog;
pub mod error_text;
pub mod form;
pub mod loading_panel;
pub mod navbar;

pub use button::*;
pub use card::*;
pub use confirm_dialog::*;
pub use error_text::*;
pub use form::*;
pub use loading_panel::*;
pub use navbar::*;
