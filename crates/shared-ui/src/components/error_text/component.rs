use dioxus::prelude::*;

/// Inline error line shown under a form. Renders nothing without a message.
#[component]
pub fn ErrorText(message: Option<String>) -> Element {
    match message {
        Some(message) if !message.is_empty() => rsx! {
            p { class: "form-error", role: "alert", "{message}" }
        },
        _ => rsx! {},
    }
}
