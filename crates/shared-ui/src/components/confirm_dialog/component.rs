use dioxus::prelude::*;

/// Modal yes/no question. Rendered only while `open`.
///
/// Clicking the backdrop counts as cancel.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "dialog-content",
                role: "alertdialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                h2 { class: "dialog-title", "{title}" }
                p { class: "dialog-description", "{message}" }
                div { class: "dialog-actions",
                    button {
                        class: "button",
                        "data-style": "secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    button {
                        class: "button",
                        "data-style": "destructive",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
