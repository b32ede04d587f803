use dioxus::prelude::*;

#[component]
pub fn LoadingPanel(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div { class: "loading-panel", "aria-busy": "true",
            div { class: "loading-spinner" }
            p { class: "loading-text", "{message}" }
        }
    }
}
