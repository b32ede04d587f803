use dioxus::prelude::*;
use portal_client::{ClientConfig, PortalClient};

mod auth;
mod format_helpers;
mod routes;
use routes::Route;

const PORTAL_CSS: Asset = asset!("/assets/portal.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(|| PortalClient::new(ClientConfig::load()));

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        {
            match client {
                Ok(client) => rsx! { PortalRoot { client } },
                Err(err) => rsx! {
                    div { class: "startup-error",
                        h1 { "FarmDesk" }
                        p { "{err.user_message()}" }
                    }
                },
            }
        }
    }
}

/// Provides the shared HTTP client to every route.
#[component]
fn PortalRoot(client: PortalClient) -> Element {
    use_context_provider(|| client.clone());
    rsx! {
        Router::<Route> {}
    }
}
