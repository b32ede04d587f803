use crate::auth::use_identity;
use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

#[component]
pub fn OfficerHome() -> Element {
    let identity = use_identity();

    rsx! {
        div { class: "officer-home",
            h1 { class: "page-title", "Officer Dashboard" }
            Card {
                CardHeader {
                    CardTitle { "Welcome, {identity.username}" }
                }
                CardContent {
                    p { "Signed in to company {identity.company_id} as {identity.role}." }
                }
            }
        }
    }
}
