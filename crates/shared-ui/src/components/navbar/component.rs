use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;

/// Top bar for a portal: brand, the caller's company and name, the
/// portal's links as children, and a logout button.
#[component]
pub fn NavBar(
    brand: String,
    company_id: String,
    username: String,
    on_logout: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-brand",
                span { class: "navbar-title", "{brand}" }
                span { class: "navbar-meta", "{company_id} · {username}" }
            }
            div { class: "navbar-links", {children} }
            button {
                class: "button navbar-logout",
                "data-style": "ghost",
                r#type: "button",
                onclick: move |evt| on_logout.call(evt),
                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                span { "Logout" }
            }
        }
    }
}
