use dioxus::prelude::*;

use crate::routes::Route;

/// Unknown paths go to the admin dashboard, which runs its own guard.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    use_effect(move || {
        tracing::debug!(path = %path, "Unknown route, redirecting to admin dashboard");
        navigator().replace(Route::AdminHome {});
    });

    rsx! {}
}
