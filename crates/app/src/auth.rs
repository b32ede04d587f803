use dioxus::prelude::*;
use portal_client::PortalClient;
use shared_types::Identity;

use crate::routes::Route;

/// Hook to access the shared portal client.
pub fn use_portal() -> PortalClient {
    use_context::<PortalClient>()
}

/// Identity resolved by the guard for the current navigation.
///
/// Only available below the protected layout.
pub fn use_identity() -> Identity {
    use_context::<Identity>()
}

/// End the session and go to the login view, whatever the backend said.
pub fn use_logout() -> impl FnMut(MouseEvent) + Clone {
    let client = use_portal();
    move |_| {
        let client = client.clone();
        spawn(async move {
            client.logout().await;
            navigator().replace(Route::Login {});
        });
    }
}
