pub mod admin_home;
pub mod crops;
pub mod login;
pub mod not_found;
pub mod officer_home;
pub mod officers;

use crate::auth::{use_identity, use_logout, use_portal};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdPackage, LdUsers};
use dioxus_free_icons::Icon;
use portal_client::{GuardState, Liveness};
use shared_types::Identity;
use shared_ui::{LoadingPanel, NavBar};

use admin_home::AdminHome;
use crops::AdminCrops;
use login::Login;
use not_found::NotFound;
use officer_home::OfficerHome;
use officers::AdminOfficers;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(ProtectedRoute)]
    #[layout(AdminLayout)]
    #[route("/admin")]
    AdminHome {},
    #[route("/admin/officers")]
    AdminOfficers {},
    #[route("/admin/crops")]
    AdminCrops {},
    #[end_layout]
    #[layout(OfficerLayout)]
    #[route("/officer")]
    OfficerHome {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Guard layout for every portal page.
///
/// The gate below is keyed by the current route, so each navigation mounts
/// a fresh gate and resolves the session again.
#[component]
fn ProtectedRoute() -> Element {
    let route: Route = use_route();
    rsx! {
        SessionGate { key: "{route}" }
    }
}

/// One session check per mount: `Loading`, then either the protected
/// subtree or a history-replacing redirect to `/login`.
#[component]
fn SessionGate() -> Element {
    let client = use_portal();
    let liveness = use_hook(Liveness::new);
    let mut state = use_signal(GuardState::default);

    {
        let liveness = liveness.clone();
        use_drop(move || liveness.revoke());
    }

    use_hook(move || {
        spawn(async move {
            if let Some(next) = client.resolve_for(&liveness).await {
                state.set(next);
            }
        });
    });

    use_effect(move || {
        if *state.read() == GuardState::Redirecting {
            tracing::debug!("No active session, redirecting to login");
            navigator().replace(Route::Login {});
        }
    });

    match state() {
        GuardState::Loading => rsx! {
            LoadingPanel { message: "Checking session..." }
        },
        GuardState::Authenticated(identity) => rsx! {
            IdentityScope { identity }
        },
        GuardState::Redirecting => rsx! {
            LoadingPanel { message: "Redirecting to login..." }
        },
    }
}

/// Hands the resolved identity to everything below it, read-only.
#[component]
fn IdentityScope(identity: Identity) -> Element {
    use_context_provider(|| identity.clone());
    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn AdminLayout() -> Element {
    let route: Route = use_route();
    let identity = use_identity();
    let logout = use_logout();

    let link_class = |active: bool| if active { "nav-link active" } else { "nav-link" };

    rsx! {
        div { class: "portal-shell",
            NavBar {
                brand: "FarmDesk Admin",
                company_id: identity.company_id.clone(),
                username: identity.username.clone(),
                on_logout: logout,
                Link { to: Route::AdminHome {},
                    class: link_class(matches!(route, Route::AdminHome {})),
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                    "Dashboard"
                }
                Link { to: Route::AdminOfficers {},
                    class: link_class(matches!(route, Route::AdminOfficers {})),
                    Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                    "Officers"
                }
                Link { to: Route::AdminCrops {},
                    class: link_class(matches!(route, Route::AdminCrops {})),
                    Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
                    "Crops & Rates"
                }
            }
            main { class: "portal-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn OfficerLayout() -> Element {
    let identity = use_identity();
    let logout = use_logout();

    let company_id = if identity.company_id.is_empty() {
        "—".to_string()
    } else {
        identity.company_id.clone()
    };
    let username = if identity.username.is_empty() {
        "Officer".to_string()
    } else {
        identity.username.clone()
    };

    rsx! {
        div { class: "portal-shell",
            NavBar {
                brand: "FarmDesk Officer",
                company_id,
                username,
                on_logout: logout,
                Link { to: Route::OfficerHome {}, class: "nav-link active",
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                    "Dashboard"
                }
            }
            main { class: "portal-main",
                Outlet::<Route> {}
            }
        }
    }
}
