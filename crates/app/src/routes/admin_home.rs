use crate::auth::use_identity;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdPackage, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Admin landing page: shortcuts to the two management pages.
#[component]
pub fn AdminHome() -> Element {
    let identity = use_identity();

    rsx! {
        div { class: "admin-home",
            h1 { class: "page-title", "Welcome, {identity.username}" }
            p { class: "page-subtitle", "Company {identity.company_id}" }

            div { class: "home-grid",
                Link { to: Route::AdminOfficers {}, class: "home-card-link",
                    Card {
                        CardHeader {
                            Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 }
                            CardTitle { "Officers" }
                            CardDescription { "Create and remove field officer accounts." }
                        }
                    }
                }
                Link { to: Route::AdminCrops {}, class: "home-card-link",
                    Card {
                        CardHeader {
                            Icon::<LdPackage> { icon: LdPackage, width: 24, height: 24 }
                            CardTitle { "Crops & Rates" }
                            CardDescription { "Maintain the crop price list." }
                        }
                    }
                }
                Card { class: "home-card-static",
                    CardHeader {
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 24, height: 24 }
                        CardTitle { "Company Stats" }
                    }
                    CardContent {
                        p { class: "muted", "Coming soon" }
                    }
                }
            }
        }
    }
}
