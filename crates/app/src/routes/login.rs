use crate::auth::use_portal;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{LoginForm, Portal};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, ErrorText, Form, FormField,
};

fn home_route(portal: Portal) -> Route {
    match portal {
        Portal::Admin => Route::AdminHome {},
        Portal::Officer => Route::OfficerHome {},
    }
}

/// Login page with the Admin/Officer toggle.
///
/// The toggle picks the login endpoint and the home view reached on success.
#[component]
pub fn Login() -> Element {
    let client = use_portal();
    let company_id = use_signal(String::new);
    let username = use_signal(String::new);
    let password = use_signal(String::new);
    let mut portal = use_signal(Portal::default);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |_: FormEvent| {
        if loading() {
            return;
        }
        let client = client.clone();
        let form = LoginForm {
            company_id: company_id(),
            username: username(),
            password: password(),
            portal: portal(),
        };
        loading.set(true);
        error_msg.set(None);

        spawn(async move {
            match client.login(&form).await {
                Ok(outcome) => {
                    loading.set(false);
                    navigator().push(home_route(outcome.home));
                }
                Err(err) => {
                    error_msg.set(Some(err.user_message().to_string()));
                    loading.set(false);
                }
            }
        });
    };

    let toggle_class = move |p: Portal| {
        if portal() == p {
            "role-toggle-option active"
        } else {
            "role-toggle-option"
        }
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "FarmDesk" }
                    CardDescription { "Sign in to your company portal" }
                }
                CardContent {
                    div { class: "role-toggle", role: "radiogroup",
                        for p in [Portal::Admin, Portal::Officer] {
                            button {
                                key: "{p.label()}",
                                class: toggle_class(p),
                                r#type: "button",
                                role: "radio",
                                "aria-checked": portal() == p,
                                onclick: move |_| portal.set(p),
                                "{p.label()}"
                            }
                        }
                    }

                    Form { onsubmit: handle_login,
                        FormField {
                            label: "Company ID",
                            id: "company-id",
                            value: company_id,
                            placeholder: "ACME-001",
                        }
                        FormField { label: "Username", id: "username", value: username }
                        FormField {
                            label: "Password",
                            id: "password",
                            value: password,
                            input_type: "password",
                        }

                        ErrorText { message: error_msg() }

                        Button { submit: true, disabled: loading(),
                            if loading() {
                                "Signing in..."
                            } else {
                                "Login as {portal().label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
