use crate::auth::{use_identity, use_portal};
use dioxus::prelude::*;
use portal_client::{OfficerDirectory, PendingDelete};
use shared_types::{Officer, OfficerForm};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ConfirmDialog, ErrorText,
    Form, FormField, LoadingPanel,
};

/// Officer management: create form, full list, per-row delete behind a
/// confirmation dialog. The list is re-fetched after every change.
#[component]
pub fn AdminOfficers() -> Element {
    let identity = use_identity();
    let directory = OfficerDirectory::new(use_portal(), identity.clone());

    let mut officers = use_resource({
        let directory = directory.clone();
        move || {
            let directory = directory.clone();
            async move { directory.list().await }
        }
    });

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut creating = use_signal(|| false);
    let mut pending_delete: Signal<Option<PendingDelete<Officer>>> = use_signal(|| None);
    let mut deleting_id: Signal<Option<String>> = use_signal(|| None);

    let handle_create = {
        let directory = directory.clone();
        move |_: FormEvent| {
            if creating() {
                return;
            }
            let directory = directory.clone();
            let form = OfficerForm {
                username: username(),
                password: password(),
            };
            error_msg.set(None);
            creating.set(true);

            spawn(async move {
                match directory.create(&form).await {
                    Ok(_) => {
                        username.set(String::new());
                        password.set(String::new());
                        officers.restart();
                    }
                    Err(err) => error_msg.set(Some(err.user_message().to_string())),
                }
                creating.set(false);
            });
        }
    };

    let handle_confirm_delete = move |_| {
        let Some(pending) = pending_delete.take() else {
            return;
        };
        let confirmed = pending.confirm();
        let directory = directory.clone();
        error_msg.set(None);
        deleting_id.set(Some(confirmed.key().to_string()));

        spawn(async move {
            match directory.delete(confirmed).await {
                Ok(()) => officers.restart(),
                Err(err) => error_msg.set(Some(err.user_message().to_string())),
            }
            deleting_id.set(None);
        });
    };

    let prompt = pending_delete
        .read()
        .as_ref()
        .map(|p| p.prompt())
        .unwrap_or_default();

    rsx! {
        div { class: "officers-page",
            header { class: "page-header",
                h1 { class: "page-title", "Officers" }
                p { class: "page-subtitle", "Company: {identity.company_id}" }
            }

            Card {
                CardHeader {
                    CardTitle { "Create New Officer" }
                }
                CardContent {
                    Form { class: "inline-form", onsubmit: handle_create,
                        FormField {
                            label: "Username",
                            id: "officer-username",
                            value: username,
                            placeholder: "officer username",
                        }
                        FormField {
                            label: "Password",
                            id: "officer-password",
                            value: password,
                            input_type: "password",
                            placeholder: "temporary password",
                        }
                        Button { submit: true, disabled: creating(),
                            if creating() { "Creating..." } else { "Create Officer" }
                        }
                    }
                    ErrorText { message: error_msg() }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "All Officers" }
                }
                CardContent {
                    {
                        match &*officers.read() {
                            None => rsx! { LoadingPanel {} },
                            Some(Err(err)) => rsx! {
                                ErrorText { message: Some(err.user_message().to_string()) }
                            },
                            Some(Ok(list)) if list.is_empty() => rsx! {
                                p { class: "empty-state", "No officers found" }
                            },
                            Some(Ok(list)) => rsx! {
                                ul { class: "row-list",
                                    for officer in list.iter().cloned() {
                                        li { key: "{officer.id}", class: "row",
                                            div { class: "row-main",
                                                p { class: "row-title", "{officer.username}" }
                                                p { class: "row-meta",
                                                    "Role: {officer.role} · Company: {officer.company_id}"
                                                }
                                                p { class: "row-id", "ID: {officer.id}" }
                                            }
                                            {
                                                let busy = deleting_id.read().as_deref() == Some(officer.id.as_str());
                                                let target = officer.clone();
                                                rsx! {
                                                    Button {
                                                        variant: ButtonVariant::Destructive,
                                                        disabled: busy,
                                                        onclick: move |_| pending_delete.set(Some(PendingDelete::new(target.clone()))),
                                                        if busy { "Deleting..." } else { "Delete" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            },
                        }
                    }
                }
            }

            ConfirmDialog {
                open: pending_delete.read().is_some(),
                title: "Delete officer",
                message: prompt,
                on_confirm: handle_confirm_delete,
                on_cancel: move |_| {
                    if let Some(pending) = pending_delete.take() {
                        pending.cancel();
                    }
                },
            }
        }
    }
}
