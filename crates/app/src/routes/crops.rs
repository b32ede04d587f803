use crate::auth::{use_identity, use_portal};
use crate::format_helpers::{format_date_human, format_rate_label};
use dioxus::prelude::*;
use portal_client::{CropCatalog, PendingDelete};
use shared_types::{Crop, CropForm};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ConfirmDialog, ErrorText,
    Form, FormField, LoadingPanel,
};

/// Label for the crop form's submit button.
fn submit_label(editing: bool, busy: bool) -> &'static str {
    match (editing, busy) {
        (false, false) => "Add Crop",
        (false, true) => "Adding...",
        (true, false) => "Update Crop",
        (true, true) => "Updating...",
    }
}

/// Crop price list: add/edit form, list, and per-row edit/delete.
///
/// Editing keeps the crop as it was loaded; its name addresses the update
/// even if the form renames it.
#[component]
pub fn AdminCrops() -> Element {
    let identity = use_identity();
    let catalog = CropCatalog::new(use_portal(), identity.clone());

    let mut crops = use_resource({
        let catalog = catalog.clone();
        move || {
            let catalog = catalog.clone();
            async move { catalog.list().await }
        }
    });

    let mut crop_name = use_signal(String::new);
    let mut rate = use_signal(String::new);
    let mut editing: Signal<Option<Crop>> = use_signal(|| None);
    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut pending_delete: Signal<Option<PendingDelete<Crop>>> = use_signal(|| None);
    let mut deleting_name: Signal<Option<String>> = use_signal(|| None);

    let mut reset_form = move || {
        editing.set(None);
        crop_name.set(String::new());
        rate.set(String::new());
    };

    let handle_submit = {
        let catalog = catalog.clone();
        move |_: FormEvent| {
            if saving() {
                return;
            }
            let catalog = catalog.clone();
            let form = CropForm {
                crop_name: crop_name(),
                rate_per_unit: rate(),
            };
            let original = editing.read().as_ref().map(|c| c.crop_name.clone());
            error_msg.set(None);
            saving.set(true);

            spawn(async move {
                let result = match &original {
                    Some(name) => catalog.update(name, &form).await,
                    None => catalog.create(&form).await,
                };
                match result {
                    Ok(_) => {
                        reset_form();
                        crops.restart();
                    }
                    Err(err) => error_msg.set(Some(err.user_message().to_string())),
                }
                saving.set(false);
            });
        }
    };

    let handle_confirm_delete = move |_| {
        let Some(pending) = pending_delete.take() else {
            return;
        };
        let confirmed = pending.confirm();
        let catalog = catalog.clone();
        error_msg.set(None);
        deleting_name.set(Some(confirmed.key().to_string()));

        spawn(async move {
            match catalog.delete(confirmed).await {
                Ok(()) => crops.restart(),
                Err(err) => error_msg.set(Some(err.user_message().to_string())),
            }
            deleting_name.set(None);
        });
    };

    let is_editing = editing.read().is_some();
    let prompt = pending_delete
        .read()
        .as_ref()
        .map(|p| p.prompt())
        .unwrap_or_default();

    rsx! {
        div { class: "crops-page",
            header { class: "page-header",
                h1 { class: "page-title", "Manage Crops & Rates" }
                p { class: "page-subtitle", "Company: {identity.company_id}" }
            }

            Card {
                CardHeader {
                    CardTitle {
                        if is_editing { "Edit Crop" } else { "Add New Crop" }
                    }
                }
                CardContent {
                    Form { class: "inline-form", onsubmit: handle_submit,
                        FormField {
                            label: "Crop Name",
                            id: "crop-name",
                            value: crop_name,
                            placeholder: "e.g. Wheat, Rice, Corn",
                        }
                        FormField {
                            label: "Rate per Unit",
                            id: "crop-rate",
                            value: rate,
                            input_type: "number",
                            placeholder: "e.g. 150.50",
                        }
                        div { class: "form-actions",
                            Button { submit: true, disabled: saving(),
                                {submit_label(is_editing, saving())}
                            }
                            if is_editing {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| reset_form(),
                                    "Cancel"
                                }
                            }
                        }
                    }
                    ErrorText { message: error_msg() }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Crops & Rates" }
                }
                CardContent {
                    {
                        match &*crops.read() {
                            None => rsx! { LoadingPanel {} },
                            Some(Err(err)) => rsx! {
                                ErrorText { message: Some(err.user_message().to_string()) }
                            },
                            Some(Ok(list)) if list.is_empty() => rsx! {
                                p { class: "empty-state", "No crops found. Add your first crop above." }
                            },
                            Some(Ok(list)) => rsx! {
                                ul { class: "row-list",
                                    for crop in list.iter().cloned() {
                                        CropRow {
                                            key: "{crop.crop_name}",
                                            crop: crop.clone(),
                                            deleting: deleting_name.read().as_deref() == Some(crop.crop_name.as_str()),
                                            on_edit: move |crop: Crop| {
                                                crop_name.set(crop.crop_name.clone());
                                                rate.set(crop.rate_input());
                                                editing.set(Some(crop));
                                            },
                                            on_delete: move |crop: Crop| {
                                                pending_delete.set(Some(PendingDelete::new(crop)));
                                            },
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
                title: "Delete crop",
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

#[component]
fn CropRow(
    crop: Crop,
    deleting: bool,
    on_edit: EventHandler<Crop>,
    on_delete: EventHandler<Crop>,
) -> Element {
    let created = format_date_human(crop.created_at.as_ref());
    let created_by = crop.created_by.clone().unwrap_or_default();
    let updated = crop
        .was_updated()
        .then(|| {
            (
                format_date_human(crop.updated_at.as_ref()),
                crop.updated_by.clone().unwrap_or_default(),
            )
        });
    let for_edit = crop.clone();
    let for_delete = crop.clone();

    rsx! {
        li { class: "row",
            div { class: "row-main",
                p { class: "row-title", "{crop.crop_name}" }
                p { class: "row-meta", "Rate: {format_rate_label(crop.rate_per_unit)}" }
                div { class: "row-audit",
                    p { "Created: {created} by " span { class: "row-actor", "{created_by}" } }
                    if let Some((updated, updated_by)) = updated {
                        p { "Updated: {updated} by " span { class: "row-actor", "{updated_by}" } }
                    }
                }
            }
            div { class: "row-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: deleting,
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    if deleting { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}
