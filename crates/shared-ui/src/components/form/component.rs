use dioxus::prelude::*;

/// A form wrapper that prevents default submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        form {
            class: "form {class}",
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            {children}
        }
    }
}

/// Labelled text input bound to a signal.
#[component]
pub fn FormField(
    label: String,
    id: String,
    value: Signal<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut value = value;
    rsx! {
        div { class: "form-field",
            label { class: "form-label", r#for: "{id}", "{label}" }
            input {
                class: "input",
                id: "{id}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                disabled,
                value: "{value}",
                oninput: move |e: FormEvent| value.set(e.value()),
            }
        }
    }
}
