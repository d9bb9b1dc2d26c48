use dioxus::prelude::*;
use dioxus_primitives::label::Label;

/// Labelled text input with an inline validation message.
#[component]
pub fn TextField(
    id: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] readonly: bool,
    #[props(default)] error: Option<String>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "wd-field",
            Label { class: "wd-field-label", html_for: id.clone(), "{label}" }
            input {
                class: "wd-field-input",
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                readonly: readonly,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(err) = error {
                div { class: "wd-field-error", role: "alert", "{err}" }
            }
        }
    }
}
