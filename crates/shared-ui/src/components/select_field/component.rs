use dioxus::prelude::*;

/// Labelled native `<select>` over `(value, label)` pairs.
#[component]
pub fn SelectField(
    id: String,
    label: String,
    options: Vec<(String, String)>,
    value: String,
    on_change: EventHandler<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "wd-field",
            label { class: "wd-field-label", r#for: "{id}", "{label}" }
            select {
                class: "wd-select",
                id: "{id}",
                name: "{id}",
                disabled: disabled,
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                for (key, text) in options {
                    option {
                        key: "{key}",
                        value: "{key}",
                        selected: key == value,
                        "{text}"
                    }
                }
            }
        }
    }
}
