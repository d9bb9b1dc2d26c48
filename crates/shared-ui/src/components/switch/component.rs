use dioxus::prelude::*;
use dioxus_primitives::switch::{Switch, SwitchThumb};

/// Labelled on/off switch row.
#[component]
pub fn ToggleSwitch(label: String, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "wd-switch-row",
            span { class: "wd-switch-label", "{label}" }
            Switch {
                class: "wd-switch",
                checked: Some(checked),
                on_checked_change: move |value: bool| on_change.call(value),
                SwitchThumb { class: "wd-switch-thumb" }
            }
        }
    }
}
