use dioxus::prelude::*;

/// Anchored panel with local open/closed state.
///
/// Clicking the trigger toggles the panel. Any click outside it lands on a
/// transparent backdrop that closes it, and so does Escape.
#[component]
pub fn Disclosure(
    open: Signal<bool>,
    label: String,
    trigger: Element,
    #[props(default)] align_end: bool,
    children: Element,
) -> Element {
    let mut open = open;
    let is_open = open();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "wd-disclosure",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    open.set(false);
                }
            },
            button {
                class: "wd-disclosure-trigger",
                r#type: "button",
                "aria-label": "{label}",
                "aria-haspopup": "true",
                "aria-expanded": if is_open { "true" } else { "false" },
                onclick: move |_| {
                    let current = open();
                    open.set(!current);
                },
                {trigger}
            }
            if is_open {
                div {
                    class: "wd-disclosure-backdrop",
                    onclick: move |_| open.set(false),
                }
                div {
                    class: "wd-disclosure-panel",
                    "data-align": if align_end { "end" } else { "start" },
                    role: "menu",
                    {children}
                }
            }
        }
    }
}

/// Clickable row inside a [`Disclosure`] panel.
#[component]
pub fn DisclosureItem(
    on_select: EventHandler<()>,
    #[props(default)] destructive: bool,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "wd-disclosure-item",
            r#type: "button",
            role: "menuitem",
            "data-destructive": if destructive { "true" } else { "false" },
            onclick: move |_| on_select.call(()),
            {children}
        }
    }
}

#[component]
pub fn DisclosureSeparator() -> Element {
    rsx! {
        div { class: "wd-disclosure-separator", role: "separator" }
    }
}
