use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Alert,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Alert => "alert",
        }
    }
}

/// Inline label such as the role chip in the user menu.
#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "wd-badge", "data-style": variant.class(), {children} }
    }
}

/// Text for a counter bubble: hidden at zero, capped at `9+`.
pub fn count_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_string()),
    }
}

/// Small counter bubble anchored to an icon button.
#[component]
pub fn CountBadge(count: usize) -> Element {
    rsx! {
        if let Some(label) = count_label(count) {
            span { class: "wd-count-badge", "aria-label": "{count} unread", "{label}" }
        }
    }
}
