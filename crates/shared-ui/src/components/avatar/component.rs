use dioxus::prelude::*;
use dioxus_primitives::avatar::{Avatar, AvatarFallback, AvatarImage};

/// Round user picture that falls back to initials while the image loads or
/// when it fails.
#[component]
pub fn UserAvatar(
    #[props(default)] src: Option<String>,
    initials: String,
    #[props(default = false)] large: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Avatar {
            class: if large { "wd-avatar wd-avatar-lg" } else { "wd-avatar" },
            if let Some(url) = src.filter(|s| !s.is_empty()) {
                AvatarImage { class: "wd-avatar-image", src: url }
            }
            AvatarFallback { class: "wd-avatar-fallback", "{initials}" }
        }
    }
}
