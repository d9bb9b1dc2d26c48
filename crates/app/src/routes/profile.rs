use crate::auth::use_session;
use crate::notify;
use dioxus::prelude::*;
use shared_types::ProfileForm;
use shared_ui::{use_toast, Badge, BadgeVariant, Button, Card, CardContent, TextField, UserAvatar};
use std::collections::HashMap;

/// Edit the display name and avatar of the signed-in user. Email and role
/// are shown but fixed.
#[component]
pub fn ProfilePage() -> Element {
    let mut session = use_session();
    let toasts = use_toast();
    let current = session.current();

    let mut name = use_signal(|| current.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut avatar = use_signal(|| current.as_ref().map(|u| u.avatar.clone()).unwrap_or_default());
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let form = ProfileForm {
            name: name(),
            avatar: Some(avatar()),
        };
        let update = match form.into_update() {
            Ok(update) => update,
            Err(e) => {
                field_errors.set(e.field_errors.clone());
                notify::error(&toasts, &e);
                return;
            }
        };
        field_errors.set(HashMap::new());
        if let Ok(saved) = session.update_profile(update) {
            name.set(saved.name);
            avatar.set(saved.avatar);
        }
    };

    let Some(user) = current else {
        return rsx! {};
    };
    let role_label = user.role.display_name();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        div { class: "profile-page",
            Card {
                title: "Profile".to_string(),
                description: "How you appear to others in the workspace".to_string(),

                CardContent {
                    div { class: "profile-summary",
                        UserAvatar { src: user.avatar.clone(), initials: user.initials(), large: true }
                        div { class: "profile-summary-text",
                            span { class: "profile-name", "{user.name}" }
                            Badge { variant: BadgeVariant::Secondary, "{role_label}" }
                        }
                    }

                    form { onsubmit: handle_save,
                        TextField {
                            id: "name",
                            label: "Name",
                            value: name(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                            error: field_errors().get("name").cloned(),
                        }
                        TextField {
                            id: "email",
                            label: "Email",
                            input_type: "email",
                            value: user.email.clone(),
                            readonly: true,
                        }
                        TextField {
                            id: "avatar",
                            label: "Avatar URL",
                            input_type: "url",
                            placeholder: "https://",
                            value: avatar(),
                            on_input: move |e: FormEvent| avatar.set(e.value()),
                            error: field_errors().get("avatar").cloned(),
                        }
                        div { class: "profile-actions",
                            Button { button_type: "submit", "Save changes" }
                        }
                    }
                }
            }
        }
    }
}
