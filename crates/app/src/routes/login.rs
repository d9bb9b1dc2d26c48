use crate::auth::use_session;
use crate::notify;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{LoginRequest, Role};
use shared_ui::{use_toast, Button, Card, CardContent, CardFooter, SelectField, TextField};
use std::collections::HashMap;

/// `(value, label)` pairs for the role pickers on both auth forms.
pub fn role_options() -> Vec<(String, String)> {
    Role::ALL
        .iter()
        .map(|role| (role.as_str().to_string(), role.display_name().to_string()))
        .collect()
}

/// Sign-in form. Any non-empty email and password pair is accepted; the
/// chosen role decides which dashboard opens.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let toasts = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Freelancer);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        let request = LoginRequest::new(email(), password(), role());

        if let Err(e) = request.check() {
            field_errors.set(e.field_errors.clone());
            notify::error(&toasts, &e);
            return;
        }

        field_errors.set(HashMap::new());
        loading.set(true);
        let signed_in = session.login(request).await;
        if !signed_in {
            loading.set(false);
        }
    };

    rsx! {
        Card {
            class: "auth-card",
            title: "Sign In".to_string(),
            description: "Enter your credentials to access your workspace".to_string(),

            CardContent {
                form { onsubmit: handle_login,
                    TextField {
                        id: "email",
                        label: "Email",
                        input_type: "email",
                        placeholder: "user@example.com",
                        value: email(),
                        on_input: move |e: FormEvent| email.set(e.value()),
                        error: field_errors().get("email").cloned(),
                    }
                    TextField {
                        id: "password",
                        label: "Password",
                        input_type: "password",
                        placeholder: "Enter your password",
                        value: password(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                        error: field_errors().get("password").cloned(),
                    }
                    SelectField {
                        id: "role",
                        label: "Sign in as",
                        options: role_options(),
                        value: role().as_str().to_string(),
                        on_change: move |value: String| {
                            if let Ok(picked) = value.parse::<Role>() {
                                role.set(picked);
                            }
                        },
                        disabled: loading(),
                    }
                    Button {
                        button_type: "submit",
                        class: "auth-submit",
                        loading: loading(),
                        loading_label: "Signing in...".to_string(),
                        "Sign In"
                    }
                }
            }

            CardFooter {
                p { class: "auth-link",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Create one" }
                }
            }
        }
    }
}
