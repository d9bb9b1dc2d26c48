use crate::auth::use_session;
use crate::notify;
use crate::routes::login::role_options;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{RegisterRequest, Role};
use shared_ui::{use_toast, Button, Card, CardContent, CardFooter, SelectField, TextField};
use std::collections::HashMap;

/// Registration form. The password confirmation is checked here; the
/// session store only sees the credentials.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let toasts = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut role = use_signal(|| Role::Freelancer);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        let form = RegisterRequest {
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
            role: role(),
        };

        if let Err(e) = form.check() {
            field_errors.set(e.field_errors.clone());
            notify::error(&toasts, &e);
            return;
        }

        field_errors.set(HashMap::new());
        loading.set(true);
        if !session.register(form.credentials()).await {
            loading.set(false);
        }
    };

    rsx! {
        Card {
            class: "auth-card",
            title: "Create Account".to_string(),
            description: "Pick the workspace you want to join".to_string(),

            CardContent {
                form { onsubmit: handle_register,
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
                        placeholder: "Choose a password",
                        value: password(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                        error: field_errors().get("password").cloned(),
                    }
                    TextField {
                        id: "confirm_password",
                        label: "Confirm Password",
                        input_type: "password",
                        placeholder: "Repeat your password",
                        value: confirm_password(),
                        on_input: move |e: FormEvent| confirm_password.set(e.value()),
                        error: field_errors().get("confirm_password").cloned(),
                    }
                    SelectField {
                        id: "role",
                        label: "I am a",
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
                        loading_label: "Creating account...".to_string(),
                        "Create Account"
                    }
                }
            }

            CardFooter {
                p { class: "auth-link",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
