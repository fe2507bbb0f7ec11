use api::{Backend, LoginRequest};
use dioxus::prelude::*;

use crate::components::{
    error_toast, use_toast, Button, Card, CardContent, CardHeader, CardTitle, Input, Label,
    ToastOptions,
};
use super::begin_submit;
use crate::{use_api, use_auth, NavTarget};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Email and password sign-in.
///
/// A successful login only updates the session; the route guard then moves the
/// visitor to the dashboard or the pending-approval page.
#[component]
pub fn LoginView(on_navigate: EventHandler<NavTarget>) -> Element {
    let api = use_api();
    let mut session = use_auth();
    let toast = use_toast();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !begin_submit(&mut submitting.write()) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            let credentials = LoginRequest {
                email: email(),
                password: password(),
            };
            let outcome = api.authenticate(&credentials).await;
            let result = session.write().apply_login(outcome);
            submitting.set(false);

            match result {
                Ok(true) => {
                    toast.success(
                        "Success".to_string(),
                        ToastOptions::new().description("Logged in successfully.".to_string()),
                    );
                }
                Ok(false) => {
                    toast.error(
                        "Error".to_string(),
                        ToastOptions::new().description("Invalid credentials".to_string()),
                    );
                }
                Err(e) => {
                    let (title, message) = error_toast(&e, "Failed to log in. Please try again.");
                    toast.error(title, ToastOptions::new().description(message));
                }
            }
        });
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "auth-page",
            Card {
                class: "auth-card",
                CardHeader {
                    class: "auth-header",
                    div { class: "auth-logo", "K" }
                    CardTitle { "Login" }
                    p { class: "auth-subtitle", "Sign in to your account" }
                }
                CardContent {
                    form {
                        class: "auth-form",
                        onsubmit: handle_submit,

                        div {
                            class: "form-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                id: "email",
                                input_type: "email",
                                value: email(),
                                placeholder: "admin@keansa.com",
                                required: true,
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                id: "password",
                                input_type: "password",
                                value: password(),
                                placeholder: "admin123",
                                required: true,
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }

                        Button {
                            class: "full-width",
                            submit: true,
                            disabled: submitting(),
                            if submitting() { "Logging in..." } else { "Login" }
                        }
                    }

                    div {
                        class: "auth-footer",
                        p { "Test Credentials: admin@keansa.com / admin123" }
                        p {
                            "Don't have an account? "
                            a {
                                class: "auth-link",
                                href: "#",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    on_navigate.call(NavTarget::Register);
                                },
                                "Register here"
                            }
                        }
                    }
                }
            }
        }
    }
}
