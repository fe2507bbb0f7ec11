use api::{Backend, FieldErrors, RegisterField, RegisterRequest};
use dioxus::prelude::*;

use crate::components::{
    error_toast, use_toast, Button, Card, CardContent, CardHeader, CardTitle, Input, Label,
    ToastOptions,
};
use super::begin_submit;
use crate::{use_api, use_auth, NavTarget};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Account creation form with per-field validation.
///
/// The backend signs the new account in, so a successful registration goes
/// straight to the dashboard and the guard takes over from there.
#[component]
pub fn RegisterView(on_navigate: EventHandler<NavTarget>) -> Element {
    let api = use_api();
    let mut session = use_auth();
    let toast = use_toast();

    let form = use_signal(RegisterRequest::default);
    let errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let data = form();
        let found = data.validate();
        let valid = found.is_empty();
        let mut errors = errors;
        errors.set(found);
        if !valid {
            return;
        }

        if !begin_submit(&mut submitting.write()) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            let outcome = api.register(&data).await;
            let result = session.write().apply_register(outcome);
            submitting.set(false);

            match result {
                Ok(true) => {
                    toast.success(
                        "Success".to_string(),
                        ToastOptions::new()
                            .description("Account created successfully! You are now logged in.".to_string()),
                    );
                    on_navigate.call(NavTarget::Dashboard(None));
                }
                Ok(false) => {
                    toast.error(
                        "Error".to_string(),
                        ToastOptions::new()
                            .description("Failed to create account. Please try again.".to_string()),
                    );
                }
                Err(e) => {
                    let (_, message) =
                        error_toast(&e, "Failed to create account. Please try again.");
                    toast.error("Error".to_string(), ToastOptions::new().description(message));
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
                    CardTitle { "Create an Account" }
                    p { class: "auth-subtitle", "Enter your information to create an account" }
                }
                CardContent {
                    form {
                        class: "auth-form",
                        onsubmit: handle_submit,

                        div {
                            class: "form-grid two",
                            RegisterInput {
                                field: RegisterField::FirstName,
                                label: "First Name",
                                placeholder: "First name",
                                form,
                                errors,
                            }
                            RegisterInput {
                                field: RegisterField::LastName,
                                label: "Last Name",
                                placeholder: "Last name",
                                form,
                                errors,
                            }
                        }
                        RegisterInput {
                            field: RegisterField::Email,
                            label: "Email",
                            input_type: "email",
                            placeholder: "admin@example.com",
                            form,
                            errors,
                        }
                        RegisterInput {
                            field: RegisterField::Mobile,
                            label: "Mobile Number",
                            input_type: "tel",
                            placeholder: "Your mobile number",
                            form,
                            errors,
                        }
                        RegisterInput {
                            field: RegisterField::Password,
                            label: "Password",
                            input_type: "password",
                            placeholder: "Create a password",
                            form,
                            errors,
                        }
                        RegisterInput {
                            field: RegisterField::ConfirmPassword,
                            label: "Confirm Password",
                            input_type: "password",
                            placeholder: "Confirm your password",
                            form,
                            errors,
                        }

                        Button {
                            class: "full-width",
                            submit: true,
                            disabled: submitting(),
                            if submitting() { "Creating Account..." } else { "Create Account" }
                        }
                    }

                    div {
                        class: "auth-footer",
                        p {
                            "Already have an account? "
                            a {
                                class: "auth-link",
                                href: "#",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    on_navigate.call(NavTarget::Login);
                                },
                                "Sign in"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One labelled field of the registration form. Typing clears the field's error.
#[component]
fn RegisterInput(
    field: RegisterField,
    label: String,
    #[props(default = "text".to_string())] input_type: String,
    placeholder: String,
    form: Signal<RegisterRequest>,
    errors: Signal<FieldErrors>,
) -> Element {
    let value = form.read().field(field).to_string();
    let error = errors.read().get(&field).copied();

    rsx! {
        div {
            class: "form-field",
            Label { html_for: "{field.id()}", "{label}" }
            Input {
                id: "{field.id()}",
                input_type,
                value,
                placeholder,
                invalid: error.is_some(),
                oninput: move |evt: FormEvent| {
                    let (mut form, mut errors) = (form, errors);
                    form.write().set_field(field, evt.value());
                    if errors.read().contains_key(&field) {
                        errors.write().remove(&field);
                    }
                },
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
