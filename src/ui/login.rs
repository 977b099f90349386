//! Sign-in screen

use dioxus::prelude::*;

use crate::app::{AppState, Screen};
use crate::auth::{handle_submit, LoginError, LoginField, LoginForm};

#[component]
pub fn LoginScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(Vec::<LoginError>::new);

    let handle_sign_in = {
        let mut screen = app_state.screen;
        let mut toast = app_state.toast;
        move |_: MouseEvent| {
            let form = LoginForm {
                email: email(),
                password: password(),
            };
            match handle_submit(&form) {
                Ok(success) => {
                    errors.set(Vec::new());
                    toast.set(Some(success));
                    screen.set(Screen::Chat);
                }
                Err(field_errors) => {
                    tracing::debug!("Sign-in form rejected: {} error(s)", field_errors.len());
                    errors.set(field_errors);
                }
            }
        }
    };

    let error_for = |field: LoginField| {
        errors
            .read()
            .iter()
            .find(|e| e.field() == field)
            .map(|e| e.to_string())
    };
    let email_error = error_for(LoginField::Email);
    let password_error = error_for(LoginField::Password);

    rsx! {
        div { class: "login",
            div { class: "login-heading",
                div { class: "login-logo", "💬" }
                h1 { "Welcome back" }
                p { class: "muted", "Enter your email to sign in to your account" }
            }

            div { class: "login-form",
                label { "Email" }
                input {
                    r#type: "email",
                    placeholder: "m@example.com",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                if let Some(message) = email_error {
                    p { class: "field-error", "{message}" }
                }

                label { "Password" }
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                if let Some(message) = password_error {
                    p { class: "field-error", "{message}" }
                }

                button { class: "primary-button", onclick: handle_sign_in, "Sign In" }
            }

            p { class: "muted center",
                "Don't have an account? "
                button { class: "link-button", "Sign up" }
            }
        }
    }
}
