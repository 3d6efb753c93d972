//! Login page view with email/password form and role selection.

use api::Role;
use dioxus::prelude::*;
use ui::{use_auth, use_session};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Patient);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the role's dashboard
    if !session().loading() {
        if let Some(active) = session().role() {
            nav.replace(Route::landing(active));
        }
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match auth.login(&e, &p, role()).await {
                Ok(user) => {
                    nav.replace(Route::landing(user.role));
                }
                Err(_) => {
                    loading.set(false);
                    error.set(Some(
                        "Sign in failed. Check your details and try again.".to_string(),
                    ));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "AfyaLink" }
            p { "Sign in to your account" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                select {
                    onchange: move |evt: FormEvent| role.set(Role::from_name(&evt.value())),
                    option { value: "patient", "Patient" }
                    option { value: "clinic", "Clinic" }
                    option { value: "admin", "Administrator" }
                    option { value: "chv", "Community health volunteer" }
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
