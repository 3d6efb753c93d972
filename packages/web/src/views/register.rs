//! Registration page view.

use api::Role;
use dioxus::prelude::*;
use ui::{use_auth, use_session};

use crate::Route;

/// Registration page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut role = use_signal(|| Role::Patient);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the role's dashboard
    if !session().loading() {
        if let Some(active) = session().role() {
            nav.replace(Route::landing(active));
        }
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(None);

            let name = full_name().trim().to_string();
            let e = email().trim().to_string();
            let phone = phone_number().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if name.is_empty() {
                error.set(Some("Full name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if phone.is_empty() {
                error.set(Some("Phone number is required".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match auth.signup(&name, &e, &phone, &p, role()).await {
                Ok(user) => {
                    nav.replace(Route::landing(user.role));
                }
                Err(_) => {
                    loading.set(false);
                    error.set(Some(
                        "Registration failed. Please try again.".to_string(),
                    ));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create your AfyaLink account" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Full name",
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "tel",
                    placeholder: "Phone number",
                    value: phone_number(),
                    oninput: move |evt: FormEvent| phone_number.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                select {
                    onchange: move |evt: FormEvent| role.set(Role::from_name(&evt.value())),
                    option { value: "patient", "Patient" }
                    option { value: "clinic", "Clinic" }
                    option { value: "chv", "Community health volunteer" }
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
