//! Patient dashboard view.

use api::Role;
use dioxus::prelude::*;
use ui::{use_auth, use_session, LogoutButton};

use crate::guard::RouteGuard;

/// Patient landing view: greeting plus the saved-clinics list.
#[component]
pub fn PatientDashboard() -> Element {
    rsx! {
        RouteGuard {
            allowed: vec![Role::Patient],
            PatientHome {}
        }
    }
}

#[component]
fn PatientHome() -> Element {
    let session = use_session();
    let error = use_signal(|| Option::<String>::None);

    let name = session()
        .user()
        .map(|user| user.full_name.clone())
        .unwrap_or_default();
    let saved: Vec<i64> = session()
        .user()
        .map(|user| user.saved_clinics.iter().copied().collect())
        .unwrap_or_default();

    rsx! {
        div {
            class: "dashboard patient-dashboard",

            h1 { "Welcome, {name}" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            section {
                h2 { "Saved clinics" }
                if saved.is_empty() {
                    p { "No saved clinics yet." }
                }
                ul {
                    for clinic_id in saved {
                        SavedClinicRow { key: "{clinic_id}", clinic_id, error }
                    }
                }
            }

            LogoutButton {}
        }
    }
}

#[component]
fn SavedClinicRow(clinic_id: i64, error: Signal<Option<String>>) -> Element {
    let auth = use_auth();
    let mut error = error;

    let onclick = move |_| {
        let auth = auth.clone();
        async move {
            if auth.toggle_saved_clinic(clinic_id).await.is_err() {
                error.set(Some("Could not update saved clinics.".to_string()));
            }
        }
    };

    rsx! {
        li {
            "Clinic #{clinic_id} "
            button { onclick: onclick, "Remove" }
        }
    }
}
