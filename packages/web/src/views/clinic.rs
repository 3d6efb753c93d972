//! Clinic dashboard view.

use api::Role;
use dioxus::prelude::*;
use ui::{use_session, LogoutButton};

use crate::guard::RouteGuard;

/// Clinic landing view.
#[component]
pub fn ClinicDashboard() -> Element {
    rsx! {
        RouteGuard {
            allowed: vec![Role::Clinic],
            ClinicHome {}
        }
    }
}

#[component]
fn ClinicHome() -> Element {
    let session = use_session();
    let name = session()
        .user()
        .map(|user| user.full_name.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "dashboard clinic-dashboard",
            h1 { "Clinic dashboard" }
            p { "Signed in as {name}" }
            LogoutButton {}
        }
    }
}
