//! Community health volunteer dashboard view.

use api::Role;
use dioxus::prelude::*;
use ui::{use_session, LogoutButton};

use crate::guard::RouteGuard;

/// CHV landing view.
#[component]
pub fn ChvDashboard() -> Element {
    rsx! {
        RouteGuard {
            allowed: vec![Role::Chv],
            ChvHome {}
        }
    }
}

#[component]
fn ChvHome() -> Element {
    let session = use_session();
    let name = session()
        .user()
        .map(|user| user.full_name.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "dashboard chv-dashboard",
            h1 { "Community health dashboard" }
            p { "Signed in as {name}" }
            LogoutButton {}
        }
    }
}
