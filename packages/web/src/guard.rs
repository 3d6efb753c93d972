//! Gate component for protected views.

use dioxus::prelude::*;

use api::guard::{self, GuardOutcome};
use api::Role;
use ui::use_session;

use crate::Route;

/// Renders its children only for an authenticated session whose role is
/// in `allowed`; otherwise redirects per the role table. Re-evaluated on
/// every render, so it reacts to navigation and to session changes alike.
#[component]
pub fn RouteGuard(allowed: Vec<Role>, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    match guard::evaluate(&session(), &allowed) {
        GuardOutcome::Loading => rsx! {
            div { class: "session-loading", "Loading..." }
        },
        GuardOutcome::SignIn => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardOutcome::Landing(role) => {
            nav.replace(Route::landing(role));
            rsx! {}
        }
        GuardOutcome::Allow => rsx! {
            {children}
        },
    }
}
