//! Public landing page.

use dioxus::prelude::*;

use crate::Route;

/// Public home view; the only route that needs no session.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-page",
            h1 { "AfyaLink" }
            p { "Find clinics, book appointments and stay connected to community health services across Kenya." }
            div {
                class: "home-actions",
                Link { to: Route::Login {}, "Sign in" }
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
