//! Admin dashboard view with the registered-user directory.

use api::{Role, User};
use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::guard::RouteGuard;

/// Admin landing view.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RouteGuard {
            allowed: vec![Role::Admin],
            AdminHome {}
        }
    }
}

#[component]
fn AdminHome() -> Element {
    let auth = use_auth();
    let users = use_signal(Vec::<User>::new);
    let error = use_signal(|| Option::<String>::None);

    let _ = use_resource({
        let auth = auth.clone();
        move || {
            let auth = auth.clone();
            let mut users = users;
            let mut error = error;
            async move {
                match auth.refresh_directory().await {
                    Ok(list) => users.set(list),
                    Err(_) => error.set(Some("Could not load the user list.".to_string())),
                }
            }
        }
    });

    rsx! {
        div {
            class: "dashboard admin-dashboard",

            h1 { "Administration" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            section {
                h2 { "Registered users" }
                ul {
                    for user in users() {
                        DirectoryRow { key: "{user.id}", user, users, error }
                    }
                }
            }

            LogoutButton {}
        }
    }
}

#[component]
fn DirectoryRow(
    user: User,
    users: Signal<Vec<User>>,
    error: Signal<Option<String>>,
) -> Element {
    let auth = use_auth();
    let mut users = users;
    let mut error = error;
    let user_id = user.id;
    let role_name = user.role.as_str();
    let full_name = &user.full_name;
    let email = &user.email;

    let onclick = move |_| {
        let auth = auth.clone();
        async move {
            match auth.delete_user(user_id).await {
                Ok(()) => users.set(auth.directory()),
                Err(_) => error.set(Some("Could not delete the account.".to_string())),
            }
        }
    };

    rsx! {
        li {
            span { "{full_name} <{email}> ({role_name}) " }
            button { onclick: onclick, "Remove" }
        }
    }
}
