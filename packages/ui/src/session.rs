//! Session context and hooks for the UI.

use dioxus::prelude::*;

use api::{ApiClient, ApiConfig, Auth, Role, Session, SessionStore};

/// Create a platform-appropriate session store:
/// - **Web** (WASM + `web` feature): browser localStorage, so sessions
///   survive reloads.
/// - **Native** (tests, tooling): in-memory.
pub fn make_session_store() -> SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorageStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionStore::new(store::MemoryStore::new())
    }
}

/// Get the current session snapshot.
/// Returns a signal that updates when the session changes.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Get the authentication operations.
pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Provider component that owns the session store and the authentication
/// operations. Wrap your app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(Session::initial);

    let auth = use_hook(|| {
        let auth = Auth::new(ApiClient::new(ApiConfig::from_env()), make_session_store());
        // Subscribers are plain `Fn`; write through a copy of the handle
        auth.store().subscribe(move |snapshot| {
            let mut session = session;
            session.set(snapshot.clone());
        });
        auth
    });

    // Rehydrate on mount, then refresh privileged lists by role
    let _ = use_resource({
        let auth = auth.clone();
        move || {
            let auth = auth.clone();
            async move {
                auth.rehydrate();
                if auth.session().role() == Some(Role::Admin) {
                    if let Err(error) = auth.refresh_directory().await {
                        tracing::warn!(%error, "could not refresh the user directory");
                    }
                }
            }
        }
    });

    use_context_provider(|| session);
    use_context_provider(|| auth);

    rsx! {
        {children}
    }
}

/// Button that ends the current session.
///
/// Clearing the session is enough: route guards re-evaluate on the next
/// render and send protected views back to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| auth.logout(),
            "{label}"
        }
    }
}
