//! # API crate — session core for the AfyaLink client
//!
//! Everything the frontends need to know about "who is logged in" lives
//! here, behind plain types the UI layer wraps in signals.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Domain types (`User`, `UserProfile`, `Role`) and the backend wire formats |
//! | [`session`] | [`SessionStore`]: owned session container, observer interface, persistence over an injected [`store::CredentialStore`] |
//! | [`auth`] | [`Auth`]: login, signup, logout, profile updates, saved-clinic toggles, admin directory |
//! | [`client`] | [`ApiClient`]: REST calls against the backend |
//! | [`guard`] | Route-guard decision function |
//! | [`config`] | Backend base-URL configuration |
//! | [`error`] | [`ApiError`] taxonomy |
//!
//! ## Contract
//!
//! Operations are one-shot: on success they update the session store (and
//! through it, persistent storage); on any failure the prior session is
//! left untouched and the typed error is returned. Corrupt persisted
//! state is discarded silently at rehydration — the app starts logged
//! out rather than failing.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod session;

pub use auth::Auth;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use guard::GuardOutcome;
pub use models::{Role, User, UserPatch, UserProfile};
pub use session::{Session, SessionStore, SubscriptionId, TOKEN_KEY, USER_KEY};
