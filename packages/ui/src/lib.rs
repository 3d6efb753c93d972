//! This crate contains the shared UI for the workspace.

mod session;
pub use session::{make_session_store, use_auth, use_session, LogoutButton, SessionProvider};
