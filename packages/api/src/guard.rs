//! Route-guard decision logic.
//!
//! Pure function of the session snapshot and a view's allowed roles; the
//! frontend's guard component turns the outcome into a render or a
//! redirect.

use crate::models::Role;
use crate::session::Session;

/// What the router should do with a navigation into a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Rehydration still running: render a placeholder, nothing else.
    Loading,
    /// No authenticated session: redirect to the login view.
    SignIn,
    /// Authenticated but not an allowed role: redirect to this role's own
    /// landing view, never the requested one.
    Landing(Role),
    /// Render the requested view.
    Allow,
}

/// Evaluate a navigation into a view restricted to `allowed` roles.
pub fn evaluate(session: &Session, allowed: &[Role]) -> GuardOutcome {
    if session.loading() {
        return GuardOutcome::Loading;
    }
    let Some(role) = session.role() else {
        return GuardOutcome::SignIn;
    };
    if allowed.contains(&role) {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Landing(role)
    }
}

#[cfg(test)]
mod tests {
    use store::MemoryStore;

    use super::*;
    use crate::models::{User, UserProfile};
    use crate::session::SessionStore;

    fn store_with(role: Role) -> SessionStore {
        let store = SessionStore::new(MemoryStore::new());
        store.rehydrate();
        store.set_credentials(
            "tok1".to_string(),
            User {
                id: 1,
                full_name: "Test Account".to_string(),
                email: "test@afyalink.ke".to_string(),
                phone_number: None,
                role,
                clinic_id: None,
                profile: UserProfile::default(),
                saved_clinics: Default::default(),
            },
        );
        store
    }

    #[test]
    fn test_loading_session_renders_placeholder_only() {
        let store = SessionStore::new(MemoryStore::new());
        assert_eq!(
            evaluate(&store.snapshot(), &[Role::Patient]),
            GuardOutcome::Loading
        );
    }

    #[test]
    fn test_missing_session_redirects_to_login() {
        let store = SessionStore::new(MemoryStore::new());
        store.rehydrate();
        assert_eq!(
            evaluate(&store.snapshot(), &[Role::Patient]),
            GuardOutcome::SignIn
        );
    }

    #[test]
    fn test_wrong_role_lands_on_own_dashboard() {
        let store = store_with(Role::Patient);
        let outcome = evaluate(&store.snapshot(), &[Role::Admin]);
        assert_eq!(outcome, GuardOutcome::Landing(Role::Patient));
        if let GuardOutcome::Landing(role) = outcome {
            assert_eq!(role.landing_path(), "/patient-dashboard");
        }
    }

    #[test]
    fn test_allowed_role_renders_view() {
        let store = store_with(Role::Admin);
        assert_eq!(
            evaluate(&store.snapshot(), &[Role::Admin]),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn test_unknown_role_lands_on_public_home() {
        let store = store_with(Role::Unknown);
        let outcome = evaluate(&store.snapshot(), &[Role::Clinic]);
        assert_eq!(outcome, GuardOutcome::Landing(Role::Unknown));
        assert_eq!(Role::Unknown.landing_path(), "/");
    }

    #[test]
    fn test_view_open_to_several_roles() {
        let allowed = [Role::Clinic, Role::Chv];
        assert_eq!(
            evaluate(&store_with(Role::Chv).snapshot(), &allowed),
            GuardOutcome::Allow
        );
        assert_eq!(
            evaluate(&store_with(Role::Patient).snapshot(), &allowed),
            GuardOutcome::Landing(Role::Patient)
        );
    }
}
