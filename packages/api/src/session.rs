//! In-memory session state and its persistence.
//!
//! [`SessionStore`] is the single source of truth for "who is logged in".
//! It owns an injected [`CredentialStore`] backend; every mutation keeps
//! the persisted keys and the in-memory snapshot in step and synchronously
//! notifies subscribers with the new snapshot. Authentication operations
//! are the only writers; everything else reads.

use std::cell::RefCell;
use std::rc::Rc;

use store::CredentialStore;

use crate::models::{Role, User};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the serialized user record.
pub const USER_KEY: &str = "currentUser";

/// Token + user pair. The two are only ever stored together.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub token: String,
    pub user: User,
}

/// Snapshot of the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    loading: bool,
    auth: Option<Credentials>,
}

impl Session {
    /// State before rehydration has finished.
    pub fn initial() -> Self {
        Self {
            loading: true,
            auth: None,
        }
    }

    fn logged_out() -> Self {
        Self {
            loading: false,
            auth: None,
        }
    }

    fn authenticated(credentials: Credentials) -> Self {
        Self {
            loading: false,
            auth: Some(credentials),
        }
    }

    /// True only while the initial rehydration is in progress.
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn token(&self) -> Option<&str> {
        self.auth.as_ref().map(|c| c.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.auth.as_ref().map(|c| &c.user)
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Subscriber = Box<dyn Fn(&Session)>;

struct Inner {
    session: Session,
    storage: Box<dyn CredentialStore>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: usize,
}

/// Owned session container; handles are cheap clones of the same store.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Inner>>,
}

impl SessionStore {
    /// Create a store over the given backend, in the loading state.
    /// Call [`SessionStore::rehydrate`] once at startup.
    pub fn new(storage: impl CredentialStore + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                session: Session::initial(),
                storage: Box::new(storage),
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Restore a previously persisted session.
    ///
    /// Both keys must be present and the user record must parse; anything
    /// else clears the persisted state and starts logged out. Corrupt data
    /// is discarded with a logged diagnostic, never surfaced.
    pub fn rehydrate(&self) {
        let restored = {
            let inner = self.inner.borrow();
            read_persisted(inner.storage.as_ref())
        };
        {
            let mut inner = self.inner.borrow_mut();
            match restored {
                Some(credentials) => inner.session = Session::authenticated(credentials),
                None => {
                    inner.storage.remove(TOKEN_KEY);
                    inner.storage.remove(USER_KEY);
                    inner.session = Session::logged_out();
                }
            }
        }
        self.notify();
    }

    pub fn snapshot(&self) -> Session {
        self.inner.borrow().session.clone()
    }

    /// Register for synchronous notification on every session change.
    /// The callback receives the full new snapshot and must not re-enter
    /// the store.
    pub fn subscribe(&self, subscriber: impl Fn(&Session) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(sid, _)| *sid != id);
    }

    /// Install a fresh token + user pair after a successful login or
    /// signup.
    pub fn set_credentials(&self, token: String, user: User) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.storage.set(TOKEN_KEY, &token);
            persist_user(inner.storage.as_ref(), &user);
            inner.session = Session::authenticated(Credentials { token, user });
        }
        self.notify();
    }

    /// Replace the cached user record, keeping the current token.
    /// No-op when there is no authenticated session.
    pub fn update_user(&self, user: User) {
        {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            let Some(credentials) = inner.session.auth.as_mut() else {
                return;
            };
            credentials.user = user;
            persist_user(inner.storage.as_ref(), &credentials.user);
        }
        self.notify();
    }

    /// Drop the session and its persisted keys. Never fails.
    pub fn clear(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.storage.remove(TOKEN_KEY);
            inner.storage.remove(USER_KEY);
            inner.session = Session::logged_out();
        }
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let inner = self.inner.borrow();
        for (_, subscriber) in &inner.subscribers {
            subscriber(&snapshot);
        }
    }
}

fn persist_user(storage: &dyn CredentialStore, user: &User) {
    if let Ok(json) = serde_json::to_string(user) {
        storage.set(USER_KEY, &json);
    }
}

fn read_persisted(storage: &dyn CredentialStore) -> Option<Credentials> {
    let token = storage.get(TOKEN_KEY)?;
    let raw = storage.get(USER_KEY)?;
    match serde_json::from_str::<User>(&raw) {
        Ok(user) => Some(Credentials { token, user }),
        Err(error) => {
            tracing::warn!(%error, "discarding unreadable persisted session");
            None
        }
    }
}
