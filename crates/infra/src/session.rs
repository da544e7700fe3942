//! Shared session state
//!
//! Set after login or a successful current-user fetch, cleared on logout and
//! whenever the API answers 401. Every clone of the client sees the same
//! session.

use std::sync::Arc;

use opsdesk_domain::{Session, User};
use parking_lot::RwLock;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }

    pub fn establish(&self, user: User) -> Session {
        let session = Session::new(user);
        debug!(user_id = %session.user.id, role = %session.user.role, "session established");
        *self.inner.write() = Some(session.clone());
        session
    }

    /// Drop the session; returns whether one was active.
    pub fn clear(&self) -> bool {
        let previous = self.inner.write().take();
        if let Some(session) = &previous {
            debug!(user_id = %session.user.id, "session cleared");
        }
        previous.is_some()
    }

    /// Business a non-admin user is bound to.
    pub fn tenant_scope(&self) -> Option<String> {
        self.inner
            .read()
            .as_ref()
            .filter(|session| !session.is_admin())
            .and_then(|session| session.tenant_id().map(str::to_string))
    }
}
