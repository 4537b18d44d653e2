//! Canonical request view.

use crate::provider::{Session, User};
use axum::http::{request::Parts, HeaderMap};
use std::sync::Arc;

/// Session and user attached to a request after the guard ran.
///
/// `user` is denormalized from the session so handlers can read it
/// directly; both are `None` for anonymous callers.
#[derive(Debug, Clone, Default)]
pub struct AuthSlots {
    session: Option<Arc<Session>>,
    user: Option<User>,
}

impl AuthSlots {
    /// Build slots from a fetched session.
    pub fn from_session(session: Option<Session>) -> Self {
        let user = session.as_ref().map(|s| s.user.clone());
        Self {
            session: session.map(Arc::new),
            user,
        }
    }

    /// The attached session.
    pub fn session(&self) -> Option<&Arc<Session>> {
        self.session.as_ref()
    }

    /// The attached user.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// Mutable request-like view shared by all transports.
pub trait RequestView: Send + Sync {
    /// Headers used to query the identity provider.
    fn headers(&self) -> &HeaderMap;

    /// Currently attached slots, if the guard ran.
    fn slots(&self) -> Option<&AuthSlots>;

    /// Replace the attached slots.
    fn set_slots(&mut self, slots: AuthSlots);

    /// Attach a fetched session and its user.
    fn attach(&mut self, session: Option<Session>) {
        self.set_slots(AuthSlots::from_session(session));
    }

    /// The attached session.
    fn session(&self) -> Option<&Arc<Session>> {
        self.slots().and_then(AuthSlots::session)
    }

    /// The attached user.
    fn user(&self) -> Option<&User> {
        self.slots().and_then(AuthSlots::user)
    }
}

/// HTTP requests keep their slots in the request extensions.
impl RequestView for Parts {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn slots(&self) -> Option<&AuthSlots> {
        self.extensions.get::<AuthSlots>()
    }

    fn set_slots(&mut self, slots: AuthSlots) {
        self.extensions.insert(slots);
    }
}
