//! Shared guard test infrastructure.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderValue};

use warden_guard::provider::{
    ActiveMemberApi, ActiveMemberRoleApi, Member, MemberRole, SessionRecord,
};
use warden_guard::{
    AuthGuard, IdentityProvider, MetadataStore, ProviderError, RoleValue, Session, User,
};

/// Header carrying the fake session token.
pub const TOKEN_HEADER: &str = "x-session-token";

/// How the fake provider answers organization queries.
#[derive(Clone)]
pub enum OrgMode {
    /// Neither member query is exposed.
    Unsupported,
    /// Direct role query answers with this role.
    RoleQuery(Option<RoleValue>),
    /// Only the member query exists, answering with this role.
    MemberQuery(Option<RoleValue>),
    /// The role query raises.
    Failing,
}

/// Fake identity provider keyed by session token.
pub struct FakeProvider {
    sessions: HashMap<String, Session>,
    org_mode: OrgMode,
    session_failure: bool,
    session_calls: AtomicUsize,
    org_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
            org_mode: OrgMode::Unsupported,
            session_failure: false,
            session_calls: AtomicUsize::new(0),
            org_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_session(mut self, token: &str, session: Session) -> Self {
        self.sessions.insert(token.to_string(), session);
        self
    }

    pub fn with_org_mode(mut self, mode: OrgMode) -> Self {
        self.org_mode = mode;
        self
    }

    pub fn failing_sessions(mut self) -> Self {
        self.session_failure = true;
        self
    }

    pub fn session_calls(&self) -> usize {
        self.session_calls.load(Ordering::SeqCst)
    }

    pub fn org_calls(&self) -> usize {
        self.org_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn get_session(&self, headers: &HeaderMap) -> Result<Option<Session>, ProviderError> {
        self.session_calls.fetch_add(1, Ordering::SeqCst);
        if self.session_failure {
            return Err(ProviderError::Request("provider unavailable".into()));
        }

        let token = headers.get(TOKEN_HEADER).and_then(|v| v.to_str().ok());
        Ok(token.and_then(|t| self.sessions.get(t)).cloned())
    }

    fn active_member_role(&self) -> Option<&dyn ActiveMemberRoleApi> {
        match self.org_mode {
            OrgMode::RoleQuery(_) | OrgMode::Failing => Some(self),
            _ => None,
        }
    }

    fn active_member(&self) -> Option<&dyn ActiveMemberApi> {
        match self.org_mode {
            OrgMode::MemberQuery(_) => Some(self),
            _ => None,
        }
    }
}

#[async_trait]
impl ActiveMemberRoleApi for FakeProvider {
    async fn get_active_member_role(
        &self,
        _headers: &HeaderMap,
    ) -> Result<Option<MemberRole>, ProviderError> {
        self.org_calls.fetch_add(1, Ordering::SeqCst);
        match &self.org_mode {
            OrgMode::RoleQuery(role) => Ok(role.clone().map(|role| MemberRole { role })),
            _ => Err(ProviderError::Request("member service down".into())),
        }
    }
}

#[async_trait]
impl ActiveMemberApi for FakeProvider {
    async fn get_active_member(&self, _headers: &HeaderMap) -> Result<Option<Member>, ProviderError> {
        self.org_calls.fetch_add(1, Ordering::SeqCst);
        match &self.org_mode {
            OrgMode::MemberQuery(role) => Ok(role.clone().map(|role| Member {
                id: "member-1".into(),
                user_id: "user-1".into(),
                organization_id: "org-1".into(),
                role,
            })),
            _ => Ok(None),
        }
    }
}

/// Session for `user-1` with the given system role and active organization.
pub fn session(role: Option<RoleValue>, active_org: Option<&str>) -> Session {
    Session {
        user: User {
            id: "user-1".into(),
            email: Some("user@example.com".into()),
            name: None,
            role,
        },
        session: SessionRecord {
            id: "session-1".into(),
            user_id: "user-1".into(),
            active_organization_id: active_org.map(String::from),
            expires_at: None,
        },
    }
}

/// Headers carrying `token`.
pub fn headers_with(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TOKEN_HEADER, HeaderValue::from_str(token).unwrap());
    headers
}

/// Every transport compiled into this build.
pub fn enabled_transports() -> Vec<&'static str> {
    let mut transports = vec!["http", "rpc"];
    if cfg!(feature = "graphql") {
        transports.push("graphql");
    }
    if cfg!(feature = "websocket") {
        transports.push("ws");
    }
    transports
}

/// Build a guard over `provider` and `store` serving every enabled transport.
pub fn guard(provider: Arc<FakeProvider>, store: MetadataStore) -> AuthGuard {
    AuthGuard::builder()
        .provider(provider)
        .metadata(store)
        .transports(enabled_transports())
        .build()
        .unwrap()
}
