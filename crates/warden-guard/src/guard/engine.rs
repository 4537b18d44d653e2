//! The authorization decision engine.

use super::audit::{DecisionAuditEvent, DecisionReason};
use super::builder::GuardBuilder;
use crate::config::AuditConfig;
use crate::context::{ExecutionContext, TransportKind};
use crate::error::{AuthErrorKind, ErrorMapper, Rejection};
use crate::policy::{HandlerRef, PolicyResolver, RoutePolicy};
use crate::provider::{active_org_role, IdentityProvider, Session};
use crate::roles::roles_match;
use axum::http::HeaderMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Outcome of a successful decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The handler is public.
    Public,
    /// Optional-auth handler called without a session.
    Anonymous,
    /// Session present and every applicable role check passed.
    Authenticated,
}

/// Guard deciding whether an invocation may proceed.
///
/// Holds no per-request state; one guard is shared by all invocations.
#[derive(Clone)]
pub struct AuthGuard {
    pub(super) provider: Arc<dyn IdentityProvider>,
    pub(super) resolver: PolicyResolver,
    pub(super) errors: ErrorMapper,
    /// Transports served; invocations on any other transport are denied.
    pub(super) transports: Vec<TransportKind>,
    pub(super) audit: AuditConfig,
}

impl AuthGuard {
    /// Start building a guard.
    pub fn builder() -> GuardBuilder {
        GuardBuilder::new()
    }

    /// Transports this guard was configured for.
    pub fn transports(&self) -> &[TransportKind] {
        &self.transports
    }

    /// Policy resolver used for handler lookups.
    pub fn resolver(&self) -> &PolicyResolver {
        &self.resolver
    }

    /// Decide whether `handler` may run for this invocation.
    ///
    /// The session is fetched once and attached to the request view before
    /// any policy is consulted, so it is populated even on public routes.
    /// Denials are returned as the transport-native rejection. Invocations
    /// on a transport the guard was not built for are denied with
    /// `FORBIDDEN` before the provider is contacted.
    pub async fn can_activate(
        &self,
        ctx: ExecutionContext<'_>,
        handler: &HandlerRef,
    ) -> Result<Decision, Rejection> {
        let transport = ctx.transport();
        if !self.transports.contains(&transport) {
            error!(
                handler = %handler,
                transport = %transport,
                "Invocation on a transport this guard was not built for"
            );
            self.record(handler, transport, None, false, DecisionReason::TransportDisabled);
            return Err(self.errors.map(transport, AuthErrorKind::Forbidden, None));
        }

        let view = ctx.into_view();

        let session = self.fetch_session(view.headers()).await;
        view.attach(session);
        let session = view.session().cloned();

        let policy = self.resolver.resolve(handler);
        let user_id = session.as_ref().map(|s| s.user.id.clone());

        match self.evaluate(view.headers(), session.as_deref(), &policy).await {
            Ok((decision, reason)) => {
                self.record(handler, transport, user_id.as_deref(), true, reason);
                Ok(decision)
            }
            Err((kind, reason)) => {
                self.record(handler, transport, user_id.as_deref(), false, reason);
                Err(self.errors.map(transport, kind, None))
            }
        }
    }

    async fn evaluate(
        &self,
        headers: &HeaderMap,
        session: Option<&Session>,
        policy: &RoutePolicy,
    ) -> Result<(Decision, DecisionReason), (AuthErrorKind, DecisionReason)> {
        if policy.is_public {
            return Ok((Decision::Public, DecisionReason::PublicRoute));
        }

        let session = match session {
            Some(session) => session,
            None if policy.is_optional => {
                return Ok((Decision::Anonymous, DecisionReason::OptionalAnonymous))
            }
            None => return Err((AuthErrorKind::Unauthorized, DecisionReason::MissingSession)),
        };

        if !policy.required_roles.is_empty()
            && !roles_match(session.user.role.as_ref(), &policy.required_roles)
        {
            return Err((AuthErrorKind::Forbidden, DecisionReason::MissingRole));
        }

        if !policy.required_org_roles.is_empty() {
            if session.active_organization_id().is_none() {
                return Err((AuthErrorKind::Forbidden, DecisionReason::NoActiveOrganization));
            }

            match active_org_role(self.provider.as_ref(), headers).await {
                Ok(role) if roles_match(role.as_ref(), &policy.required_org_roles) => {}
                Ok(_) => return Err((AuthErrorKind::Forbidden, DecisionReason::MissingOrgRole)),
                Err(error) => {
                    warn!(
                        user_id = %session.user.id,
                        error = %error,
                        "Organization role lookup failed, denying"
                    );
                    return Err((AuthErrorKind::Forbidden, DecisionReason::OrgLookupFailed));
                }
            }
        }

        Ok((Decision::Authenticated, DecisionReason::Authenticated))
    }

    async fn fetch_session(&self, headers: &HeaderMap) -> Option<Session> {
        match self.provider.get_session(headers).await {
            Ok(session) => session,
            Err(error) => {
                warn!(error = %error, "Session lookup failed, treating caller as anonymous");
                None
            }
        }
    }

    fn record(
        &self,
        handler: &HandlerRef,
        transport: TransportKind,
        user_id: Option<&str>,
        granted: bool,
        reason: DecisionReason,
    ) {
        if !self.audit.enabled {
            debug!(handler = %handler, granted, "Authorization decided");
            return;
        }

        DecisionAuditEvent::new(handler, transport, user_id, granted, reason)
            .log(self.audit.log_granted);
    }
}

impl std::fmt::Debug for AuthGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGuard")
            .field("transports", &self.transports)
            .field("audit", &self.audit)
            .finish_non_exhaustive()
    }
}
