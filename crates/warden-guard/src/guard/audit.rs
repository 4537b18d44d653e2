//! Authorization decision audit logging.

use crate::context::TransportKind;
use crate::policy::HandlerRef;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

/// Why a decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// Handler is public.
    PublicRoute,
    /// Optional-auth handler, no session.
    OptionalAnonymous,
    /// Session present and every role check passed.
    Authenticated,
    /// No session on a protected handler.
    MissingSession,
    /// System role check failed.
    MissingRole,
    /// Org roles required but no active organization.
    NoActiveOrganization,
    /// Organization role check failed.
    MissingOrgRole,
    /// Organization role lookup raised.
    OrgLookupFailed,
    /// Invocation arrived on a transport the guard does not serve.
    TransportDisabled,
}

impl DecisionReason {
    /// Log name of the reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublicRoute => "public_route",
            Self::OptionalAnonymous => "optional_anonymous",
            Self::Authenticated => "authenticated",
            Self::MissingSession => "missing_session",
            Self::MissingRole => "missing_role",
            Self::NoActiveOrganization => "no_active_organization",
            Self::MissingOrgRole => "missing_org_role",
            Self::OrgLookupFailed => "org_lookup_failed",
            Self::TransportDisabled => "transport_disabled",
        }
    }
}

/// Authorization audit event.
#[derive(Debug, Serialize)]
pub struct DecisionAuditEvent {
    /// When the decision was made.
    pub timestamp: DateTime<Utc>,
    /// `Class.method` of the guarded handler.
    pub handler: String,
    /// Transport of the invocation.
    pub transport: TransportKind,
    /// Caller, when a session was attached.
    pub user_id: Option<String>,
    /// Whether the invocation may proceed.
    pub granted: bool,
    /// Why.
    pub reason: DecisionReason,
}

impl DecisionAuditEvent {
    /// Capture a decision.
    pub fn new(
        handler: &HandlerRef,
        transport: TransportKind,
        user_id: Option<&str>,
        granted: bool,
        reason: DecisionReason,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            handler: handler.to_string(),
            transport,
            user_id: user_id.map(String::from),
            granted,
            reason,
        }
    }

    /// Emit the event. Granted decisions go to `debug` unless `verbose`.
    pub fn log(&self, verbose: bool) {
        if !self.granted {
            info!(
                event = "authz_denied",
                handler = %self.handler,
                transport = %self.transport,
                user_id = ?self.user_id,
                reason = self.reason.as_str(),
                "Authorization denied"
            );
        } else if verbose {
            info!(
                event = "authz_granted",
                handler = %self.handler,
                transport = %self.transport,
                user_id = ?self.user_id,
                reason = self.reason.as_str(),
                "Authorization granted"
            );
        } else {
            debug!(
                event = "authz_granted",
                handler = %self.handler,
                transport = %self.transport,
                user_id = ?self.user_id,
                reason = self.reason.as_str(),
                "Authorization granted"
            );
        }
    }
}
