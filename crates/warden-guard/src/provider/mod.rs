//! Identity provider seam.
//!
//! The provider is an external authentication service. Only session lookup
//! is mandatory; the organization member queries are optional capabilities
//! probed at call time.

pub mod org;
pub mod types;

pub use org::active_org_role;
pub use types::{Member, MemberRole, Session, SessionRecord, User};

use async_trait::async_trait;
use axum::http::HeaderMap;
use thiserror::Error;

/// Errors raised by an identity provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider call failed.
    #[error("identity provider request failed: {0}")]
    Request(String),

    /// The provider answered with unexpected data.
    #[error("identity provider returned malformed data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Any other provider failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// External authentication service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the caller's session from request headers.
    async fn get_session(&self, headers: &HeaderMap) -> Result<Option<Session>, ProviderError>;

    /// Direct active-member-role query, if supported.
    fn active_member_role(&self) -> Option<&dyn ActiveMemberRoleApi> {
        None
    }

    /// Active-member query, if supported.
    fn active_member(&self) -> Option<&dyn ActiveMemberApi> {
        None
    }
}

/// Role of the caller within the active organization.
#[async_trait]
pub trait ActiveMemberRoleApi: Send + Sync {
    /// Role of the caller in their active organization.
    async fn get_active_member_role(
        &self,
        headers: &HeaderMap,
    ) -> Result<Option<MemberRole>, ProviderError>;
}

/// Membership record of the caller within the active organization.
#[async_trait]
pub trait ActiveMemberApi: Send + Sync {
    /// Caller's membership in their active organization.
    async fn get_active_member(&self, headers: &HeaderMap) -> Result<Option<Member>, ProviderError>;
}
