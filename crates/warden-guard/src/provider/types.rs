//! Session and membership records returned by the identity provider.

use crate::roles::RoleValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a successful authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated identity.
    pub user: User,
    /// Session record, including the active organization.
    pub session: SessionRecord,
}

impl Session {
    /// Active organization of this session, if one is selected.
    pub fn active_organization_id(&self) -> Option<&str> {
        self.session.active_organization_id.as_deref()
    }
}

/// Identity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User id.
    pub id: String,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// System-level role(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleValue>,
}

impl User {
    /// Create a user with no role.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            name: None,
            role: None,
        }
    }

    /// Set the system-level role.
    pub fn with_role(mut self, role: impl Into<RoleValue>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Server-side session record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Session id.
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// Organization selected as current context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_organization_id: Option<String>,
    /// Expiry time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response of the active-member-role query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRole {
    /// Role in the active organization.
    pub role: RoleValue,
}

/// Membership of a user in an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Membership id.
    pub id: String,
    /// Member user.
    pub user_id: String,
    /// Organization id.
    pub organization_id: String,
    /// Role in the organization.
    pub role: RoleValue,
}
