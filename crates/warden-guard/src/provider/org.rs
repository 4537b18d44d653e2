//! Organization role lookup.

use super::{IdentityProvider, ProviderError};
use crate::roles::RoleValue;
use axum::http::HeaderMap;
use tracing::debug;

/// Look up the caller's role in their active organization.
///
/// Prefers the direct role query and falls back to the member query. A
/// provider exposing neither yields `Ok(None)`.
pub async fn active_org_role(
    provider: &dyn IdentityProvider,
    headers: &HeaderMap,
) -> Result<Option<RoleValue>, ProviderError> {
    if let Some(api) = provider.active_member_role() {
        let role = api.get_active_member_role(headers).await?;
        return Ok(role.map(|r| r.role));
    }

    if let Some(api) = provider.active_member() {
        let member = api.get_active_member(headers).await?;
        return Ok(member.map(|m| m.role));
    }

    debug!("Identity provider exposes no organization member API");
    Ok(None)
}
