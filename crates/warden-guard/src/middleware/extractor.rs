//! Session extractors for handlers behind [`GuardLayer`](super::GuardLayer).

use crate::context::AuthSlots;
use crate::error::{AuthErrorKind, HttpRejection};
use crate::provider::Session;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Extractor for the attached session (required).
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Arc<Session>);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = HttpRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthSlots>()
            .and_then(AuthSlots::session)
            .cloned()
            .map(CurrentSession)
            .ok_or_else(|| HttpRejection::new(AuthErrorKind::Unauthorized, None))
    }
}

/// Extractor for the attached session on optional-auth routes.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Arc<Session>>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(
            parts
                .extensions
                .get::<AuthSlots>()
                .and_then(AuthSlots::session)
                .cloned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestView;
    use crate::provider::{SessionRecord, User};
    use axum::http::{Request, StatusCode};

    fn session() -> Session {
        Session {
            user: User::new("u1"),
            session: SessionRecord {
                id: "s1".into(),
                user_id: "u1".into(),
                active_organization_id: None,
                expires_at: None,
            },
        }
    }

    #[tokio::test]
    async fn test_current_session_success() {
        let (mut parts, _) = Request::new(()).into_parts();
        parts.attach(Some(session()));

        let CurrentSession(extracted) = CurrentSession::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(extracted.user.id, "u1");
    }

    #[tokio::test]
    async fn test_current_session_missing() {
        let (mut parts, _) = Request::new(()).into_parts();
        parts.attach(None);

        let rejection = CurrentSession::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(rejection.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_maybe_session_some() {
        let (mut parts, _) = Request::new(()).into_parts();
        parts.attach(Some(session()));

        let MaybeSession(extracted) = MaybeSession::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(extracted.is_some());
    }

    #[tokio::test]
    async fn test_maybe_session_without_guard() {
        let (mut parts, _) = Request::new(()).into_parts();

        let MaybeSession(extracted) = MaybeSession::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(extracted.is_none());
    }
}
