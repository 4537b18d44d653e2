//! HTTP rejection responses.

use super::types::{AuthErrorKind, ErrorDetail, Rejection, TransportError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Default error body.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
}

/// HTTP 401/403 rejection.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{status}: {body}")]
pub struct HttpRejection {
    status: StatusCode,
    body: serde_json::Value,
}

impl HttpRejection {
    /// Build the rejection for `kind`, using `detail` as the body when given.
    pub fn new(kind: AuthErrorKind, detail: Option<ErrorDetail>) -> Self {
        let (status, default_message) = match kind {
            AuthErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AuthErrorKind::Forbidden => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        let body = match detail {
            Some(ErrorDetail::Body(body)) => body,
            Some(ErrorDetail::Message(message)) => body_value(kind, &message),
            None => body_value(kind, default_message),
        };

        Self { status, body }
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response body.
    pub fn body(&self) -> &serde_json::Value {
        &self.body
    }
}

fn body_value(kind: AuthErrorKind, message: &str) -> serde_json::Value {
    serde_json::to_value(ErrorBody {
        code: kind.code(),
        message,
    })
    .unwrap_or(serde_json::Value::Null)
}

impl IntoResponse for HttpRejection {
    fn into_response(self) -> Response {
        warn!(
            status = %self.status,
            body = %self.body,
            "Auth error occurred"
        );

        (self.status, Json(self.body)).into_response()
    }
}

/// Non-HTTP rejections surfacing on an HTTP route fall back to the default
/// body for their kind.
impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let kind = self.kind();
        match self.into_error() {
            TransportError::Http(rejection) => rejection.into_response(),
            _ => HttpRejection::new(kind, None).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unauthorized_default_body() {
        let rejection = HttpRejection::new(AuthErrorKind::Unauthorized, None);
        assert_eq!(rejection.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            rejection.body(),
            &json!({ "code": "UNAUTHORIZED", "message": "Unauthorized" })
        );
    }

    #[test]
    fn test_forbidden_default_body() {
        let rejection = HttpRejection::new(AuthErrorKind::Forbidden, None);
        assert_eq!(rejection.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            rejection.body(),
            &json!({ "code": "FORBIDDEN", "message": "Insufficient permissions" })
        );
    }

    #[test]
    fn test_message_detail_keeps_code() {
        let rejection = HttpRejection::new(AuthErrorKind::Forbidden, Some("Owners only".into()));
        assert_eq!(
            rejection.body(),
            &json!({ "code": "FORBIDDEN", "message": "Owners only" })
        );
    }

    #[test]
    fn test_body_detail_replaces_body() {
        let detail = json!({ "code": "ORG_REQUIRED", "message": "Select an organization" });
        let rejection = HttpRejection::new(AuthErrorKind::Forbidden, Some(detail.clone().into()));
        assert_eq!(rejection.body(), &detail);
    }

    #[tokio::test]
    async fn test_into_response_status_and_body() {
        let response = HttpRejection::new(AuthErrorKind::Unauthorized, None).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "UNAUTHORIZED");
    }
}
