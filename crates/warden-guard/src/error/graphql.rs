//! GraphQL rejections.

use super::types::{AuthErrorKind, ErrorDetail};
use async_graphql::ErrorExtensions;

/// Build the GraphQL error for `kind`.
///
/// A message detail becomes the error message; a body detail contributes
/// its `message` field. Either way the error carries `extensions.code`.
pub fn graphql_error(kind: AuthErrorKind, detail: Option<ErrorDetail>) -> async_graphql::Error {
    let default_message = match kind {
        AuthErrorKind::Unauthorized => "Unauthorized",
        AuthErrorKind::Forbidden => "Forbidden",
    };

    let message = match detail {
        Some(ErrorDetail::Message(message)) => message,
        Some(ErrorDetail::Body(body)) => body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or(default_message)
            .to_string(),
        None => default_message.to_string(),
    };

    async_graphql::Error::new(message).extend_with(|_, ext| ext.set("code", kind.code()))
}
