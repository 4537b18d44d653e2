//! Guard error types.

use super::response::HttpRejection;
#[cfg(feature = "websocket")]
use super::ws::WsException;
use serde::Serialize;
use thiserror::Error;

/// Abstract authorization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthErrorKind {
    /// No session and the route requires one.
    Unauthorized,
    /// Session present but a role or organization-role check failed.
    Forbidden,
}

impl AuthErrorKind {
    /// Wire code, `UNAUTHORIZED` or `FORBIDDEN`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
        }
    }
}

/// Optional payload overriding a rejection's default body or message.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    /// Plain message.
    Message(String),
    /// Structured body.
    Body(serde_json::Value),
}

impl From<&str> for ErrorDetail {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for ErrorDetail {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<serde_json::Value> for ErrorDetail {
    fn from(body: serde_json::Value) -> Self {
        Self::Body(body)
    }
}

/// Error raised to RPC and other message-based callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct RpcError(pub String);

/// Transport-native error produced by the error mapper.
#[derive(Debug, Error)]
pub enum TransportError {
    /// 401/403 response.
    #[error(transparent)]
    Http(#[from] HttpRejection),

    /// GraphQL error entry.
    #[cfg(feature = "graphql")]
    #[error("{}", .0.message)]
    Graphql(async_graphql::Error),

    /// Socket exception event.
    #[cfg(feature = "websocket")]
    #[error(transparent)]
    Ws(#[from] WsException),

    /// Literal error code.
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

/// A denied invocation: the abstract kind plus the transport-native error.
#[derive(Debug, Error)]
#[error("{kind:?}: {error}")]
pub struct Rejection {
    kind: AuthErrorKind,
    #[source]
    error: TransportError,
}

impl Rejection {
    pub(crate) fn new(kind: AuthErrorKind, error: TransportError) -> Self {
        Self { kind, error }
    }

    /// Abstract failure kind.
    pub fn kind(&self) -> AuthErrorKind {
        self.kind
    }

    /// Borrow the transport-native error.
    pub fn error(&self) -> &TransportError {
        &self.error
    }

    /// Take the transport-native error.
    pub fn into_error(self) -> TransportError {
        self.error
    }
}

/// Construction-time failures. These halt setup; they are never a
/// per-request decision.
#[derive(Debug, Error)]
pub enum GuardError {
    /// Transport name not recognized.
    #[error("unknown transport kind: {0}")]
    UnknownTransport(String),

    /// Transport enabled without its cargo feature.
    #[error("transport `{transport}` requires the `{feature}` feature")]
    MissingPeer {
        transport: &'static str,
        feature: &'static str,
    },

    /// No identity provider supplied.
    #[error("no identity provider configured")]
    MissingProvider,

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}
