//! Transport-aware error mapping.

use super::response::HttpRejection;
use super::types::{AuthErrorKind, ErrorDetail, Rejection, RpcError, TransportError};
#[cfg(feature = "websocket")]
use super::ws::WsException;
use crate::context::TransportKind;

/// Maps an abstract failure to the transport's native error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorMapper;

impl ErrorMapper {
    /// Produce the rejection for `transport`.
    pub fn map(
        &self,
        transport: TransportKind,
        kind: AuthErrorKind,
        detail: Option<ErrorDetail>,
    ) -> Rejection {
        let error = match transport {
            TransportKind::Http => TransportError::Http(HttpRejection::new(kind, detail)),
            #[cfg(feature = "graphql")]
            TransportKind::Graphql => {
                TransportError::Graphql(super::graphql::graphql_error(kind, detail))
            }
            #[cfg(feature = "websocket")]
            TransportKind::Ws => TransportError::Ws(WsException::new(kind, detail)),
            TransportKind::Rpc => TransportError::Rpc(RpcError(kind.code().to_string())),
        };

        Rejection::new(kind, error)
    }

    /// Shorthand for an `UNAUTHORIZED` rejection.
    pub fn unauthorized(&self, transport: TransportKind, detail: Option<ErrorDetail>) -> Rejection {
        self.map(transport, AuthErrorKind::Unauthorized, detail)
    }

    /// Shorthand for a `FORBIDDEN` rejection.
    pub fn forbidden(&self, transport: TransportKind, detail: Option<ErrorDetail>) -> Rejection {
        self.map(transport, AuthErrorKind::Forbidden, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_http_row() {
        let rejection = ErrorMapper.unauthorized(TransportKind::Http, None);
        assert_eq!(rejection.kind(), AuthErrorKind::Unauthorized);
        match rejection.error() {
            TransportError::Http(http) => assert_eq!(http.status(), StatusCode::UNAUTHORIZED),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_rpc_row_carries_literal_and_ignores_detail() {
        let rejection = ErrorMapper.forbidden(TransportKind::Rpc, Some("ignored".into()));
        match rejection.into_error() {
            TransportError::Rpc(err) => assert_eq!(err, RpcError("FORBIDDEN".into())),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[cfg(feature = "graphql")]
    #[test]
    fn test_graphql_row() {
        let rejection = ErrorMapper.forbidden(TransportKind::Graphql, None);
        match rejection.into_error() {
            TransportError::Graphql(err) => assert_eq!(err.message, "Forbidden"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[cfg(feature = "websocket")]
    #[test]
    fn test_ws_row() {
        let rejection = ErrorMapper.unauthorized(TransportKind::Ws, None);
        match rejection.into_error() {
            TransportError::Ws(err) => assert_eq!(err.payload(), "UNAUTHORIZED"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
