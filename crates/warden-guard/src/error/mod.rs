//! Error handling for the authorization guard.

#[cfg(feature = "graphql")]
pub mod graphql;
pub mod mapper;
pub mod response;
pub mod types;
#[cfg(feature = "websocket")]
pub mod ws;

pub use mapper::ErrorMapper;
pub use response::HttpRejection;
pub use types::{AuthErrorKind, ErrorDetail, GuardError, Rejection, RpcError, TransportError};
#[cfg(feature = "websocket")]
pub use ws::WsException;
