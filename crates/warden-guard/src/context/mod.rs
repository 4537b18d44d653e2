//! Invocation contexts and their normalization into one request view.

#[cfg(feature = "graphql")]
pub mod graphql;
pub mod rpc;
pub mod transport;
pub mod view;
#[cfg(feature = "websocket")]
pub mod ws;

#[cfg(feature = "graphql")]
pub use graphql::GraphqlContext;
pub use rpc::RpcCall;
pub use transport::TransportKind;
pub use view::{AuthSlots, RequestView};
#[cfg(feature = "websocket")]
pub use ws::{Handshake, WsClient};

use axum::http::request::Parts;

/// An invocation context tagged with its transport.
#[derive(Debug)]
pub enum ExecutionContext<'a> {
    /// HTTP request head.
    Http(&'a mut Parts),
    /// GraphQL resolver context.
    #[cfg(feature = "graphql")]
    Graphql(&'a mut GraphqlContext),
    /// Connected WebSocket client.
    #[cfg(feature = "websocket")]
    Ws(&'a mut WsClient),
    /// RPC or other message-based call.
    Rpc(&'a mut RpcCall),
}

impl<'a> ExecutionContext<'a> {
    /// Transport of this invocation.
    pub fn transport(&self) -> TransportKind {
        match self {
            Self::Http(_) => TransportKind::Http,
            #[cfg(feature = "graphql")]
            Self::Graphql(_) => TransportKind::Graphql,
            #[cfg(feature = "websocket")]
            Self::Ws(_) => TransportKind::Ws,
            Self::Rpc(_) => TransportKind::Rpc,
        }
    }

    /// Normalize into the canonical request view.
    ///
    /// GraphQL contexts unwrap to their transport request; sockets and RPC
    /// calls are their own view.
    pub fn into_view(self) -> &'a mut dyn RequestView {
        match self {
            Self::Http(parts) => parts,
            #[cfg(feature = "graphql")]
            Self::Graphql(ctx) => &mut ctx.req,
            #[cfg(feature = "websocket")]
            Self::Ws(client) => client,
            Self::Rpc(call) => call,
        }
    }
}

impl<'a> From<&'a mut Parts> for ExecutionContext<'a> {
    fn from(parts: &'a mut Parts) -> Self {
        Self::Http(parts)
    }
}

#[cfg(feature = "graphql")]
impl<'a> From<&'a mut GraphqlContext> for ExecutionContext<'a> {
    fn from(ctx: &'a mut GraphqlContext) -> Self {
        Self::Graphql(ctx)
    }
}

#[cfg(feature = "websocket")]
impl<'a> From<&'a mut WsClient> for ExecutionContext<'a> {
    fn from(client: &'a mut WsClient) -> Self {
        Self::Ws(client)
    }
}

impl<'a> From<&'a mut RpcCall> for ExecutionContext<'a> {
    fn from(call: &'a mut RpcCall) -> Self {
        Self::Rpc(call)
    }
}
