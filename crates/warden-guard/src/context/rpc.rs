//! RPC call context.

use super::view::{AuthSlots, RequestView};
use axum::http::HeaderMap;

/// An RPC or other message-based call; the call itself is the request view.
#[derive(Debug)]
pub struct RpcCall {
    /// Called method name.
    pub method: String,
    /// Call metadata, used as identity headers.
    pub metadata: HeaderMap,
    slots: Option<AuthSlots>,
}

impl RpcCall {
    /// Create a call with its metadata.
    pub fn new(method: impl Into<String>, metadata: HeaderMap) -> Self {
        Self {
            method: method.into(),
            metadata,
            slots: None,
        }
    }
}

impl RequestView for RpcCall {
    fn headers(&self) -> &HeaderMap {
        &self.metadata
    }

    fn slots(&self) -> Option<&AuthSlots> {
        self.slots.as_ref()
    }

    fn set_slots(&mut self, slots: AuthSlots) {
        self.slots = Some(slots);
    }
}
