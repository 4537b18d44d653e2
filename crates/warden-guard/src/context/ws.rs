//! WebSocket client context.

use super::view::{AuthSlots, RequestView};
use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use uuid::Uuid;

/// Handshake data captured when the socket was upgraded.
#[derive(Debug, Clone)]
pub struct Handshake {
    /// Upgrade request headers.
    pub headers: HeaderMap,
    /// Peer address, when known.
    pub address: Option<SocketAddr>,
    /// Handshake time.
    pub issued_at: DateTime<Utc>,
}

impl Handshake {
    /// Capture handshake headers.
    pub fn new(headers: HeaderMap) -> Self {
        Self {
            headers,
            address: None,
            issued_at: Utc::now(),
        }
    }
}

/// Connected socket; the socket itself is the request view.
#[derive(Debug)]
pub struct WsClient {
    /// Connection id.
    pub id: Uuid,
    /// Handshake the connection was opened with.
    pub handshake: Handshake,
    slots: Option<AuthSlots>,
}

impl WsClient {
    /// Create a client from its handshake.
    pub fn new(handshake: Handshake) -> Self {
        Self {
            id: Uuid::new_v4(),
            handshake,
            slots: None,
        }
    }
}

/// Identity headers come from the handshake, not from individual messages.
impl RequestView for WsClient {
    fn headers(&self) -> &HeaderMap {
        &self.handshake.headers
    }

    fn slots(&self) -> Option<&AuthSlots> {
        self.slots.as_ref()
    }

    fn set_slots(&mut self, slots: AuthSlots) {
        self.slots = Some(slots);
    }
}
