//! WebSocket exception events.

use super::types::{AuthErrorKind, ErrorDetail};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio_tungstenite::tungstenite::Message;
use uuid::Uuid;

/// Message type of exception events.
pub const EVENT_EXCEPTION: &str = "exception";

/// Exception raised on a socket connection.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{payload}")]
pub struct WsException {
    payload: serde_json::Value,
}

impl WsException {
    /// Build the exception for `kind`, carrying `detail` or the bare code.
    pub fn new(kind: AuthErrorKind, detail: Option<ErrorDetail>) -> Self {
        let payload = match detail {
            Some(ErrorDetail::Body(body)) => body,
            Some(ErrorDetail::Message(message)) => serde_json::Value::String(message),
            None => serde_json::Value::String(kind.code().to_string()),
        };
        Self { payload }
    }

    /// Exception payload.
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    /// Wrap into the outgoing message envelope.
    pub fn to_envelope(&self) -> ExceptionEnvelope {
        ExceptionEnvelope {
            id: Uuid::new_v4(),
            msg_type: EVENT_EXCEPTION,
            timestamp: Utc::now(),
            payload: self.payload.clone(),
        }
    }

    /// Text frame to send on the connection.
    pub fn into_frame(self) -> Message {
        Message::Text(self.to_envelope().to_json())
    }
}

/// Outgoing exception event.
#[derive(Debug, Clone, Serialize)]
pub struct ExceptionEnvelope {
    /// Event id.
    pub id: Uuid,
    /// Always [`EVENT_EXCEPTION`].
    #[serde(rename = "type")]
    pub msg_type: &'static str,
    /// Emission time.
    pub timestamp: DateTime<Utc>,
    /// Exception payload.
    pub payload: serde_json::Value,
}

impl ExceptionEnvelope {
    /// Serialize for sending.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
