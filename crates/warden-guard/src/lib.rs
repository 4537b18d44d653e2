//! Warden authorization guard
//!
//! This crate decides, per handler invocation, whether a caller may proceed.
//! The same decision engine serves HTTP, GraphQL, WebSocket and RPC handlers.
//!
//! # Architecture
//!
//! - **Context**: normalizes transport contexts into one request view
//! - **Policy**: declarative per-handler annotations with handler-over-class precedence
//! - **Provider**: the external identity provider seam (sessions, organization roles)
//! - **Guard**: the decision engine
//! - **Error**: maps `UNAUTHORIZED` / `FORBIDDEN` to transport-native errors
//! - **Middleware**: tower layer and axum extractors for HTTP routes
//!
//! # Features
//!
//! - `graphql` - GraphQL contexts and `async_graphql::Error` rejections
//! - `websocket` - WebSocket contexts and exception frames

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod error;
pub mod guard;
pub mod middleware;
pub mod policy;
pub mod provider;
pub mod roles;

pub use config::GuardConfig;
pub use context::{AuthSlots, ExecutionContext, RequestView, TransportKind};
pub use error::{AuthErrorKind, ErrorDetail, GuardError, Rejection};
pub use guard::{AuthGuard, Decision, GuardBuilder};
pub use middleware::{CurrentSession, GuardLayer, MaybeSession};
pub use policy::{ClassRef, HandlerRef, MetadataStore, PolicyResolver, RoutePolicy};
pub use provider::{IdentityProvider, ProviderError, Session, User};
pub use roles::RoleValue;

/// Initialize process-wide logging from the guard configuration.
pub fn init_logging(config: &GuardConfig) -> Result<(), warden_common_log::LogError> {
    warden_common_log::init(config.logging.to_log_config())
}
