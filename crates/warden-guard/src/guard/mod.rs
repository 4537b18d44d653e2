//! Authorization engine.

pub mod audit;
pub mod builder;
pub mod engine;

pub use audit::{DecisionAuditEvent, DecisionReason};
pub use builder::GuardBuilder;
pub use engine::{AuthGuard, Decision};
