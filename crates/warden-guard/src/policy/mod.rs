//! Declarative access policy.

pub mod metadata;
pub mod resolver;
pub mod types;

pub use metadata::{
    Annotate, FlagKey, MetadataKey, MetadataStore, MetadataValue, RolesKey, Target,
};
pub use resolver::PolicyResolver;
pub use types::{ClassRef, HandlerRef, RoutePolicy};
