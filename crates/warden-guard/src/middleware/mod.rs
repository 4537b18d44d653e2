//! HTTP integration: guard layer and session extractors.

pub mod extractor;
pub mod layer;

pub use extractor::{CurrentSession, MaybeSession};
pub use layer::{GuardLayer, GuardMiddleware};
