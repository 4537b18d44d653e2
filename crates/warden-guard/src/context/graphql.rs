//! GraphQL execution context.

use axum::http::{request::Parts, Request};

/// Resolver execution context wrapping the underlying HTTP request.
#[derive(Debug)]
pub struct GraphqlContext {
    /// The transport request carrying the operation.
    pub req: Parts,
    /// Name of the operation being executed, if provided.
    pub operation_name: Option<String>,
}

impl GraphqlContext {
    /// Wrap an HTTP request, discarding its body.
    pub fn from_request<B>(req: Request<B>) -> Self {
        let (parts, _) = req.into_parts();
        Self {
            req: parts,
            operation_name: None,
        }
    }

    /// Set the operation name.
    pub fn with_operation(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}

impl From<Parts> for GraphqlContext {
    fn from(req: Parts) -> Self {
        Self {
            req,
            operation_name: None,
        }
    }
}
