//! Guard middleware layer.

use crate::context::ExecutionContext;
use crate::guard::AuthGuard;
use crate::policy::HandlerRef;
use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use futures::future::BoxFuture;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Layer guarding one route handler.
#[derive(Clone)]
pub struct GuardLayer {
    guard: Arc<AuthGuard>,
    handler: HandlerRef,
}

impl GuardLayer {
    /// Guard the route served by `handler`.
    pub fn new(guard: Arc<AuthGuard>, handler: HandlerRef) -> Self {
        Self { guard, handler }
    }
}

impl<S> Layer<S> for GuardLayer {
    type Service = GuardMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GuardMiddleware {
            inner,
            guard: self.guard.clone(),
            handler: self.handler.clone(),
        }
    }
}

/// Guard middleware service.
#[derive(Clone)]
pub struct GuardMiddleware<S> {
    inner: S,
    guard: Arc<AuthGuard>,
    handler: HandlerRef,
}

impl<S> Service<Request<Body>> for GuardMiddleware<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let guard = self.guard.clone();
        let handler = self.handler.clone();
        // Take the service that was driven to readiness.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let (mut parts, body) = req.into_parts();

            if let Err(rejection) = guard
                .can_activate(ExecutionContext::Http(&mut parts), &handler)
                .await
            {
                return Ok(rejection.into_response());
            }

            inner.call(Request::from_parts(parts, body)).await
        })
    }
}
