//! Adapters that turn async closures into [`ContextProcessor`]s and [`RequestHandler`]s.
//!
//! Closures receive an owned clone of the request so the returned future can be `'static`.

use std::future::Future;

use async_trait::async_trait;
use tmpl_core::{ContextMap, ContextProcessor, HandlerOutput, Request, RequestHandler, Result};
use tracing::instrument;

/// Context processor backed by an async closure.
pub struct FnProcessor<F> {
    name: String,
    f: F,
}

/// Wraps `f` as a context processor.
pub fn processor_fn<F, Fut>(f: F) -> FnProcessor<F>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ContextMap>> + Send + 'static,
{
    FnProcessor {
        name: "fn_processor".to_string(),
        f,
    }
}

impl<F> FnProcessor<F> {
    /// Sets the name reported in logs and errors.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[async_trait]
impl<F, Fut> ContextProcessor for FnProcessor<F>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ContextMap>> + Send + 'static,
{
    #[instrument(skip(self, request), fields(processor = %self.name))]
    async fn process(&self, request: &Request) -> Result<ContextMap> {
        (self.f)(request.clone()).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Request handler backed by an async closure.
pub struct FnHandler<F> {
    f: F,
}

/// Wraps `f` as a request handler.
pub fn handler_fn<F, Fut>(f: F) -> FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<HandlerOutput>> + Send + 'static,
{
    FnHandler { f }
}

#[async_trait]
impl<F, Fut> RequestHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<HandlerOutput>> + Send + 'static,
{
    async fn handle(&self, request: &Request) -> Result<HandlerOutput> {
        (self.f)(request.clone()).await
    }
}
