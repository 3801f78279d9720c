use async_trait::async_trait;
use tmpl_core::{ContextMap, ContextProcessor, Request, Result, REQUEST_KEY};
use tracing::{debug, instrument};

/// Exposes the current request to templates under the `request` key.
pub struct RequestProcessor;

#[async_trait]
impl ContextProcessor for RequestProcessor {
    #[instrument(skip(self, request))]
    async fn process(&self, request: &Request) -> Result<ContextMap> {
        debug!(method = %request.method, path = %request.path, "Exposing request to template");
        let mut context = ContextMap::new();
        context.insert(REQUEST_KEY.to_string(), serde_json::to_value(request)?);
        Ok(context)
    }

    fn name(&self) -> &str {
        "request_processor"
    }
}
