use std::sync::Arc;

use context_chain::ContextChain;
use tmpl_core::{Assembly, Request, RequestHandler, Response, Result};
use tracing::{info, instrument};

/// A handler bound to a template: the handler's local context is merged with the processors'
/// output and rendered; a response returned by the handler is passed through as is.
#[derive(Clone)]
pub struct Template {
    name: String,
    handler: Arc<dyn RequestHandler>,
    status: u16,
    content_type: Option<(String, Option<String>)>,
    processors: Option<ContextChain>,
}

impl Template {
    pub fn new(name: impl Into<String>, handler: Arc<dyn RequestHandler>) -> Self {
        Self {
            name: name.into(),
            handler,
            status: 200,
            content_type: None,
            processors: None,
        }
    }

    /// Status of rendered responses (default 200). Pass-through responses keep their own.
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Overrides the engine's configured content type and charset for this template.
    /// `None` drops the charset parameter from the `Content-Type` header.
    pub fn content_type(mut self, content_type: impl Into<String>, charset: Option<&str>) -> Self {
        self.content_type = Some((content_type.into(), charset.map(str::to_string)));
        self
    }

    /// Processors for this template only; replaces the engine's defaults.
    pub fn context_processors(mut self, processors: ContextChain) -> Self {
        self.processors = Some(processors);
        self
    }

    /// Handles `request`: run the handler, assemble the context, render.
    #[instrument(skip(self, engine, request), fields(template = %self.name, path = %request.path))]
    pub async fn respond(&self, engine: &crate::TemplateEngine, request: &Request) -> Result<Response> {
        let output = self.handler.handle(request).await?;
        let processors = self
            .processors
            .as_ref()
            .unwrap_or_else(|| engine.context_processors());

        match processors.assemble(request, output).await? {
            Assembly::ShortCircuit(response) => {
                info!(status = response.status, "step: handler response passed through");
                Ok(response)
            }
            Assembly::Render(input) => {
                let mut response =
                    engine.render_template(&self.name, &input.request, input.context, self.status)?;
                if let Some((content_type, charset)) = &self.content_type {
                    response.content_type = Some(content_type.clone());
                    response.charset = charset.clone();
                }
                info!(status = response.status, "step: template rendered");
                Ok(response)
            }
        }
    }
}
