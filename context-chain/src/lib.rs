//! # Context chain
//!
//! Ordered context processors and the assembly step that turns a handler's output into the
//! variables handed to the renderer. Processors run one after another; a later processor overwrites
//! an earlier one's keys, and the handler's local context overwrites them all.

use std::sync::Arc;

use tmpl_core::{Assembly, ContextMap, ContextProcessor, HandlerOutput, RenderInput, Request, Result};
use tracing::{debug, info, instrument};

/// Ordered list of context processors. Cheap to clone; processors are shared.
#[derive(Clone, Default)]
pub struct ContextChain {
    processors: Vec<Arc<dyn ContextProcessor>>,
}

impl ContextChain {
    /// Creates an empty chain (assembly then yields the local context alone).
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Appends a processor; it runs after (and wins over) every processor added before it.
    pub fn add_processor(mut self, processor: Arc<dyn ContextProcessor>) -> Self {
        self.processors.push(processor);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Names of the configured processors, in run order.
    pub fn names(&self) -> Vec<&str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    /// Runs every processor in order against `request` and merges their outputs into a fresh map.
    ///
    /// Each processor is awaited before the next starts. The first error aborts and is returned as is.
    #[instrument(skip(self, request), fields(path = %request.path))]
    pub async fn collect(&self, request: &Request) -> Result<ContextMap> {
        let mut merged = ContextMap::new();

        for processor in &self.processors {
            let name = processor.name();
            info!(processor = %name, "step: context processor");
            let extra = processor.process(request).await?;
            debug!(
                processor = %name,
                keys = ?extra.keys().collect::<Vec<_>>(),
                "Context processor produced"
            );
            merged.extend(extra);
        }

        Ok(merged)
    }

    /// Builds the render input for a handler's output.
    ///
    /// A [`HandlerOutput::Response`] is passed through untouched without running any processor.
    /// Otherwise the processors' merged output is overlaid with the local context.
    #[instrument(skip(self, request, output), fields(path = %request.path))]
    pub async fn assemble(&self, request: &Request, output: HandlerOutput) -> Result<Assembly> {
        let local = match output {
            HandlerOutput::Response(response) => {
                info!(
                    status = response.status,
                    "step: handler returned a response, assembly skipped"
                );
                return Ok(Assembly::ShortCircuit(response));
            }
            HandlerOutput::Context(local) => local,
        };

        info!(
            processors = self.processors.len(),
            local_keys = local.len(),
            "step: context assembly started"
        );

        let mut context = self.collect(request).await?;
        context.extend(local);

        info!(keys = context.len(), "step: context assembly finished");

        Ok(Assembly::Render(RenderInput {
            request: request.clone(),
            context,
        }))
    }
}

impl std::fmt::Debug for ContextChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextChain")
            .field("processors", &self.names())
            .finish()
    }
}

impl FromIterator<Arc<dyn ContextProcessor>> for ContextChain {
    fn from_iter<I: IntoIterator<Item = Arc<dyn ContextProcessor>>>(iter: I) -> Self {
        Self {
            processors: iter.into_iter().collect(),
        }
    }
}

// Integration tests live in tests/context_chain_test.rs
