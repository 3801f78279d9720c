use async_trait::async_trait;
use tmpl_core::{ContextMap, ContextProcessor, Request, Result};

/// Contributes the same variables to every request (site name, version, ...).
///
/// Each call hands out a fresh copy, so callers may mutate what they receive.
#[derive(Debug, Clone)]
pub struct StaticProcessor {
    name: String,
    context: ContextMap,
}

impl StaticProcessor {
    pub fn new(context: ContextMap) -> Self {
        Self {
            name: "static_processor".to_string(),
            context,
        }
    }

    /// Sets the name reported in logs and errors.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[async_trait]
impl ContextProcessor for StaticProcessor {
    async fn process(&self, _request: &Request) -> Result<ContextMap> {
        Ok(self.context.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
