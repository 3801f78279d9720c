//! Template environment: tera templates plus the application-level context processors.

use context_chain::ContextChain;
use serde_json::Value;
use tera::Tera;
use tmpl_core::{ContextMap, Request, Response, Result, TmplError, REQUEST_KEY};
use tracing::{debug, error, info, instrument};

use crate::config::TemplatingConfig;

/// Loaded templates and the processors every [`crate::Template`] uses unless it brings its own.
pub struct TemplateEngine {
    tera: Tera,
    processors: ContextChain,
    config: TemplatingConfig,
}

/// Builder for [`TemplateEngine`]. Templates come from a directory glob, from memory, or both.
#[derive(Default)]
pub struct TemplateEngineBuilder {
    template_dir: Option<String>,
    templates: Vec<(String, String)>,
    processors: ContextChain,
    config: TemplatingConfig,
}

impl TemplateEngineBuilder {
    /// Loads every file matching `glob` (e.g. `templates/**/*`); names are relative to the glob base.
    pub fn template_dir(mut self, glob: impl Into<String>) -> Self {
        self.template_dir = Some(glob.into());
        self
    }

    /// Adds in-memory templates as `(name, source)` pairs. Overrides same-named files.
    pub fn templates<I, N, S>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        self.templates
            .extend(templates.into_iter().map(|(n, s)| (n.into(), s.into())));
        self
    }

    /// Application-level default processors, run for every template without its own chain.
    pub fn context_processors(mut self, processors: ContextChain) -> Self {
        self.processors = processors;
        self
    }

    pub fn config(mut self, config: TemplatingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<TemplateEngine> {
        let mut tera = match &self.template_dir {
            Some(glob) => Tera::new(glob).map_err(|e| {
                error!(glob = %glob, error = %describe(&e), "Failed to load templates");
                TmplError::Config(describe(&e))
            })?,
            None => Tera::default(),
        };
        if !self.config.autoescape {
            tera.autoescape_on(Vec::new());
        }
        tera.add_raw_templates(self.templates)
            .map_err(|e| TmplError::Config(describe(&e)))?;

        info!(
            templates = tera.get_template_names().count(),
            processors = ?self.processors.names(),
            "Template engine ready"
        );

        Ok(TemplateEngine {
            tera,
            processors: self.processors,
            config: self.config,
        })
    }
}

impl TemplateEngine {
    pub fn builder() -> TemplateEngineBuilder {
        TemplateEngineBuilder::default()
    }

    /// The application-level default processors.
    pub fn context_processors(&self) -> &ContextChain {
        &self.processors
    }

    /// Replaces the application-level default processors after setup.
    pub fn set_context_processors(&mut self, processors: ContextChain) {
        info!(processors = ?processors.names(), "Context processors replaced");
        self.processors = processors;
    }

    pub fn config(&self) -> &TemplatingConfig {
        &self.config
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Loaded template names, sorted.
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tera.get_template_names().map(str::to_string).collect();
        names.sort();
        names
    }

    /// Renders `name` with `context`. The request is exposed as `request` unless the context already
    /// has that key.
    #[instrument(skip(self, request, context), fields(path = %request.path))]
    pub fn render_string(&self, name: &str, request: &Request, mut context: ContextMap) -> Result<String> {
        if !self.has_template(name) {
            error!(template = %name, "Template not found");
            return Err(TmplError::TemplateNotFound(name.to_string()));
        }
        if !context.contains_key(REQUEST_KEY) {
            context.insert(REQUEST_KEY.to_string(), serde_json::to_value(request)?);
        }

        let tera_context = tera::Context::from_value(Value::Object(context))
            .map_err(|e| TmplError::Render(describe(&e)))?;
        let text = self.tera.render(name, &tera_context).map_err(|e| {
            let message = describe(&e);
            error!(template = %name, error = %message, "Template rendering failed");
            TmplError::Render(message)
        })?;

        debug!(template = %name, len = text.len(), "Template rendered");
        Ok(text)
    }

    /// Renders `name` into a response carrying the configured content type and charset.
    pub fn render_template(
        &self,
        name: &str,
        request: &Request,
        context: ContextMap,
        status: u16,
    ) -> Result<Response> {
        let body = self.render_string(name, request, context)?;
        Ok(Response::new(status)
            .with_body(body)
            .with_content_type(self.config.content_type.as_str(), Some(self.config.charset.as_str())))
    }
}

/// Tera reports the useful part of an error in its source chain.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}
