//! CLI parser, config loading and command implementations.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use context_chain::ContextChain;
use processors::{handler_fn, RequestProcessor};
use templating::{Template, TemplateEngine, TemplatingConfig};
use tmpl_core::{ContextMap, HandlerOutput, Request, Response, TmplError};
use tracing::info;

#[derive(Parser)]
#[command(name = "tmpl")]
#[command(about = "Render templates with request context processors", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Template glob; overrides TEMPLATE_DIR.
    #[arg(short = 'd', long, global = true)]
    pub template_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template as if it were requested at PATH; prints the body.
    Render {
        name: String,
        #[arg(short, long, default_value = "/")]
        path: String,
        /// Local context as a JSON object; wins over processor output.
        #[arg(short, long)]
        context: Option<String>,
        #[arg(short, long, default_value = "200")]
        status: u16,
    },
    /// List loaded template names.
    List,
}

/// Load TemplatingConfig from environment. `template_dir` overrides TEMPLATE_DIR.
pub fn load_config(template_dir: Option<String>) -> Result<TemplatingConfig> {
    let mut config = TemplatingConfig::load()?;
    if let Some(dir) = template_dir {
        config.template_dir = dir;
    }
    config.validate()?;
    Ok(config)
}

/// Engine over the configured directory, with the request exposed by default.
pub fn build_engine(config: TemplatingConfig) -> Result<TemplateEngine> {
    let glob = config.template_dir.clone();
    TemplateEngine::builder()
        .template_dir(glob.as_str())
        .config(config)
        .context_processors(ContextChain::new().add_processor(Arc::new(RequestProcessor)))
        .build()
        .with_context(|| format!("Load templates from {}", glob))
}

/// Parses `--context`; must be a JSON object.
pub fn parse_context(raw: Option<&str>) -> Result<ContextMap> {
    let Some(raw) = raw else {
        return Ok(ContextMap::new());
    };
    match serde_json::from_str::<serde_json::Value>(raw).context("--context is not valid JSON")? {
        serde_json::Value::Object(map) => Ok(map),
        other => anyhow::bail!("--context must be a JSON object, got: {}", other),
    }
}

/// Renders `name` for a GET of `path` through the full handler → processors → template flow.
pub async fn render(
    engine: &TemplateEngine,
    name: &str,
    path: &str,
    context: ContextMap,
    status: u16,
) -> Result<Response> {
    let handler = handler_fn(move |_request: Request| {
        let local = context.clone();
        async move { Ok::<_, TmplError>(HandlerOutput::Context(local)) }
    });
    let template = Template::new(name, Arc::new(handler)).status(status);

    let request = Request::get(path);
    info!(template = %name, path = %request.path, "step: render started");
    let response = template
        .respond(engine, &request)
        .await
        .with_context(|| format!("Render {}", name))?;
    Ok(response)
}
