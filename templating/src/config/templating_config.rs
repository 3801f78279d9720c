//! TemplatingConfig: loaded from env, with defaults for everything.

use anyhow::Result;
use std::env;

/// Where templates live and how rendered responses are labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatingConfig {
    /// TEMPLATE_DIR: glob of template files, names are relative to the glob's base directory
    pub template_dir: String,
    /// TEMPLATE_CONTENT_TYPE
    pub content_type: String,
    /// TEMPLATE_CHARSET
    pub charset: String,
    /// TEMPLATE_AUTOESCAPE: HTML-escape output of templates named `*.html`, `*.htm` or `*.xml`.
    /// Other names (e.g. `page.jinja2`) are never escaped, whatever this is set to.
    pub autoescape: bool,
    /// LOG_FILE: optional; logs go to stdout only when unset
    pub log_file: Option<String>,
}

impl Default for TemplatingConfig {
    fn default() -> Self {
        Self {
            template_dir: "templates/**/*".to_string(),
            content_type: "text/html".to_string(),
            charset: "utf-8".to_string(),
            autoescape: true,
            log_file: None,
        }
    }
}

impl TemplatingConfig {
    /// Load from environment variables; unset variables keep their defaults.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();
        let template_dir = env::var("TEMPLATE_DIR").unwrap_or(defaults.template_dir);
        let content_type = env::var("TEMPLATE_CONTENT_TYPE").unwrap_or(defaults.content_type);
        let charset = env::var("TEMPLATE_CHARSET").unwrap_or(defaults.charset);
        let autoescape = match env::var("TEMPLATE_AUTOESCAPE") {
            Ok(value) => parse_bool(&value).ok_or_else(|| {
                anyhow::anyhow!("TEMPLATE_AUTOESCAPE must be true or false, got: {}", value)
            })?,
            Err(_) => defaults.autoescape,
        };
        let log_file = env::var("LOG_FILE").ok().filter(|s| !s.trim().is_empty());

        Ok(Self {
            template_dir,
            content_type,
            charset,
            autoescape,
            log_file,
        })
    }

    /// Validate config (template dir, content type and charset must be non-empty).
    pub fn validate(&self) -> Result<()> {
        if self.template_dir.trim().is_empty() {
            anyhow::bail!("TEMPLATE_DIR must not be empty");
        }
        if self.content_type.trim().is_empty() {
            anyhow::bail!("TEMPLATE_CONTENT_TYPE must not be empty");
        }
        if self.charset.trim().is_empty() {
            anyhow::bail!("TEMPLATE_CHARSET must not be empty");
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
