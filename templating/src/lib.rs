//! # templating
//!
//! Tera-backed rendering for request handlers: [`TemplateEngine`] holds the templates and the
//! application-level context processors, [`Template`] wraps a handler and turns its output into a
//! rendered [`tmpl_core::Response`] (or passes a handler-built response straight through).

pub mod config;
mod engine;
mod template;

pub use config::TemplatingConfig;
pub use engine::{TemplateEngine, TemplateEngineBuilder};
pub use template::Template;
