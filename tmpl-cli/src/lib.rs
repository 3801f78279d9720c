//! # tmpl-cli
//!
//! Argument parsing, config loading and the render/list commands behind the `tmpl` binary.

pub mod cli;

pub use cli::{build_engine, load_config, parse_context, render, Cli, Commands};
pub use templating::TemplatingConfig;
