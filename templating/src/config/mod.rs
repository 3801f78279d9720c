//! Templating configuration: template location, response content type, escaping, logging.

mod templating_config;


pub use templating_config::TemplatingConfig;
