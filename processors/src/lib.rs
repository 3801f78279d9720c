//! Stock context processors and closure adapters for processors and handlers.

mod fn_processor;
mod request_processor;
mod static_processor;

pub use fn_processor::{handler_fn, processor_fn, FnHandler, FnProcessor};
pub use request_processor::RequestProcessor;
pub use static_processor::StaticProcessor;

#[cfg(test)]
mod test;
