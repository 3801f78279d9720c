//! Unit test module
//!
//! Processor unit tests live here, separate from source files.
//! Tests interact with processors via public and pub(crate) APIs.

mod fn_processor_test;
mod request_processor_test;
