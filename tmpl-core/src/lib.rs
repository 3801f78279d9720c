//! # tmpl-core
//!
//! Core types and traits for request-scoped template contexts: [`Request`], [`Response`],
//! [`HandlerOutput`], [`ContextProcessor`], [`RequestHandler`], errors and tracing initialization.
//! Engine-agnostic; used by context-chain, processors and templating.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{ProcessorError, Result, TmplError};
pub use logger::init_tracing;
pub use types::{
    Assembly, ContextMap, ContextProcessor, HandlerOutput, RenderInput, Request, RequestHandler,
    Response, REQUEST_KEY,
};

#[doc(hidden)]
pub use serde_json;

/// Builds a [`ContextMap`] from `"key": value` pairs; values go through `serde_json::json!`.
///
/// ```
/// let ctx = tmpl_core::context! { "foo": 1, "bar": "X" };
/// assert_eq!(ctx["foo"], 1);
/// ```
#[macro_export]
macro_rules! context {
    { $( $key:literal : $value:expr ),* $(,)? } => {
        {
            #[allow(unused_mut)]
            let mut map = $crate::ContextMap::new();
            $(
                map.insert($key.to_string(), $crate::serde_json::json!($value));
            )*
            map
        }
    };
}
