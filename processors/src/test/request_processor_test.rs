//! Unit tests for RequestProcessor.

use crate::RequestProcessor;
use tmpl_core::{ContextProcessor, Request, REQUEST_KEY};

#[tokio::test]
async fn test_request_processor_exposes_request() {
    let request = Request::get("/docs?lang=en").with_match_info("section", "docs");
    let context = RequestProcessor.process(&request).await.unwrap();

    assert_eq!(context.len(), 1);
    let exposed = &context[REQUEST_KEY];
    assert_eq!(exposed["path"], "/docs");
    assert_eq!(exposed["method"], "GET");
    assert_eq!(exposed["query_string"], "lang=en");
    assert_eq!(exposed["match_info"]["section"], "docs");
}

#[tokio::test]
async fn test_request_processor_name() {
    assert_eq!(RequestProcessor.name(), "request_processor");
}
