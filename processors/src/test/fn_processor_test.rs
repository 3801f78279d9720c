//! Unit tests for closure adapters: processor_fn and handler_fn.

use crate::{handler_fn, processor_fn};
use tmpl_core::{
    context, ContextProcessor, HandlerOutput, ProcessorError, Request, RequestHandler, Response,
    TmplError,
};

#[tokio::test]
async fn test_processor_fn_sees_request() {
    let processor = processor_fn(|request: Request| async move {
        Ok::<_, TmplError>(context! { "path_len": request.path.len() })
    })
    .named("path_len");

    let context = processor.process(&Request::get("/abc")).await.unwrap();
    assert_eq!(context["path_len"], 4);
    assert_eq!(processor.name(), "path_len");
}

#[tokio::test]
async fn test_processor_fn_error_is_returned() {
    let processor = processor_fn(|_request: Request| async move {
        Err::<tmpl_core::ContextMap, _>(TmplError::from(ProcessorError::failed(
            "user_loader",
            "session expired",
        )))
    });

    let result = processor.process(&Request::get("/")).await;
    assert!(matches!(
        result,
        Err(TmplError::Processor(ProcessorError::Failed { .. }))
    ));
}

#[tokio::test]
async fn test_handler_fn_context_and_response() {
    let handler = handler_fn(|_request: Request| async move {
        Ok::<_, TmplError>(HandlerOutput::Context(context! { "bar": 2 }))
    });
    let output = handler.handle(&Request::get("/")).await.unwrap();
    assert_eq!(output, HandlerOutput::Context(context! { "bar": 2 }));

    let handler = handler_fn(|_request: Request| async move {
        Ok::<_, TmplError>(HandlerOutput::Response(Response::forbidden()))
    });
    let output = handler.handle(&Request::get("/")).await.unwrap();
    assert_eq!(output, HandlerOutput::Response(Response::new(403)));
}
