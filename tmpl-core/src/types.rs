//! Core types: request, response, handler output, assembly result, and the processor/handler traits.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Variables handed to a template. Keys are variable names.
pub type ContextMap = serde_json::Map<String, serde_json::Value>;

/// Reserved context key under which the renderer exposes the current [`Request`].
pub const REQUEST_KEY: &str = "request";

/// Incoming HTTP request as seen by processors, handlers and templates (`{{ request.path }}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub query_string: String,
    pub headers: BTreeMap<String, String>,
    /// Route parameters resolved by the hosting router.
    pub match_info: BTreeMap<String, String>,
    pub received_at: DateTime<Utc>,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            query_string: String::new(),
            headers: BTreeMap::new(),
            match_info: BTreeMap::new(),
            received_at: Utc::now(),
        }
    }

    /// GET request for `path`. A `?query` suffix is split into `query_string`.
    pub fn get(path: &str) -> Self {
        match path.split_once('?') {
            Some((path, query)) => {
                let mut request = Self::new("GET", path);
                request.query_string = query.to_string();
                request
            }
            None => Self::new("GET", path),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_match_info(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.match_info.insert(name.into(), value.into());
        self
    }
}

/// Finished HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: Option<String>,
    pub charset: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Response {
    /// Empty-bodied response with the given status.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            charset: None,
            headers: BTreeMap::new(),
            body: String::new(),
        }
    }

    pub fn forbidden() -> Self {
        Self::new(403)
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>, charset: Option<&str>) -> Self {
        self.content_type = Some(content_type.into());
        self.charset = charset.map(str::to_string);
        self
    }

    /// `Content-Type` header value, e.g. `text/html; charset=utf-8`.
    pub fn content_type_header(&self) -> Option<String> {
        self.content_type.as_ref().map(|ct| match &self.charset {
            Some(charset) => format!("{}; charset={}", ct, charset),
            None => ct.clone(),
        })
    }
}

/// What a request handler hands back: variables to render, or a response that bypasses rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutput {
    /// Local context; merged last, over every processor's output.
    Context(ContextMap),
    /// Short-circuit: returned unchanged, no processors run.
    Response(Response),
}

impl From<ContextMap> for HandlerOutput {
    fn from(context: ContextMap) -> Self {
        Self::Context(context)
    }
}

impl From<Response> for HandlerOutput {
    fn from(response: Response) -> Self {
        Self::Response(response)
    }
}

/// Merged context paired with the request it was assembled for.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInput {
    pub request: Request,
    pub context: ContextMap,
}

/// Result of context assembly.
#[derive(Debug, Clone, PartialEq)]
pub enum Assembly {
    Render(RenderInput),
    ShortCircuit(Response),
}

/// Contributes extra template variables for a request. May suspend (e.g. to fetch data).
#[async_trait]
pub trait ContextProcessor: Send + Sync {
    async fn process(&self, request: &Request) -> crate::error::Result<ContextMap>;

    /// Name used in logs and errors. Defaults to the implementing type's name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Produces the local context (or a finished response) for a request.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(&self, request: &Request) -> crate::error::Result<HandlerOutput>;
}
