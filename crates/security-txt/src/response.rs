//! Request adapter: configuration to an HTTP-shaped result record.
//!
//! The adapter is a pure function; host bindings (see the
//! `security-txt-axum` crate) translate [`SecurityTxtResponse`] into their
//! native response type.

use crate::config::SecurityTxtConfig;
use crate::format::generate;

/// `Content-Type` header value for the document.
pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// `Cache-Control` header value: public caching for one hour.
pub const CACHE_CONTROL: &str = "public, max-age=3600";

/// An in-memory response: status, the two headers, and the document body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecurityTxtResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub cache_control: &'static str,
    pub body: String,
}

impl SecurityTxtResponse {
    /// Header name/value pairs in emission order.
    pub fn headers(&self) -> [(&'static str, &'static str); 2] {
        [
            ("Content-Type", self.content_type),
            ("Cache-Control", self.cache_control),
        ]
    }
}

/// Builds the response for one request. Always status 200; a sparse
/// configuration yields a shorter document, never an error.
pub fn respond(config: &SecurityTxtConfig) -> SecurityTxtResponse {
    SecurityTxtResponse {
        status: 200,
        content_type: CONTENT_TYPE,
        cache_control: CACHE_CONTROL,
        body: generate(config),
    }
}

/// Per-request handler closure over a static configuration. The document is
/// regenerated on every call; formatting is cheap enough that caching would
/// buy nothing.
pub fn handler(config: SecurityTxtConfig) -> impl Fn() -> SecurityTxtResponse {
    move || respond(&config)
}
