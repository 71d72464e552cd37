//! Domain-specific error types using `thiserror`.
//!
//! The interceptor itself is terminal error handling and exposes no failure
//! surface; the only fallible domain here is decoding a transport response
//! body into an envelope.

use {serde_json::Error as SerdeJsonError, thiserror::Error};

/// Errors produced while decoding a response body into an envelope.
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// The body was not valid JSON or its `errors` array did not match the
    /// expected GraphQL error shape.
    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] SerdeJsonError),
}
