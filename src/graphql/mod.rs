//! GraphQL transport payload model.
//!
//! This module defines the response envelope handed to the error interceptor
//! by the transport, along with the GraphQL-level and network-level error
//! types it carries.

pub mod envelope;

pub use envelope::{GraphQlError, NetworkError, PathSegment, ResponseEnvelope, StackTrace};
