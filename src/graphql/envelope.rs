//! Response envelope and error payload types.
//!
//! This module defines the data structures the transport hands to the error
//! interceptor: the per-response envelope, GraphQL-level errors with their
//! optional field path and server stack trace, and transport-level network
//! errors. All types are immutable per response and serde-enabled.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::error::domain::EnvelopeError;

/// One segment of a GraphQL response path.
///
/// Response paths interleave field names with list indices, so a segment is
/// either a field name or a numeric index into a list value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A field name segment.
    Field(String),
    /// A list index segment.
    Index(u64),
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A server-supplied stack trace attached to a GraphQL error.
///
/// Modeled as an explicit sum type rather than a nullable list so that an
/// absent trace and an empty trace stay distinguishable values, even though
/// both suppress the disclosure trigger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum StackTrace {
    /// The server attached no trace at all.
    #[default]
    Absent,
    /// The server attached a trace with the given lines (possibly zero).
    Lines(Vec<String>),
}

impl StackTrace {
    /// Builds a trace from an iterator of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StackTrace::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// Returns the trace lines, empty when the trace is absent.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        match self {
            StackTrace::Absent => &[],
            StackTrace::Lines(lines) => lines,
        }
    }

    /// Whether the trace carries at least one line.
    #[must_use]
    pub fn has_frames(&self) -> bool {
        !self.frames().is_empty()
    }

    /// Whether the server attached no trace at all.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, StackTrace::Absent)
    }
}

impl From<Option<Vec<String>>> for StackTrace {
    fn from(lines: Option<Vec<String>>) -> Self {
        match lines {
            None => StackTrace::Absent,
            Some(lines) => StackTrace::Lines(lines),
        }
    }
}

impl From<StackTrace> for Option<Vec<String>> {
    fn from(trace: StackTrace) -> Self {
        match trace {
            StackTrace::Absent => None,
            StackTrace::Lines(lines) => Some(lines),
        }
    }
}

/// A structured error item returned by a GraphQL server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    /// Human-readable error message.
    pub message: String,
    /// Query field path identifying where resolution failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,
    /// Server-side stack trace, when the server chose to attach one.
    #[serde(default, alias = "stackTrace", skip_serializing_if = "StackTrace::is_absent")]
    pub stack_trace: StackTrace,
}

impl GraphQlError {
    /// Creates an error with a message and no path or trace.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            stack_trace: StackTrace::Absent,
        }
    }

    /// Returns the path segments, empty when the path is absent.
    #[must_use]
    pub fn path_segments(&self) -> &[PathSegment] {
        self.path.as_deref().unwrap_or_default()
    }

    /// Whether the error identifies a failing field.
    ///
    /// An empty path carries no field information, so it counts as no path.
    #[must_use]
    pub fn has_path(&self) -> bool {
        !self.path_segments().is_empty()
    }
}

/// A transport-layer failure preventing a response from being obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkError {
    /// Human-readable failure message.
    pub message: String,
}

impl NetworkError {
    /// Creates a network error from a failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.message)
    }
}

/// The raw JSON shape of a GraphQL response body, reduced to what the
/// interceptor consumes.
#[derive(Debug, Deserialize)]
struct RawResponseBody {
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

/// Everything the transport reports about one response.
///
/// Owned by the transport for the duration of the interceptor callback and
/// not retained afterwards. Both error kinds may be present on the same
/// envelope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseEnvelope {
    /// GraphQL-level errors in server-reported order.
    pub graphql_errors: Vec<GraphQlError>,
    /// Transport-level failure, at most one per response.
    pub network_error: Option<NetworkError>,
}

impl ResponseEnvelope {
    /// Creates an envelope from already-decoded parts.
    pub fn new(graphql_errors: Vec<GraphQlError>, network_error: Option<NetworkError>) -> Self {
        Self {
            graphql_errors,
            network_error,
        }
    }

    /// Decodes the `errors` array of a GraphQL response body.
    ///
    /// A body without an `errors` key decodes to an envelope with zero
    /// GraphQL errors; that is a valid response, not a decode failure.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeError` if the body is not valid JSON or the `errors`
    /// array does not match the expected shape.
    pub fn from_response_body(body: &[u8]) -> Result<Self, EnvelopeError> {
        let raw: RawResponseBody = serde_json::from_slice(body)?;
        Ok(Self {
            graphql_errors: raw.errors,
            network_error: None,
        })
    }

    /// Creates an envelope for a transport-level failure with no response body.
    pub fn from_network_failure(message: impl Into<String>) -> Self {
        Self {
            graphql_errors: Vec::new(),
            network_error: Some(NetworkError::new(message)),
        }
    }

    /// Whether anything in this envelope needs surfacing.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.graphql_errors.is_empty() || self.network_error.is_some()
    }
}
