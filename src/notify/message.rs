//! Message composition: from error payloads to display-model bodies.
//!
//! These are pure "build message, hand to sink" functions. They return plain
//! values a renderer can display with whatever technology it uses; no widget
//! types appear here.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{
    config::NotifySettings,
    graphql::{GraphQlError, NetworkError, PathSegment},
    notify::disclosure::StackTraceDisclosure,
};

/// Tag prefixed to every GraphQL-level error message and log entry.
pub const GRAPHQL_TAG: &str = "[GraphQL error]";

/// Tag prefixed to every network-level error message and log entry.
pub const NETWORK_TAG: &str = "[Network error]";

/// Header of the composite form, after the GraphQL tag.
const FIELD_ERROR_HEADER: &str = "Error resolving field";

/// Label line introducing the error message text in the composite form.
const MESSAGE_LABEL: &str = "Message:";

/// Separator between path segments.
const PATH_SEPARATOR: &str = " → ";

/// The body of one toast notification.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    /// A single line of text.
    Plain(String),
    /// The multi-line field-resolution form, optionally with a disclosure.
    Composite(CompositeMessage),
}

impl Display for MessageBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MessageBody::Plain(text) => f.write_str(text),
            MessageBody::Composite(composite) => {
                let lines = composite.lines();
                let mut first = true;
                for line in lines {
                    if !first {
                        writeln!(f)?;
                    }
                    f.write_str(line)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

/// The multi-line message composed for an error that names a failing field.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeMessage {
    /// Header line, e.g. `[GraphQL error] Error resolving field`.
    pub header: String,
    /// The field path joined with the arrow separator.
    pub path: String,
    /// The raw error message text.
    pub message: String,
    /// Trigger for the server stack trace, when one is displayable.
    pub disclosure: Option<StackTraceDisclosure>,
}

impl CompositeMessage {
    /// The body's text lines in display order.
    #[must_use]
    pub fn lines(&self) -> [&str; 4] {
        [
            self.header.as_str(),
            self.path.as_str(),
            MESSAGE_LABEL,
            self.message.as_str(),
        ]
    }
}

/// Joins path segments with the arrow separator.
#[must_use]
pub fn format_path(segments: &[PathSegment]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// Composes the toast body for one GraphQL-level error.
///
/// Errors carrying a non-empty path get the composite multi-line form; the
/// disclosure is attached only when the trace has lines and the settings
/// allow stack traces. Errors without a path get the plain one-line form.
#[must_use]
pub fn graphql_error_body(error: &GraphQlError, settings: &NotifySettings) -> MessageBody {
    let segments = error.path_segments();
    if segments.is_empty() {
        return MessageBody::Plain(format!("{GRAPHQL_TAG} {}", error.message));
    }

    let disclosure = (settings.show_stack_traces && error.stack_trace.has_frames()).then(|| {
        StackTraceDisclosure::new(error.message.clone(), &error.stack_trace, settings.trace_modal)
    });

    MessageBody::Composite(CompositeMessage {
        header: format!("{GRAPHQL_TAG} {FIELD_ERROR_HEADER}"),
        path: format_path(segments),
        message: error.message.clone(),
        disclosure,
    })
}

/// Composes the toast body for a network-level error.
#[must_use]
pub fn network_error_body(error: &NetworkError) -> MessageBody {
    MessageBody::Plain(format!("{NETWORK_TAG} {}", error.message))
}
