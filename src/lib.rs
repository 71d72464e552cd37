//! Toastlink - GraphQL Error Notification Layer
//!
//! An error-link layer for GraphQL clients: it intercepts GraphQL-level and
//! network-level errors from a transport, composes plain display-model toast
//! messages with optional stack-trace disclosure, and hands them to injected
//! notification, modal, and diagnostic-log sinks. No rendering technology is
//! assumed; the embedding UI supplies the sinks.

pub mod config;
pub mod error;
pub mod graphql;
pub mod interceptor;
pub mod notify;

// Re-export key types for convenience
pub use {
    config::{NotifySettings, SettingsError, SettingsManager},
    error::{DiagnosticLog, EnvelopeError, TracingDiagnostics, init_diagnostics},
    graphql::{GraphQlError, NetworkError, PathSegment, ResponseEnvelope, StackTrace},
    interceptor::{ErrorCallback, ErrorInterceptor},
    notify::{
        ChannelSink, CompositeMessage, DisclosureState, MessageBody, ModalBounds, ModalHost,
        Notification, NotificationSink, Severity, StackTraceDisclosure, ToastAnchor, TraceModal,
    },
};
