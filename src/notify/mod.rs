//! Notification display model and presentation seams.
//!
//! This module provides the plain display-model values the interceptor builds
//! (toast bodies, the stack-trace disclosure and its modal) together with the
//! sink traits the embedding UI implements. Nothing here depends on a
//! rendering technology.


pub mod disclosure;
pub mod message;
pub mod toast;

pub use {
    disclosure::{DisclosureState, ModalBounds, ModalHost, StackTraceDisclosure, TraceModal},
    message::{CompositeMessage, MessageBody, graphql_error_body, network_error_body},
    toast::{ChannelSink, Notification, NotificationSink, Severity, ToastAnchor},
};
