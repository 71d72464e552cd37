//! Toast notifications and the sinks that display them.
//!
//! A `Notification` is an ephemeral display-model value; whichever sink
//! receives it owns the display and dismissal lifecycle from then on.

use {
    async_channel::{Receiver, Sender, unbounded},
    serde::{Deserialize, Serialize},
    tracing::warn,
};

use crate::notify::message::MessageBody;

/// Visual intent of a notification.
///
/// Mirrors the intent levels of common toast widgets. The error interceptor
/// only ever emits `Danger`; the taxonomy recognizes no finer grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral informational message.
    Info,
    /// Non-critical issue worth the user's attention.
    Warning,
    /// Error or failure.
    Danger,
}

impl Severity {
    /// CSS class for styling the toast surface.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "toast-info",
            Severity::Warning => "toast-warning",
            Severity::Danger => "toast-danger",
        }
    }
}

/// One transient toast, created per surfaced error.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Message content, plain text or the composite multi-line form.
    pub body: MessageBody,
    /// Visual intent.
    pub severity: Severity,
}

impl Notification {
    /// Creates a notification with an explicit severity.
    pub fn new(body: MessageBody, severity: Severity) -> Self {
        Self { body, severity }
    }

    /// Creates a danger notification, the form every intercepted error takes.
    pub fn danger(body: MessageBody) -> Self {
        Self::new(body, Severity::Danger)
    }
}

/// Destination for notifications.
///
/// The process-wide toast instance sits behind this trait; it is injected
/// into the interceptor so tests run without a live UI. Implementations must
/// tolerate interleaved `show` calls from concurrent transport callbacks.
pub trait NotificationSink: Send + Sync {
    /// Hands one notification to the sink. The sink owns it from here.
    fn show(&self, notification: Notification);
}

/// Sink that fans notifications out over an unbounded channel.
///
/// The receiving end is consumed by whatever loop drives the actual toast
/// widget. A closed receiver is an environment fault; the notification is
/// dropped rather than propagated, per the interceptor's terminal contract.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<Notification>,
}

impl ChannelSink {
    /// Creates a sink and the receiver its notifications arrive on.
    #[must_use]
    pub fn unbounded() -> (Self, Receiver<Notification>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelSink {
    fn show(&self, notification: Notification) {
        if self.tx.try_send(notification).is_err() {
            warn!("Notification channel closed, toast dropped");
        }
    }
}

/// Fixed screen anchor of the process-wide toast instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastAnchor {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    #[default]
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}
