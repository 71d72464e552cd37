//! The error interceptor installed into a GraphQL transport's link chain.
//!
//! The transport invokes the callback once per response that carries errors.
//! The interceptor classifies each error, composes a display-model message,
//! pushes one danger toast per error, and writes the raw payload to the
//! diagnostic log. It is terminal error handling: nothing is retried,
//! re-thrown, or forwarded further.

use std::sync::Arc;

use {
    serde::Serialize,
    serde_json::{Value, to_value},
    tracing::debug,
};

use crate::{
    config::NotifySettings,
    error::operational::DiagnosticLog,
    graphql::ResponseEnvelope,
    notify::{
        message::{GRAPHQL_TAG, NETWORK_TAG, graphql_error_body, network_error_body},
        toast::{Notification, NotificationSink},
    },
};

/// The callback shape a transport's error-interception point accepts.
pub type ErrorCallback = Arc<dyn Fn(&ResponseEnvelope) + Send + Sync>;

/// Terminal error handler for GraphQL transport responses.
///
/// Every collaborator is injected, so the interceptor runs in tests without a
/// live UI or logging stack. One instance is shared by all in-flight
/// requests; invocations interleave only on the sinks.
pub struct ErrorInterceptor {
    toasts: Arc<dyn NotificationSink>,
    diagnostics: Arc<dyn DiagnosticLog>,
    settings: NotifySettings,
}

impl ErrorInterceptor {
    /// Creates an interceptor with explicit settings.
    pub fn new(
        toasts: Arc<dyn NotificationSink>,
        diagnostics: Arc<dyn DiagnosticLog>,
        settings: NotifySettings,
    ) -> Self {
        Self {
            toasts,
            diagnostics,
            settings,
        }
    }

    /// Creates an interceptor with default settings.
    pub fn with_defaults(
        toasts: Arc<dyn NotificationSink>,
        diagnostics: Arc<dyn DiagnosticLog>,
    ) -> Self {
        Self::new(toasts, diagnostics, NotifySettings::default())
    }

    /// Handles one transport response.
    ///
    /// Every GraphQL error produces exactly one notification and one log
    /// entry, in server-reported order, with no merging and no early
    /// termination. A network error does the same, independently of whether
    /// GraphQL errors were present. Never fails: this is where errors stop.
    pub fn on_response(&self, envelope: &ResponseEnvelope) {
        debug!(
            graphql_errors = envelope.graphql_errors.len(),
            network_error = envelope.network_error.is_some(),
            "Intercepted transport response"
        );

        for error in &envelope.graphql_errors {
            let body = graphql_error_body(error, &self.settings);
            self.toasts.show(Notification::danger(body));
            self.diagnostics.error(GRAPHQL_TAG, raw_payload(error));
        }

        if let Some(network_error) = &envelope.network_error {
            let body = network_error_body(network_error);
            self.toasts.show(Notification::danger(body));
            self.diagnostics.error(NETWORK_TAG, raw_payload(network_error));
        }
    }

    /// Produces the callback to register with the transport at startup.
    #[must_use]
    pub fn into_callback(self) -> ErrorCallback {
        let interceptor = Arc::new(self);
        Arc::new(move |envelope| interceptor.on_response(envelope))
    }
}

/// Serializes an error for the diagnostic log.
///
/// Serialization of these payload types cannot fail in practice; a `Null`
/// entry is still a better outcome than losing the log line.
fn raw_payload<T: Serialize>(payload: &T) -> Value {
    to_value(payload).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use {parking_lot::Mutex, serde_json::Value};

    use crate::{
        config::NotifySettings,
        error::operational::DiagnosticLog,
        graphql::{GraphQlError, NetworkError, PathSegment, ResponseEnvelope, StackTrace},
        interceptor::ErrorInterceptor,
        notify::{
            message::MessageBody,
            toast::{Notification, NotificationSink, Severity},
        },
    };

    /// Sink that records every notification it is handed.
    #[derive(Default)]
    struct RecordingSink {
        shown: Mutex<Vec<Notification>>,
    }

    impl RecordingSink {
        fn rendered(&self) -> Vec<String> {
            self.shown
                .lock()
                .iter()
                .map(|notification| notification.body.to_string())
                .collect()
        }
    }

    impl NotificationSink for RecordingSink {
        fn show(&self, notification: Notification) {
            self.shown.lock().push(notification);
        }
    }

    /// Diagnostic log that records (tag, payload) pairs.
    #[derive(Default)]
    struct RecordingLog {
        entries: Mutex<Vec<(String, Value)>>,
    }

    impl DiagnosticLog for RecordingLog {
        fn error(&self, tag: &str, payload: Value) {
            self.entries.lock().push((tag.to_string(), payload));
        }
    }

    fn interceptor_with_recorders() -> (ErrorInterceptor, Arc<RecordingSink>, Arc<RecordingLog>) {
        let sink = Arc::new(RecordingSink::default());
        let log = Arc::new(RecordingLog::default());
        let interceptor = ErrorInterceptor::with_defaults(sink.clone(), log.clone());
        (interceptor, sink, log)
    }

    fn error_with_path(message: &str, path: &[&str]) -> GraphQlError {
        GraphQlError {
            message: message.to_string(),
            path: Some(
                path.iter()
                    .map(|segment| PathSegment::Field((*segment).to_string()))
                    .collect(),
            ),
            stack_trace: StackTrace::Absent,
        }
    }

    #[test]
    fn test_one_notification_and_log_entry_per_error() {
        let (interceptor, sink, log) = interceptor_with_recorders();

        let envelope = ResponseEnvelope::new(
            vec![
                GraphQlError::new("first"),
                error_with_path("second", &["a", "b"]),
                GraphQlError::new("third"),
            ],
            Some(NetworkError::new("socket closed")),
        );
        interceptor.on_response(&envelope);

        assert_eq!(sink.shown.lock().len(), 4);
        assert_eq!(log.entries.lock().len(), 4);
    }

    #[test]
    fn test_server_reported_order_is_preserved() {
        let (interceptor, sink, _log) = interceptor_with_recorders();

        let envelope = ResponseEnvelope::new(
            vec![GraphQlError::new("first"), GraphQlError::new("second")],
            None,
        );
        interceptor.on_response(&envelope);

        assert_eq!(
            sink.rendered(),
            ["[GraphQL error] first", "[GraphQL error] second"]
        );
    }

    #[test]
    fn test_pathless_error_shows_exact_plain_message() {
        let (interceptor, sink, _log) = interceptor_with_recorders();

        interceptor.on_response(&ResponseEnvelope::new(vec![GraphQlError::new("boom")], None));

        assert_eq!(sink.rendered(), ["[GraphQL error] boom"]);
    }

    #[test]
    fn test_path_error_shows_composite_message() {
        let (interceptor, sink, _log) = interceptor_with_recorders();

        interceptor.on_response(&ResponseEnvelope::new(
            vec![error_with_path("boom", &["a", "b", "c"])],
            None,
        ));

        let rendered = sink.rendered();
        assert!(rendered[0].contains("[GraphQL error] Error resolving field"));
        assert!(rendered[0].contains("a → b → c"));
        assert!(rendered[0].contains("Message:\nboom"));
    }

    #[test]
    fn test_network_error_shows_exact_plain_message() {
        let (interceptor, sink, log) = interceptor_with_recorders();

        interceptor.on_response(&ResponseEnvelope::from_network_failure("timeout"));

        assert_eq!(sink.rendered(), ["[Network error] timeout"]);

        let entries = log.entries.lock();
        assert_eq!(entries[0].0, "[Network error]");
        assert_eq!(entries[0].1["message"], "timeout");
    }

    #[test]
    fn test_all_notifications_carry_danger_severity() {
        let (interceptor, sink, _log) = interceptor_with_recorders();

        interceptor.on_response(&ResponseEnvelope::new(
            vec![GraphQlError::new("boom")],
            Some(NetworkError::new("timeout")),
        ));

        for notification in sink.shown.lock().iter() {
            assert_eq!(notification.severity, Severity::Danger);
        }
    }

    #[test]
    fn test_raw_error_is_logged_under_graphql_tag() {
        let (interceptor, _sink, log) = interceptor_with_recorders();

        let mut error = error_with_path("boom", &["a"]);
        error.stack_trace = StackTrace::from_lines(["at foo()"]);
        interceptor.on_response(&ResponseEnvelope::new(vec![error], None));

        let entries = log.entries.lock();
        assert_eq!(entries[0].0, "[GraphQL error]");
        assert_eq!(entries[0].1["message"], "boom");
        assert_eq!(entries[0].1["stack_trace"][0], "at foo()");
    }

    #[test]
    fn test_stack_trace_yields_disclosure_in_notification() {
        let (interceptor, sink, _log) = interceptor_with_recorders();

        let mut error = error_with_path("boom", &["a"]);
        error.stack_trace = StackTrace::from_lines(["at foo()", "at bar()"]);
        interceptor.on_response(&ResponseEnvelope::new(vec![error], None));

        let shown = sink.shown.lock();
        let MessageBody::Composite(composite) = &shown[0].body else {
            panic!("expected composite body");
        };
        let disclosure = composite.disclosure.as_ref().expect("disclosure expected");
        assert_eq!(disclosure.frames(), ["at foo()", "at bar()"]);
    }

    #[test]
    fn test_empty_stack_trace_yields_no_disclosure() {
        let (interceptor, sink, _log) = interceptor_with_recorders();

        let mut error = error_with_path("boom", &["a"]);
        error.stack_trace = StackTrace::Lines(vec![]);
        interceptor.on_response(&ResponseEnvelope::new(vec![error], None));

        let shown = sink.shown.lock();
        let MessageBody::Composite(composite) = &shown[0].body else {
            panic!("expected composite body");
        };
        assert!(composite.disclosure.is_none());
    }

    #[test]
    fn test_empty_envelope_is_a_no_op() {
        let (interceptor, sink, log) = interceptor_with_recorders();

        interceptor.on_response(&ResponseEnvelope::default());

        assert!(sink.shown.lock().is_empty());
        assert!(log.entries.lock().is_empty());
    }

    #[test]
    fn test_independent_invocations_do_not_interfere() {
        let (interceptor, sink, log) = interceptor_with_recorders();

        interceptor.on_response(&ResponseEnvelope::new(vec![GraphQlError::new("first")], None));
        interceptor.on_response(&ResponseEnvelope::new(vec![GraphQlError::new("second")], None));

        assert_eq!(
            sink.rendered(),
            ["[GraphQL error] first", "[GraphQL error] second"]
        );
        assert_eq!(log.entries.lock().len(), 2);
    }

    #[test]
    fn test_callback_factory_drives_the_interceptor() {
        let sink = Arc::new(RecordingSink::default());
        let log = Arc::new(RecordingLog::default());
        let callback = ErrorInterceptor::with_defaults(sink.clone(), log.clone()).into_callback();

        callback(&ResponseEnvelope::from_network_failure("timeout"));

        assert_eq!(sink.rendered(), ["[Network error] timeout"]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_interleaved_invocations_lose_nothing() {
        let sink = Arc::new(RecordingSink::default());
        let log = Arc::new(RecordingLog::default());
        let interceptor = Arc::new(ErrorInterceptor::new(
            sink.clone(),
            log.clone(),
            NotifySettings::default(),
        ));

        let mut handles = Vec::new();
        for index in 0..8 {
            let interceptor = interceptor.clone();
            handles.push(tokio::spawn(async move {
                let envelope = ResponseEnvelope::new(
                    vec![GraphQlError::new(format!("error {index}"))],
                    None,
                );
                interceptor.on_response(&envelope);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(sink.shown.lock().len(), 8);
        assert_eq!(log.entries.lock().len(), 8);
    }
}
