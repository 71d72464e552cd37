//! Operational error context propagation and centralized diagnostics.
//!
//! This module provides an extension trait for enhancing error context, the
//! diagnostic log seam the interceptor writes raw error payloads to, and a
//! `tracing`-backed implementation of that seam.

use std::{error::Error as StdError, fmt::Display};

use {
    anyhow::{Context, Result as AnyhowResult},
    serde_json::Value,
    tracing::error,
    tracing_subscriber::EnvFilter,
};

/// Extension trait for enhanced error context.
///
/// This trait provides methods to add contextual information to errors,
/// making debugging and user feedback more informative.
pub trait ResultExt<T, E> {
    /// Adds context to an error with a static string.
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;

    /// Adds context to an error with a formatted string.
    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(context)
    }

    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(format.to_string())
    }
}

/// Destination for raw transport error payloads.
///
/// The interceptor writes one entry per surfaced error, tagged with the
/// error's classification. Injected so the interceptor is testable without a
/// live logging stack.
pub trait DiagnosticLog: Send + Sync {
    /// Records one raw error payload under a classification tag.
    fn error(&self, tag: &str, payload: Value);
}

/// `DiagnosticLog` implementation writing structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticLog for TracingDiagnostics {
    fn error(&self, tag: &str, payload: Value) {
        error!(tag = tag, payload = %payload, "Transport error");
    }
}

/// Installs a fmt subscriber honoring `RUST_LOG` as the global default.
///
/// Intended for embedders that do not bring their own subscriber; applications
/// with an existing tracing setup should skip this.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_diagnostics() -> AnyhowResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| anyhow::Error::from_boxed(e).context("Failed to install diagnostics subscriber"))
}
