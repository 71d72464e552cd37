//! Error handling system using `thiserror` and `anyhow`.
//!
//! This module provides domain-specific error types for the decode surface
//! and operational utilities for context propagation and centralized
//! diagnostics.

pub mod domain;
pub mod operational;

pub use {
    domain::EnvelopeError,
    operational::{DiagnosticLog, ResultExt, TracingDiagnostics, init_diagnostics},
};
