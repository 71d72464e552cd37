//! Stack trace disclosure: a click-to-reveal trigger and its modal.
//!
//! The disclosure is a small stateful affordance shown alongside a GraphQL
//! error toast when the server attached a stack trace. Activating the trigger
//! opens a modal on the injected host; dismissing the modal returns to the
//! trigger. Traces with no lines render nothing at all.

use serde::{Deserialize, Serialize};

use crate::graphql::StackTrace;

/// Label of the clickable disclosure trigger.
pub const TRIGGER_LABEL: &str = "View stack trace";

/// Viewport-relative bounds for the trace modal.
///
/// Long traces stay navigable because the modal never grows past these
/// fractions of the viewport; the overflow scrolls instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalBounds {
    /// Maximum modal width as a percentage of the viewport width.
    pub max_width_pct: u8,
    /// Maximum modal height as a percentage of the viewport height.
    pub max_height_pct: u8,
}

impl Default for ModalBounds {
    fn default() -> Self {
        Self {
            max_width_pct: 90,
            max_height_pct: 80,
        }
    }
}

/// Display state of a stack trace disclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureState {
    /// No visible element; the bound trace has no lines. Inert.
    Hidden,
    /// The trigger is visible, the modal is closed.
    TriggerVisible,
    /// The modal is open on the host.
    ModalOpen,
}

/// Display model for the opened trace modal.
///
/// Renderers present `rows` in order as monospaced, whitespace-preserving
/// content inside a scrollable panel clamped to `bounds`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceModal {
    /// Modal title: the error message the trace belongs to.
    pub title: String,
    /// Trace lines, one row each, in server order.
    pub rows: Vec<String>,
    /// Viewport clamp for the modal surface.
    pub bounds: ModalBounds,
}

/// Surface capable of presenting a trace modal.
///
/// The host owns the modal's display lifecycle, including the single-slot
/// discipline when something is already open.
pub trait ModalHost: Send + Sync {
    /// Opens the modal on this host.
    fn show(&self, modal: TraceModal);
}

/// Click-to-reveal disclosure bound to one error message and its trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTraceDisclosure {
    title: String,
    frames: Vec<String>,
    bounds: ModalBounds,
    state: DisclosureState,
}

impl StackTraceDisclosure {
    /// Binds a disclosure to an error message and its trace.
    ///
    /// A trace with no lines (absent or empty) yields a `Hidden` disclosure
    /// that renders nothing and rejects activation.
    pub fn new(title: impl Into<String>, trace: &StackTrace, bounds: ModalBounds) -> Self {
        let frames = trace.frames().to_vec();
        let state = if frames.is_empty() {
            DisclosureState::Hidden
        } else {
            DisclosureState::TriggerVisible
        };

        Self {
            title: title.into(),
            frames,
            bounds,
            state,
        }
    }

    /// Current display state.
    #[must_use]
    pub fn state(&self) -> DisclosureState {
        self.state
    }

    /// The error message this disclosure is bound to.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The bound trace lines in server order.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Trigger text, or `None` when the disclosure renders nothing.
    #[must_use]
    pub fn trigger_label(&self) -> Option<&'static str> {
        match self.state {
            DisclosureState::Hidden => None,
            DisclosureState::TriggerVisible | DisclosureState::ModalOpen => Some(TRIGGER_LABEL),
        }
    }

    /// Builds the modal display model for this disclosure.
    #[must_use]
    pub fn modal(&self) -> TraceModal {
        TraceModal {
            title: self.title.clone(),
            rows: self.frames.clone(),
            bounds: self.bounds,
        }
    }

    /// Activates the trigger, opening the modal on the host.
    ///
    /// Only valid from `TriggerVisible`; any other state is a rejected no-op
    /// and nothing is shown.
    pub fn activate(&mut self, host: &dyn ModalHost) -> bool {
        if self.state != DisclosureState::TriggerVisible {
            return false;
        }

        host.show(self.modal());
        self.state = DisclosureState::ModalOpen;
        true
    }

    /// Records the user dismissing the modal, returning to the trigger.
    ///
    /// Only valid from `ModalOpen`; any other state is a rejected no-op.
    pub fn dismiss(&mut self) -> bool {
        if self.state != DisclosureState::ModalOpen {
            return false;
        }

        self.state = DisclosureState::TriggerVisible;
        true
    }
}
