//! Focus-outside coordination.
//!
//! A wrapped component wants to know when focus leaves it for good. A blur
//! on one of its elements is often followed immediately by a focus on
//! another of its elements, so the blur only queues a check; a focus inside
//! the component cancels it, and the host runs whatever is still pending on
//! its next turn via [`FocusOutsideMonitor::run_pending`].
//!
//! Some engines never focus a button on click. A pointer press on a
//! button-like element therefore suppresses blur checks until the press
//! ends, so clicking a button in the component reads as focus.

use tabstop_protocols::{Element, NodeId};
use tracing::trace;

/// Input types whose click is treated as focusing them.
const INPUT_BUTTON_TYPES: [&str; 2] = ["button", "submit"];

/// Receives the notification that focus has left the component.
pub trait FocusOutsideHandler {
    fn handle_focus_outside(&mut self, event: &BlurEvent);
}

impl<F: FnMut(&BlurEvent)> FocusOutsideHandler for F {
    fn handle_focus_outside(&mut self, event: &BlurEvent) {
        self(event)
    }
}

/// A blur observed on the component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlurEvent {
    /// Element losing focus.
    pub target: Option<NodeId>,
    /// Element gaining focus, when known.
    pub related_target: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    MouseDown,
    MouseUp,
    TouchStart,
    TouchEnd,
}

impl PointerKind {
    fn ends_interaction(self) -> bool {
        matches!(self, PointerKind::MouseUp | PointerKind::TouchEnd)
    }
}

/// Whether clicking `element` should count as focusing it.
pub fn is_focus_normalized_button(element: &Element) -> bool {
    if element.is("a") || element.is("button") {
        return true;
    }
    element.is("input")
        && element
            .attribute("type")
            .is_some_and(|kind| INPUT_BUTTON_TYPES.iter().any(|t| kind.eq_ignore_ascii_case(t)))
}

/// Tracks blur/focus traffic for one component.
#[derive(Debug)]
pub struct FocusOutsideMonitor<H> {
    handler: Option<H>,
    prevent_blur_check: bool,
    pending: Option<BlurEvent>,
}

impl<H> Default for FocusOutsideMonitor<H> {
    fn default() -> Self {
        Self {
            handler: None,
            prevent_blur_check: false,
            pending: None,
        }
    }
}

impl<H: FocusOutsideHandler> FocusOutsideMonitor<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the component, returning the previously attached one.
    pub fn bind(&mut self, handler: H) -> Option<H> {
        self.handler.replace(handler)
    }

    /// Detach the component. Any queued check is dropped.
    pub fn unbind(&mut self) -> Option<H> {
        self.cancel_blur_check();
        self.handler.take()
    }

    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn on_blur(&mut self, event: BlurEvent) {
        if self.prevent_blur_check {
            trace!(?event, "Blur during button press ignored");
            return;
        }
        trace!(?event, "Blur check queued");
        self.pending = Some(event);
    }

    /// Focus landed inside the component.
    pub fn on_focus(&mut self) {
        self.cancel_blur_check();
    }

    pub fn on_pointer(&mut self, kind: PointerKind, target: &Element) {
        if kind.ends_interaction() {
            self.prevent_blur_check = false;
        } else if is_focus_normalized_button(target) {
            self.prevent_blur_check = true;
        }
    }

    /// Deliver the queued check, if any. Returns whether the handler ran.
    pub fn run_pending(&mut self) -> bool {
        let Some(event) = self.pending.take() else {
            return false;
        };
        match self.handler.as_mut() {
            Some(handler) => {
                handler.handle_focus_outside(&event);
                true
            }
            None => false,
        }
    }

    fn cancel_blur_check(&mut self) {
        if self.pending.take().is_some() {
            trace!("Blur check cancelled");
        }
    }
}

#[cfg(test)]
#[path = "focus_outside_tests.rs"]
mod tests;
