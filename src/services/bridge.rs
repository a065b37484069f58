//! HostBridge - Platform Bridge Seam
//!
//! The chat platform exposes an opaque hand-off API to the embedded page.
//! Controllers depend on this trait instead of a conditionally-present global,
//! so a test double can stand in for the host.

use std::cell::{Cell, RefCell};

use crate::error::{Error, Result};

/// The host platform's bridge API, as seen by a page controller.
///
/// `submit` is fire-and-forget: the host forwards the payload to the operator
/// bot and this code never observes an acknowledgement.
pub trait HostBridge {
    /// Signal that the page is initialized
    fn notify_ready(&self);

    /// Hand one JSON-encoded payload to the host
    fn submit(&self, json_text: &str) -> Result<()>;

    /// Terminate the mini-app view
    fn dismiss(&self);
}

/// Bridge stand-in for a page opened outside the host platform.
///
/// Every submission fails with `HostUnavailable`, which the page surfaces as
/// a status message rather than an exception.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableBridge;

impl HostBridge for UnavailableBridge {
    fn notify_ready(&self) {
        tracing::debug!("notify_ready ignored, host bridge unavailable");
    }

    fn submit(&self, _json_text: &str) -> Result<()> {
        Err(Error::HostUnavailable)
    }

    fn dismiss(&self) {
        tracing::debug!("dismiss ignored, host bridge unavailable");
    }
}

/// Recording test double for controller tests.
///
/// Captures every call so tests can assert on the exact hand-off sequence.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    ready: Cell<bool>,
    dismissed: Cell<bool>,
    submitted: RefCell<Vec<String>>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `notify_ready` was called
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Whether `dismiss` was called
    pub fn is_dismissed(&self) -> bool {
        self.dismissed.get()
    }

    /// All payloads handed over, in call order
    pub fn submitted(&self) -> Vec<String> {
        self.submitted.borrow().clone()
    }
}

impl HostBridge for RecordingBridge {
    fn notify_ready(&self) {
        self.ready.set(true);
    }

    fn submit(&self, json_text: &str) -> Result<()> {
        self.submitted.borrow_mut().push(json_text.to_string());
        Ok(())
    }

    fn dismiss(&self) {
        self.dismissed.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_bridge_rejects_submissions() {
        let bridge = UnavailableBridge;
        assert!(matches!(bridge.submit("{}"), Err(Error::HostUnavailable)));
    }

    #[test]
    fn test_recording_bridge_captures_calls() {
        let bridge = RecordingBridge::new();
        bridge.notify_ready();
        bridge.submit(r#"{"a":1}"#).expect("recording submit");
        bridge.dismiss();

        assert!(bridge.is_ready());
        assert!(bridge.is_dismissed());
        assert_eq!(bridge.submitted(), vec![r#"{"a":1}"#.to_string()]);
    }
}
