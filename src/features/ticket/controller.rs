//! Ticket Controller
//!
//! Owns the ticket form state and drives the validate → assemble → submit
//! flow against the injected host bridge.

use crate::domain::payload::TicketPayload;
use crate::eventing::status::StatusMessage;
use crate::services::bridge::HostBridge;
use crate::state::ticket_state::TicketState;

/// Ticket page controller
pub struct TicketController<B: HostBridge> {
    state: TicketState,
    bridge: B,
}

impl<B: HostBridge> TicketController<B> {
    /// Create the controller for a fresh page load and signal the host
    pub fn new(bridge: B) -> Self {
        bridge.notify_ready();
        Self {
            state: TicketState::default(),
            bridge,
        }
    }

    /// Read access to the page state
    pub fn state(&self) -> &TicketState {
        &self.state
    }

    /// Mutable access for field edits
    pub fn state_mut(&mut self) -> &mut TicketState {
        &mut self.state
    }

    /// Quick-add an accessory tag; returns whether the field changed
    pub fn quick_add(&mut self, tag: &str) -> bool {
        self.state.quick_add_accessory(tag)
    }

    /// Validate, assemble and hand the ticket to the host.
    ///
    /// Returns whether the hand-off happened. Any validation failure aborts
    /// before the bridge call, leaves the draft untouched and surfaces a
    /// status message with the offending field as focus target.
    pub fn submit(&mut self) -> bool {
        if let Err(err) = self.state.draft.validate() {
            self.state.set_status(StatusMessage::from(&err));
            return false;
        }

        let payload = TicketPayload::from_draft(&self.state.draft);
        let json = match serde_json::to_string(&payload) {
            Ok(json) => json,
            Err(err) => {
                self.state.set_status(StatusMessage::error(err.to_string()));
                return false;
            }
        };

        if let Err(err) = self.bridge.submit(&json) {
            tracing::warn!(%err, "ticket hand-off failed");
            self.state.set_status(StatusMessage::error(err.to_string()));
            return false;
        }

        tracing::info!(phone = %payload.phone, "ticket submitted");
        self.state.set_status(StatusMessage::success("Ticket submitted"));
        self.bridge.dismiss();
        true
    }
}
