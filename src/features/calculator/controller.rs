//! Calculator Controller
//!
//! Owns the ledger and pending inputs, and drives add/remove/total plus the
//! submission hand-off against the injected host bridge.

use std::path::Path;

use crate::domain::payload::CalculatorPayload;
use crate::error::ValidationError;
use crate::eventing::status::StatusMessage;
use crate::services::bridge::HostBridge;
use crate::services::suggestions;
use crate::state::calculator_state::CalculatorState;
use crate::utils::format::format_cents;

/// Calculator page controller
pub struct CalculatorController<B: HostBridge> {
    state: CalculatorState,
    bridge: B,
}

impl<B: HostBridge> CalculatorController<B> {
    /// Create the controller for a fresh page load and signal the host.
    ///
    /// The suggestion resource, when configured, is loaded here once; failure
    /// only logs a warning and the page runs without suggestions.
    pub fn new(bridge: B, suggestions_file: Option<&Path>) -> Self {
        bridge.notify_ready();
        let mut state = CalculatorState::default();
        if let Some(path) = suggestions_file {
            state.suggestions = suggestions::load_or_empty(path);
        }
        Self { state, bridge }
    }

    /// Read access to the page state
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Mutable access for input edits
    pub fn state_mut(&mut self) -> &mut CalculatorState {
        &mut self.state
    }

    /// Running total in cents
    pub fn total_cents(&self) -> i64 {
        self.state.ledger.total_cents()
    }

    /// Append an item from the pending inputs.
    ///
    /// On success the inputs are cleared and the status shows the new running
    /// total; on failure the inputs and ledger are untouched and the status
    /// points at the offending input.
    pub fn add_item(&mut self) -> bool {
        let name = self.state.name_input.clone();
        let price = self.state.price_input.clone();
        match self.state.ledger.add_item(&name, &price) {
            Ok(item) => {
                tracing::debug!(id = item.id, name = %item.name, "item added");
                self.state.clear_inputs();
                let total = format_cents(self.state.ledger.total_cents());
                self.state
                    .set_status(StatusMessage::info(format!("Total: {total}")));
                true
            }
            Err(err) => {
                self.state.set_status(StatusMessage::from(&err));
                false
            }
        }
    }

    /// Remove an item by id; an absent id is a benign no-op
    pub fn remove_item(&mut self, id: u64) -> bool {
        let removed = self.state.ledger.remove_item(id);
        if removed {
            let total = format_cents(self.state.ledger.total_cents());
            self.state
                .set_status(StatusMessage::info(format!("Total: {total}")));
        }
        removed
    }

    /// Serialize the ledger and hand it to the host.
    ///
    /// An empty ledger is a validation error, reported before any bridge call.
    pub fn submit(&mut self) -> bool {
        if self.state.ledger.is_empty() {
            self.state
                .set_status(StatusMessage::from(&ValidationError::EmptyLedger));
            return false;
        }

        let payload = CalculatorPayload::from_ledger(&self.state.ledger);
        let json = match serde_json::to_string(&payload) {
            Ok(json) => json,
            Err(err) => {
                self.state.set_status(StatusMessage::error(err.to_string()));
                return false;
            }
        };

        if let Err(err) = self.bridge.submit(&json) {
            tracing::warn!(%err, "calculation hand-off failed");
            self.state.set_status(StatusMessage::error(err.to_string()));
            return false;
        }

        tracing::info!(items = payload.items.len(), total = payload.total, "calculation submitted");
        self.state
            .set_status(StatusMessage::success("Calculation submitted"));
        self.bridge.dismiss();
        true
    }
}
