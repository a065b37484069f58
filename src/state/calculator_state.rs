//! CalculatorState - Calculator Form State

use crate::domain::ledger::Ledger;
use crate::eventing::status::StatusMessage;

/// State for the line-item calculator page
#[derive(Debug, Clone, Default)]
pub struct CalculatorState {
    /// The session's line items
    pub ledger: Ledger,
    /// Pending item-name input
    pub name_input: String,
    /// Pending price input
    pub price_input: String,
    /// Item-name suggestions for the input's datalist
    pub suggestions: Vec<String>,
    /// Current content of the status-message area
    pub status: Option<StatusMessage>,
}

impl CalculatorState {
    /// Clear the pending inputs after a successful add
    pub fn clear_inputs(&mut self) {
        self.name_input.clear();
        self.price_input.clear();
    }

    /// Replace the status message
    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }
}
