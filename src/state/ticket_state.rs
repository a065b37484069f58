//! TicketState - Ticket Form State

use crate::domain::ticket::TicketDraft;
use crate::eventing::status::StatusMessage;
use crate::helpers::string::append_tag_if_absent;

/// State for the ticket intake page
#[derive(Debug, Clone, Default)]
pub struct TicketState {
    /// The collected form fields
    pub draft: TicketDraft,
    /// Current content of the status-message area
    pub status: Option<StatusMessage>,
}

impl TicketState {
    /// Quick-add an accessory tag into the free-text field.
    ///
    /// Returns whether the field changed; a duplicate (case-insensitive,
    /// trimmed) leaves exactly one occurrence behind.
    pub fn quick_add_accessory(&mut self, tag: &str) -> bool {
        let updated = append_tag_if_absent(&self.draft.accessories, tag);
        if updated == self.draft.accessories {
            false
        } else {
            self.draft.accessories = updated;
            true
        }
    }

    /// Replace the status message
    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_add_appends_once() {
        let mut state = TicketState::default();
        assert!(state.quick_add_accessory("Зарядка"));
        assert!(state.quick_add_accessory("Сумка"));
        assert!(!state.quick_add_accessory("зарядка"));
        assert_eq!(state.draft.accessories, "Зарядка, Сумка");
    }
}
