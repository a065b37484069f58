//! Payload - Submitted Wire Shapes
//!
//! The JSON objects handed to the host bridge. Field names and order are a
//! compatibility contract with the operator bot; the `app_origin` tag is how
//! the bot dispatches incoming data.

use serde::{Deserialize, Serialize};

use crate::constants::{ORIGIN_CALCULATOR, ORIGIN_TICKET};
use crate::domain::ledger::Ledger;
use crate::domain::ticket::TicketDraft;

/// Payload of the ticket intake form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketPayload {
    /// Validated contact phone
    pub phone: String,
    /// Assembled descriptive blob
    pub description: String,
    /// Origin tag, always `ticket_app`
    pub app_origin: String,
}

impl TicketPayload {
    /// Build the payload from a validated draft
    pub fn from_draft(draft: &TicketDraft) -> Self {
        Self {
            phone: draft.phone.trim().to_string(),
            description: draft.description(),
            app_origin: ORIGIN_TICKET.to_string(),
        }
    }
}

/// One priced entry on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    /// Session-unique item id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Price in whole currency units
    pub price: f64,
}

/// Payload of the calculator form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorPayload {
    /// Items in insertion order
    pub items: Vec<ItemPayload>,
    /// Sum of all item prices
    pub total: f64,
    /// Origin tag, always `calculator_app`
    pub app_origin: String,
}

impl CalculatorPayload {
    /// Build the payload from a non-empty ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            items: ledger
                .items()
                .iter()
                .map(|item| ItemPayload {
                    id: item.id,
                    name: item.name.clone(),
                    price: cents_to_units(item.price_cents),
                })
                .collect(),
            total: cents_to_units(ledger.total_cents()),
            app_origin: ORIGIN_CALCULATOR.to_string(),
        }
    }
}

/// Convert integer cents to the wire's whole-unit number.
///
/// Two-decimal currency values survive the f64 round trip; serde_json prints
/// the shortest representation that parses back exactly.
pub fn cents_to_units(cents: i64) -> f64 {
    cents as f64 / 100.0
}
