//! State - Per-Page Form State
//!
//! Explicit state objects owned by the page controllers. No ambient globals;
//! each page load starts from an empty model and discards it with the session.

pub mod calculator_state;
pub mod ticket_state;
