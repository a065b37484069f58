//! Domain - Pure Data Structures and Wire Types
//!
//! These types don't depend on any page plumbing and represent the business
//! domain of the mini-apps.

pub mod config;
pub mod ledger;
pub mod payload;
pub mod phone;
pub mod ticket;
