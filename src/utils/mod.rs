//! Utils - Formatting and Local Configuration

pub mod config_store;
pub mod format;
