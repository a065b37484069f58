//! Eventing - Page Status Events

pub mod status;
