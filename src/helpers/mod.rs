//! Helpers - Small Shared Utilities

pub mod string;
