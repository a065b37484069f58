//! VTI Hub Mini-App Core
//!
//! This crate provides the form logic for the VTI service-desk mini-apps that
//! run inside the chat platform's embedded webview: the ticket intake form and
//! the priced line-item calculator. Rendering and the real platform bridge
//! live outside; this crate owns validation, aggregation, payload assembly and
//! the bridge seam.

pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod services;
pub mod state;
pub mod utils;

pub use error::{Error, Result, ValidationError};
