//! Ticket - Service Ticket Intake Page

pub mod controller;

pub use controller::TicketController;
