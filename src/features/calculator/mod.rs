//! Calculator - Priced Line-Item Page

pub mod controller;

pub use controller::CalculatorController;
