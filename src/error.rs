//! Error types for the VTI Hub mini-apps
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

use crate::eventing::status::FormField;

/// Infrastructure error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// IO error (suggestion resource, config files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Host bridge is absent (page opened outside the chat platform)
    #[snafu(display("Host bridge unavailable"))]
    HostUnavailable,

    /// Submitted payload carries an unknown or missing app_origin tag
    #[snafu(display("Unknown app origin: {origin}"))]
    UnknownOrigin { origin: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Form validation failure, always tied to an offending field so the page can
/// redirect focus to it
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ValidationError {
    /// A required field is empty after trimming
    #[snafu(display("Required field is empty: {field}"))]
    RequiredField { field: FormField },

    /// Phone does not match either accepted shape (8 + 10 digits, +7 + 10 digits)
    #[snafu(display("Phone number must look like 8XXXXXXXXXX or +7XXXXXXXXXX"))]
    PhoneFormat,

    /// Line-item name is empty after trimming
    #[snafu(display("Item name must not be empty"))]
    EmptyName,

    /// Line-item price is not a finite non-negative decimal
    #[snafu(display("Invalid price: {input:?}"))]
    InvalidPrice { input: String },

    /// Calculator submitted with no items
    #[snafu(display("Ledger is empty, add at least one item"))]
    EmptyLedger,
}

impl ValidationError {
    /// The field that should receive focus after this failure.
    pub fn focus(&self) -> FormField {
        match self {
            ValidationError::RequiredField { field } => *field,
            ValidationError::PhoneFormat => FormField::Phone,
            ValidationError::EmptyName => FormField::ItemName,
            ValidationError::InvalidPrice { .. } => FormField::ItemPrice,
            ValidationError::EmptyLedger => FormField::ItemName,
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
