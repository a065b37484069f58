//! Status - Page Status Message Model
//!
//! Each page has a single status-message area. Validation failures also carry
//! the field that should receive focus; the focus redirection is a usability
//! contract owed to the page, not a correctness one.

use std::fmt;

use crate::error::ValidationError;

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

impl StatusLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::Info => "INFO",
            StatusLevel::Success => "OK",
            StatusLevel::Error => "ERROR",
        }
    }
}

/// An input field a status message can point focus at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Phone,
    Device,
    Issue,
    Accessories,
    ItemName,
    ItemPrice,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Phone => "phone",
            FormField::Device => "device",
            FormField::Issue => "issue",
            FormField::Accessories => "accessories",
            FormField::ItemName => "item name",
            FormField::ItemPrice => "item price",
        };
        f.write_str(name)
    }
}

/// A message for the page's status area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
    /// Field to redirect input focus to, if any
    pub focus: Option<FormField>,
}

impl StatusMessage {
    /// Create an info message
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
            focus: None,
        }
    }

    /// Create a success message
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
            focus: None,
        }
    }

    /// Create an error message without a focus target
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
            focus: None,
        }
    }
}

impl From<&ValidationError> for StatusMessage {
    fn from(err: &ValidationError) -> Self {
        Self {
            level: StatusLevel::Error,
            text: err.to_string(),
            focus: Some(err.focus()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_focus() {
        let err = ValidationError::RequiredField {
            field: FormField::Phone,
        };
        let msg = StatusMessage::from(&err);
        assert_eq!(msg.level, StatusLevel::Error);
        assert_eq!(msg.focus, Some(FormField::Phone));
        assert!(msg.text.contains("phone"));
    }

    #[test]
    fn test_price_error_focuses_price_input() {
        let err = ValidationError::InvalidPrice {
            input: "abc".to_string(),
        };
        assert_eq!(StatusMessage::from(&err).focus, Some(FormField::ItemPrice));
    }
}
