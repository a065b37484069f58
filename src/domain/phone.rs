//! Phone - Contact Number Validation
//!
//! The service desk accepts exactly two shapes: a leading `8` followed by ten
//! digits, or `+7` followed by ten digits. Nothing else, anywhere.

use crate::error::ValidationError;
use crate::eventing::status::FormField;

/// Validate a user-typed phone number.
///
/// Empty input (after trimming) is reported as a missing required field, not
/// as a format failure, so the two messages stay distinguishable on the page.
pub fn validate_phone(input: &str) -> Result<(), ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField {
            field: FormField::Phone,
        });
    }

    let rest = trimmed
        .strip_prefix("+7")
        .or_else(|| trimmed.strip_prefix('8'));

    match rest {
        Some(digits) if digits.len() == 10 && digits.bytes().all(|b| b.is_ascii_digit()) => Ok(()),
        _ => Err(ValidationError::PhoneFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_both_shapes() {
        assert_eq!(validate_phone("89991234567"), Ok(()));
        assert_eq!(validate_phone("+79991234567"), Ok(()));
        assert_eq!(validate_phone("  89991234567  "), Ok(()));
    }

    #[test]
    fn test_empty_is_required_field() {
        assert_eq!(
            validate_phone("   "),
            Err(ValidationError::RequiredField {
                field: FormField::Phone
            })
        );
    }

    #[test]
    fn test_rejects_other_shapes() {
        for bad in [
            "79991234567",    // bare 7 prefix
            "8999123456",     // too short
            "899912345678",   // too long
            "+7999123456",    // too short after +7
            "8 999 123 4567", // spaces inside
            "8999123456a",    // trailing letter
            "+89991234567",   // plus with 8
            "8-999-123-45-67",
        ] {
            assert_eq!(validate_phone(bad), Err(ValidationError::PhoneFormat), "{bad}");
        }
    }
}
