//! TicketDraft - Service Ticket Intake Form
//!
//! A flat record of independently validated text fields. The only structure
//! is the concatenation order at submission time.

use crate::constants::{NO_ACCESSORIES_PLACEHOLDER, SECTION_SEPARATOR};
use crate::domain::phone::validate_phone;
use crate::error::ValidationError;
use crate::eventing::status::FormField;

/// The ticket form's collected fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketDraft {
    /// Contact phone, see `domain::phone`
    pub phone: String,
    /// Device make and model
    pub device: String,
    /// Free-text issue description
    pub issue: String,
    /// Optional comma-separated accessory tags
    pub accessories: String,
}

impl TicketDraft {
    /// Validate all fields, reporting the first failure with its focus target.
    ///
    /// Field order matches the page layout: phone, device, issue. Accessories
    /// are optional and never fail validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_phone(&self.phone)?;
        if self.device.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: FormField::Device,
            });
        }
        if self.issue.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: FormField::Issue,
            });
        }
        Ok(())
    }

    /// Assemble the descriptive blob handed to the operator: device and issue
    /// joined by `". "`, then the accessories text or the literal placeholder
    /// when none were listed.
    pub fn description(&self) -> String {
        let accessories = self.accessories.trim();
        let accessories = if accessories.is_empty() {
            NO_ACCESSORIES_PLACEHOLDER
        } else {
            accessories
        };

        [self.device.trim(), self.issue.trim(), accessories].join(SECTION_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TicketDraft {
        TicketDraft {
            phone: "89991234567".to_string(),
            device: "Lenovo IdeaPad 5".to_string(),
            issue: "won't charge".to_string(),
            accessories: String::new(),
        }
    }

    #[test]
    fn test_description_uses_placeholder_without_accessories() {
        assert_eq!(
            draft().description(),
            "Lenovo IdeaPad 5. won't charge. Без комплектации"
        );
    }

    #[test]
    fn test_description_with_accessories() {
        let mut d = draft();
        d.accessories = "Зарядка, Сумка".to_string();
        assert_eq!(
            d.description(),
            "Lenovo IdeaPad 5. won't charge. Зарядка, Сумка"
        );
    }

    #[test]
    fn test_validation_order_and_focus() {
        let mut d = draft();
        d.phone = "12345".to_string();
        assert_eq!(d.validate(), Err(ValidationError::PhoneFormat));

        let mut d = draft();
        d.device = "  ".to_string();
        assert_eq!(
            d.validate(),
            Err(ValidationError::RequiredField {
                field: FormField::Device
            })
        );

        let mut d = draft();
        d.issue = String::new();
        assert_eq!(
            d.validate(),
            Err(ValidationError::RequiredField {
                field: FormField::Issue
            })
        );

        assert_eq!(draft().validate(), Ok(()));
    }
}
