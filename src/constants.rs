//! Wire and Form Constants
//!
//! Centralized constants shared by the page controllers and the payload
//! assembler. The string literals are part of the wire contract with the
//! operator bot and must not change.

/// Origin tag of the ticket intake form
pub const ORIGIN_TICKET: &str = "ticket_app";

/// Origin tag of the line-item calculator
pub const ORIGIN_CALCULATOR: &str = "calculator_app";

/// Separator between sections of the assembled ticket description
pub const SECTION_SEPARATOR: &str = ". ";

/// Placeholder substituted when the accessories field is empty
pub const NO_ACCESSORIES_PLACEHOLDER: &str = "Без комплектации";

/// Separator inserted before a quick-added tag in a non-empty field
pub const TAG_SEPARATOR: &str = ", ";

/// Quick-add accessory labels offered by default on the ticket form
pub const DEFAULT_QUICK_ADD_TAGS: [&str; 3] = ["Зарядка", "Сумка", "Мышь"];

/// Maximum fractional digits accepted in a price input
pub const PRICE_MAX_FRACTION_DIGITS: usize = 2;
