//! Format - Display Formatting Utilities
//!
//! Totals are held in integer cents; these helpers produce the two-decimal
//! strings the pages and confirmations show. Display rounding only, the
//! stored values stay exact.

/// Format integer cents as a two-decimal amount, e.g. `3550` -> `"35.50"`
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// Format a wire-side whole-unit amount with two decimals
pub fn format_units(units: f64) -> String {
    format!("{units:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(3550), "35.50");
        assert_eq!(format_cents(1000), "10.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-150), "-1.50");
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(25.5), "25.50");
        assert_eq!(format_units(10.0), "10.00");
    }
}
