//! Dispatch - Operator-Side Payload Processing
//!
//! The bot behind the bridge receives the raw JSON text a page submitted,
//! routes it on the `app_origin` tag, and replies with a human-readable
//! confirmation in the chat. The confirmation carries the submitter and a
//! Europe/Moscow timestamp, the service desk's local time.

use chrono::{DateTime, Utc};
use chrono_tz::Europe::Moscow;

use crate::constants::{ORIGIN_CALCULATOR, ORIGIN_TICKET};
use crate::domain::payload::{CalculatorPayload, TicketPayload};
use crate::error::{Error, Result};
use crate::utils::format::format_units;

/// A submission routed by its origin tag
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Ticket(TicketPayload),
    Calculator(CalculatorPayload),
}

/// Parse raw bridge data and dispatch on `app_origin`.
///
/// An unknown or missing tag is an error carrying the offending value, so the
/// caller can tell the user the data could not be routed.
pub fn parse_submission(raw: &str) -> Result<Submission> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let origin = value
        .get("app_origin")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    match origin.as_str() {
        ORIGIN_TICKET => Ok(Submission::Ticket(serde_json::from_value(value)?)),
        ORIGIN_CALCULATOR => Ok(Submission::Calculator(serde_json::from_value(value)?)),
        _ => {
            tracing::warn!(origin = %origin, "received data from unknown app_origin");
            Err(Error::UnknownOrigin { origin })
        }
    }
}

/// Format the timestamp shown in confirmations: service-desk local time
pub fn moscow_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Moscow)
        .format("%Y-%m-%d %H:%M:%S %Z")
        .to_string()
}

/// Render the chat confirmation for a routed submission
pub fn confirmation_message(submission: &Submission, submitted_by: &str, at: DateTime<Utc>) -> String {
    let time = moscow_timestamp(at);
    match submission {
        Submission::Ticket(ticket) => format!(
            "✅ Ticket created!\n\n\
             👤 Submitted by: {submitted_by}\n\
             🕒 Time: {time}\n\
             --- Job Details ---\n\
             📞 Phone: {}\n\
             📝 Description: {}",
            ticket.phone, ticket.description
        ),
        Submission::Calculator(calc) => {
            let mut lines = format!(
                "🧾 New calculation!\n\n\
                 👤 Submitted by: {submitted_by}\n\
                 🕒 Time: {time}\n\
                 --- Items ---"
            );
            for item in &calc.items {
                lines.push_str(&format!("\n• {} — {}", item.name, format_units(item.price)));
            }
            lines.push_str(&format!("\n\n💰 Total: {}", format_units(calc.total)));
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_dispatches_ticket_payload() {
        let raw = r#"{"phone":"89991234567","description":"d. i. Без комплектации","app_origin":"ticket_app"}"#;
        match parse_submission(raw).expect("parse") {
            Submission::Ticket(ticket) => {
                assert_eq!(ticket.phone, "89991234567");
            }
            other => panic!("wrong route: {other:?}"),
        }
    }

    #[test]
    fn test_dispatches_calculator_payload() {
        let raw = r#"{"items":[{"id":1,"name":"Mouse","price":25.5}],"total":25.5,"app_origin":"calculator_app"}"#;
        match parse_submission(raw).expect("parse") {
            Submission::Calculator(calc) => {
                assert_eq!(calc.items.len(), 1);
                assert_eq!(calc.total, 25.5);
            }
            other => panic!("wrong route: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_origin_is_an_error() {
        let raw = r#"{"app_origin":"print_job"}"#;
        assert!(matches!(
            parse_submission(raw),
            Err(Error::UnknownOrigin { origin }) if origin == "print_job"
        ));
        assert!(matches!(
            parse_submission(r#"{"phone":"8"}"#),
            Err(Error::UnknownOrigin { origin }) if origin.is_empty()
        ));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(parse_submission("not json"), Err(Error::Json { .. })));
    }

    #[test]
    fn test_moscow_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2026, 8, 29, 9, 30, 0).single().expect("valid time");
        assert_eq!(moscow_timestamp(at), "2026-08-29 12:30:00 MSK");
    }

    #[test]
    fn test_ticket_confirmation_contents() {
        let ticket = TicketPayload {
            phone: "89991234567".to_string(),
            description: "Lenovo IdeaPad 5. won't charge. Без комплектации".to_string(),
            app_origin: "ticket_app".to_string(),
        };
        let at = Utc.with_ymd_and_hms(2026, 8, 29, 9, 30, 0).single().expect("valid time");
        let message = confirmation_message(&Submission::Ticket(ticket), "@vasya", at);
        assert!(message.contains("👤 Submitted by: @vasya"));
        assert!(message.contains("🕒 Time: 2026-08-29 12:30:00 MSK"));
        assert!(message.contains("📞 Phone: 89991234567"));
        assert!(message.contains("Без комплектации"));
    }

    #[test]
    fn test_calculator_confirmation_lists_items_and_total() {
        let raw = r#"{"items":[{"id":1,"name":"Mouse","price":25.5},{"id":2,"name":"Cable","price":10.0}],"total":35.5,"app_origin":"calculator_app"}"#;
        let submission = parse_submission(raw).expect("parse");
        let at = Utc.with_ymd_and_hms(2026, 8, 29, 9, 30, 0).single().expect("valid time");
        let message = confirmation_message(&submission, "Petya", at);
        assert!(message.contains("• Mouse — 25.50"));
        assert!(message.contains("• Cable — 10.00"));
        assert!(message.contains("💰 Total: 35.50"));
    }
}
