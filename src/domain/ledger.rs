//! Ledger - Priced Line Items for One Session
//!
//! The calculator page's only stateful model: an insertion-ordered collection
//! of named, priced entries. Prices are held as integer cents so totals stay
//! exact regardless of how many items come and go; floats appear only at the
//! wire boundary (see `domain::payload`).

use chrono::Utc;

use crate::constants::PRICE_MAX_FRACTION_DIGITS;
use crate::error::ValidationError;

/// A single named, priced entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Opaque token, unique within the ledger for its lifetime
    pub id: u64,
    /// Display name, non-empty after trimming
    pub name: String,
    /// Price in integer cents, never negative
    pub price_cents: i64,
}

/// Insertion-ordered collection of line items.
///
/// Duplicate names with distinct ids are permitted; there is no implicit
/// sorting or deduplication. The ledger starts empty and is discarded with
/// the session.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    items: Vec<LineItem>,
    last_id: u64,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the inputs and append a new item to the end of the sequence.
    ///
    /// `name` must be non-empty after trimming; `price_text` must parse to a
    /// non-negative decimal with at most two fractional digits. On failure the
    /// ledger is unchanged.
    pub fn add_item(
        &mut self,
        name: &str,
        price_text: &str,
    ) -> Result<&LineItem, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let price_cents = parse_price_cents(price_text)?;

        let id = self.next_id();
        self.items.push(LineItem {
            id,
            name: name.to_string(),
            price_cents,
        });
        // Just pushed, the vector cannot be empty here.
        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove the item with the matching id.
    ///
    /// Returns whether a removal occurred. An absent id is a benign no-op:
    /// the caller's reference may already be stale after an earlier removal
    /// in the same session.
    pub fn remove_item(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Exact sum of all current item prices, in cents
    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(|item| item.price_cents).sum()
    }

    /// Read-only view of the items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop all items, keeping the id watermark so ids never repeat
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Next item id: millisecond clock, bumped whenever the clock has not
    /// advanced past the previous id. Strictly monotonic within a session.
    fn next_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

/// Parse a user-typed price into integer cents.
///
/// Accepts plain decimals like `25`, `25.5`, `.5` or `25.` with at most two
/// fractional digits. Anything else, including negatives and overflow, is
/// `InvalidPrice`.
pub fn parse_price_cents(input: &str) -> Result<i64, ValidationError> {
    let trimmed = input.trim();
    let invalid = || ValidationError::InvalidPrice {
        input: input.to_string(),
    };

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if fraction.len() > PRICE_MAX_FRACTION_DIGITS {
        return Err(invalid());
    }

    let whole_units: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let mut fraction_cents: i64 = if fraction.is_empty() {
        0
    } else {
        fraction.parse().map_err(|_| invalid())?
    };
    if fraction.len() == 1 {
        fraction_cents *= 10;
    }

    whole_units
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(fraction_cents))
        .ok_or_else(invalid)
}
