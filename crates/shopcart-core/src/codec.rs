//! # Record Codec
//!
//! The one wire format of the system: six fields joined by `/`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Purchase record                                                        │
//! │    code / name / value / price / quantity / shippingMethod              │
//! │    4/Knife Block Set/High/99.95/2/Delivery                              │
//! │                                                                         │
//! │  Search aggregate row                                                   │
//! │    code / name / value / price / quantity / cost                        │
//! │    16/Teapot/Low/29.95/5/158.745                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no escaping. Text fields must never contain `/`; the catalog
//! enforces this when it is loaded, which makes every record built from it
//! round-trip exactly.
//!
//! Decoding is all-or-nothing: a wrong field count or a field that does not
//! parse yields a `DecodeError` and no record.

use crate::error::DecodeError;
use crate::money::Money;
use crate::types::{PurchaseRecord, SearchAggregateRow};
use crate::RECORD_SEPARATOR;

/// Fields per wire line, for both record shapes.
pub const FIELD_COUNT: usize = 6;

// =============================================================================
// Purchase Records
// =============================================================================

/// Encodes a purchase as `code/name/value/price/quantity/shippingMethod`.
///
/// ```rust
/// use shopcart_core::codec::encode_purchase;
/// use shopcart_core::money::Money;
/// use shopcart_core::types::{Product, PurchaseRecord, ShippingMethod};
///
/// let knives = Product::new(4, "Knife Block Set", Money::from_cents(9995));
/// let record = PurchaseRecord::from_product(&knives, 2, ShippingMethod::Delivery);
/// assert_eq!(encode_purchase(&record), "4/Knife Block Set/High/99.95/2/Delivery");
/// ```
pub fn encode_purchase(record: &PurchaseRecord) -> String {
    join([
        record.code.to_string(),
        record.name.clone(),
        record.value_tier.to_string(),
        record.unit_price.to_plain_string(),
        record.quantity.to_string(),
        record.shipping_method.to_string(),
    ])
}

/// Decodes a purchase line back into a typed record.
pub fn decode_purchase(line: &str) -> Result<PurchaseRecord, DecodeError> {
    let [code, name, value, price, quantity, method] = split(line)?;

    Ok(PurchaseRecord {
        code: parse_integer("code", code)?,
        name: name.to_string(),
        value_tier: value.parse()?,
        unit_price: parse_amount("price", price)?,
        quantity: parse_integer("quantity", quantity)?,
        shipping_method: method.parse()?,
    })
}

// =============================================================================
// Search Aggregate Rows
// =============================================================================

/// Encodes a search row as `code/name/value/price/quantity/cost`.
///
/// The cost keeps its sub-cent digit when it has one.
pub fn encode_aggregate_row(row: &SearchAggregateRow) -> String {
    join([
        row.code.to_string(),
        row.name.clone(),
        row.value_tier.to_string(),
        row.unit_price.to_plain_string(),
        row.aggregated_quantity.to_string(),
        row.aggregated_cost.to_plain_string(),
    ])
}

/// Decodes a search row line.
pub fn decode_aggregate_row(line: &str) -> Result<SearchAggregateRow, DecodeError> {
    let [code, name, value, price, quantity, cost] = split(line)?;

    Ok(SearchAggregateRow {
        code: parse_integer("code", code)?,
        name: name.to_string(),
        value_tier: value.parse()?,
        unit_price: parse_amount("price", price)?,
        aggregated_quantity: parse_integer("quantity", quantity)?,
        aggregated_cost: parse_amount("cost", cost)?,
    })
}

// =============================================================================
// Helpers
// =============================================================================

fn join(fields: [String; FIELD_COUNT]) -> String {
    fields.join(RECORD_SEPARATOR)
}

fn split(line: &str) -> Result<[&str; FIELD_COUNT], DecodeError> {
    let parts: Vec<&str> = line.split(RECORD_SEPARATOR).collect();
    let found = parts.len();

    parts.try_into().map_err(|_| DecodeError::FieldCount {
        expected: FIELD_COUNT,
        found,
    })
}

fn parse_integer(field: &'static str, value: &str) -> Result<u32, DecodeError> {
    value.parse().map_err(|_| DecodeError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn parse_amount(field: &'static str, value: &str) -> Result<Money, DecodeError> {
    value.parse().map_err(|_| DecodeError::InvalidAmount {
        field,
        value: value.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
