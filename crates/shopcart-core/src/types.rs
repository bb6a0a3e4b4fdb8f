//! # Domain Types
//!
//! Core domain types used throughout shopcart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌──────────────────┐  │
//! │  │    Product      │   │   PurchaseRecord    │   │ SearchAggregate  │  │
//! │  │  ─────────────  │   │  ─────────────────  │   │       Row        │  │
//! │  │  code           │──►│  code               │──►│  code            │  │
//! │  │  name           │   │  name      (frozen) │   │  name            │  │
//! │  │  unit_price     │   │  value_tier(frozen) │   │  value_tier      │  │
//! │  └─────────────────┘   │  unit_price(frozen) │   │  unit_price      │  │
//! │                        │  quantity           │   │  aggregated_qty  │  │
//! │                        │  shipping_method    │   │  aggregated_cost │  │
//! │                        └─────────────────────┘   └──────────────────┘  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Rate       │   │   ValueTier     │   │ ShippingMethod  │       │
//! │  │  bps (u32)      │   │  High (≥ $30)   │   │  Pick-up        │       │
//! │  │  1000 = 10%     │   │  Low            │   │  Delivery       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A purchase record copies name, price and tier from the product at the
//! moment it is created. Nothing is recomputed later.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;
use crate::money::Money;
use crate::HIGH_VALUE_THRESHOLD_CENTS;

// =============================================================================
// Rate
// =============================================================================

/// Percentage rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a percentage (for configuration input).
    pub fn from_percentage(pct: f64) -> Self {
        Rate((pct * 100.0).round() as u32)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog code, 0-39.
    pub code: u32,

    /// Display name. Never contains the record separator.
    pub name: String,

    /// Price per unit.
    pub unit_price: Money,
}

impl Product {
    pub fn new(code: u32, name: impl Into<String>, unit_price: Money) -> Self {
        Product {
            code,
            name: name.into(),
            unit_price,
        }
    }

    /// Tier this product would be recorded under today.
    #[inline]
    pub fn value_tier(&self) -> ValueTier {
        ValueTier::classify(self.unit_price)
    }
}

// =============================================================================
// Value Tier
// =============================================================================

/// High/Low classification by unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueTier {
    /// Unit price of $30.00 or more.
    High,
    Low,
}

impl ValueTier {
    /// `High` iff `unit_price >= $30.00`.
    ///
    /// ```rust
    /// use shopcart_core::money::Money;
    /// use shopcart_core::types::ValueTier;
    ///
    /// assert_eq!(ValueTier::classify(Money::from_cents(3000)), ValueTier::High);
    /// assert_eq!(ValueTier::classify(Money::from_cents(2995)), ValueTier::Low);
    /// ```
    pub fn classify(unit_price: Money) -> Self {
        if unit_price >= Money::from_cents(HIGH_VALUE_THRESHOLD_CENTS) {
            ValueTier::High
        } else {
            ValueTier::Low
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueTier::High => "High",
            ValueTier::Low => "Low",
        }
    }
}

impl fmt::Display for ValueTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueTier {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(ValueTier::High),
            "Low" => Ok(ValueTier::Low),
            other => Err(DecodeError::InvalidValueTier(other.to_string())),
        }
    }
}

// =============================================================================
// Shipping Method
// =============================================================================

/// How the customer receives the goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingMethod {
    #[serde(rename = "Pick-up")]
    PickUp,
    /// Attracts the delivery markup and, for high-value items, the surcharge.
    Delivery,
}

impl ShippingMethod {
    /// Every accepted label, in prompt order.
    pub const LABELS: [&'static str; 2] = ["Pick-up", "Delivery"];

    /// Exact, case-sensitive label match.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Pick-up" => Some(ShippingMethod::PickUp),
            "Delivery" => Some(ShippingMethod::Delivery),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::PickUp => "Pick-up",
            ShippingMethod::Delivery => "Delivery",
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingMethod {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShippingMethod::from_label(s)
            .ok_or_else(|| DecodeError::InvalidShippingMethod(s.to_string()))
    }
}

// =============================================================================
// Purchase Record
// =============================================================================

/// One line item added to the session.
///
/// Wire form: `code/name/value/price/quantity/shippingMethod`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub code: u32,
    /// Product name at time of adding (frozen).
    pub name: String,
    /// Tier at time of adding (frozen).
    pub value_tier: ValueTier,
    /// Unit price at time of adding (frozen).
    pub unit_price: Money,
    pub quantity: u32,
    pub shipping_method: ShippingMethod,
}

impl PurchaseRecord {
    /// Snapshots a product into a new record.
    pub fn from_product(product: &Product, quantity: u32, shipping_method: ShippingMethod) -> Self {
        PurchaseRecord {
            code: product.code,
            name: product.name.clone(),
            value_tier: product.value_tier(),
            unit_price: product.unit_price,
            quantity,
            shipping_method,
        }
    }
}

// =============================================================================
// Search Aggregate Row
// =============================================================================

/// All matching records of one product code, folded together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAggregateRow {
    pub code: u32,
    pub name: String,
    pub value_tier: ValueTier,
    pub unit_price: Money,
    pub aggregated_quantity: u32,
    pub aggregated_cost: Money,
}

impl SearchAggregateRow {
    /// Empty row carrying the descriptive fields of its first match.
    pub fn seed(record: &PurchaseRecord) -> Self {
        SearchAggregateRow {
            code: record.code,
            name: record.name.clone(),
            value_tier: record.value_tier,
            unit_price: record.unit_price,
            aggregated_quantity: 0,
            aggregated_cost: Money::zero(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
