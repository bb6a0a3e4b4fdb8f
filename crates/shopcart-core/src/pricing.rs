//! # Pricing Engine
//!
//! Line costs and totals, including the delivery surcharges.
//!
//! ## Line Cost Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base = unit_price × quantity                                           │
//! │     │                                                                   │
//! │     ├── Pick-up ──────────────────────────────────────► base            │
//! │     │                                                                   │
//! │     └── Delivery ──► base × 1.10                                        │
//! │                        │                                                │
//! │                        ├── Low tier ──────────────────► base × 1.10     │
//! │                        │                                                │
//! │                        └── High tier ─► + $2.00 × qty ► base × 1.10 + 2q│
//! │                                                                         │
//! │  Knife Block Set $99.95 × 2, Delivery:                                  │
//! │    199.90 → 219.89 → 223.89                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All amounts stay in exact mills; rounding to cents happens only when a
//! `Money` is displayed.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{PurchaseRecord, Rate, ShippingMethod, ValueTier};
use crate::{DEFAULT_DELIVERY_MARKUP_BPS, DEFAULT_HIGH_VALUE_SURCHARGE_CENTS};

/// Surcharge parameters applied to delivery orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    /// Markup on the whole line for delivery (10%).
    pub delivery_markup: Rate,

    /// Flat per-unit amount added to delivered high-tier lines ($2.00).
    pub high_value_surcharge: Money,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            delivery_markup: Rate::from_bps(DEFAULT_DELIVERY_MARKUP_BPS),
            high_value_surcharge: Money::from_cents(DEFAULT_HIGH_VALUE_SURCHARGE_CENTS),
        }
    }
}

impl PricingPolicy {
    /// Cost of one record, surcharges included.
    ///
    /// Uses the record's own frozen tier and shipping method.
    pub fn line_cost(&self, record: &PurchaseRecord) -> Money {
        let base = record.unit_price * record.quantity;

        match (record.shipping_method, record.value_tier) {
            (ShippingMethod::PickUp, _) => base,
            (ShippingMethod::Delivery, ValueTier::Low) => base.apply_markup(self.delivery_markup),
            (ShippingMethod::Delivery, ValueTier::High) => {
                base.apply_markup(self.delivery_markup)
                    + self.high_value_surcharge * record.quantity
            }
        }
    }

    /// Sum of line costs; zero for no records.
    pub fn total<'a, I>(&self, records: I) -> Money
    where
        I: IntoIterator<Item = &'a PurchaseRecord>,
    {
        records.into_iter().map(|r| self.line_cost(r)).sum()
    }
}

/// [`PricingPolicy::line_cost`] under the default policy.
pub fn line_cost(record: &PurchaseRecord) -> Money {
    PricingPolicy::default().line_cost(record)
}

/// [`PricingPolicy::total`] under the default policy.
pub fn total<'a, I>(records: I) -> Money
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    PricingPolicy::default().total(records)
}

// =============================================================================
// Unit Tests
// =============================================================================
