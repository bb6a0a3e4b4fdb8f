//! # Configuration State
//!
//! Shell configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOP_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization.

use serde::{Deserialize, Serialize};
use shopcart_core::{Money, PricingPolicy, Rate};
use tracing::warn;

/// Largest accepted `SHOP_DELIVERY_MARKUP`, in percent.
pub const MAX_DELIVERY_MARKUP_PERCENT: f64 = 100.0;

/// Largest accepted `SHOP_HIGH_VALUE_SURCHARGE` ($100.00).
pub const MAX_HIGH_VALUE_SURCHARGE_CENTS: i64 = 10_000;

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// First line of the menu banner.
    pub store_name: String,

    /// Delivery markup in basis points.
    /// e.g., 1000 = 10%
    pub delivery_markup_bps: u32,

    /// Per-unit surcharge on delivered high-tier items.
    pub high_value_surcharge: Money,

    /// How listings and search results are printed.
    pub output: OutputFormat,
}

/// Output style for listings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width console table
    #[default]
    Table,

    /// Pretty-printed JSON document
    Json,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Banner: "Welcome!"
    /// - Delivery: 10% markup, $2.00 per high-value unit
    /// - Output: table
    fn default() -> Self {
        let pricing = PricingPolicy::default();
        ConfigState {
            store_name: "Welcome!".to_string(),
            delivery_markup_bps: pricing.delivery_markup.bps(),
            high_value_surcharge: pricing.high_value_surcharge,
            output: OutputFormat::Table,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOP_STORE_NAME`: banner text
    /// - `SHOP_DELIVERY_MARKUP`: delivery markup percentage, 0-100 (e.g., "10")
    /// - `SHOP_HIGH_VALUE_SURCHARGE`: per-unit surcharge in dollars, at most 100.00 (e.g., "2.00")
    /// - `SHOP_OUTPUT`: `table` or `json`
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] over an arbitrary variable source.
    ///
    /// Unparseable values are logged and the default is kept.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = var("SHOP_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(markup) = var("SHOP_DELIVERY_MARKUP") {
            match markup.trim().parse::<f64>() {
                Ok(pct) if (0.0..=MAX_DELIVERY_MARKUP_PERCENT).contains(&pct) => {
                    config.delivery_markup_bps = Rate::from_percentage(pct).bps();
                }
                Ok(pct) if pct > MAX_DELIVERY_MARKUP_PERCENT => warn!(
                    value = %markup,
                    max = MAX_DELIVERY_MARKUP_PERCENT,
                    "Ignoring SHOP_DELIVERY_MARKUP above maximum"
                ),
                _ => warn!(value = %markup, "Ignoring invalid SHOP_DELIVERY_MARKUP"),
            }
        }

        if let Some(surcharge) = var("SHOP_HIGH_VALUE_SURCHARGE") {
            match surcharge.trim().parse::<Money>() {
                Ok(amount) if amount <= Money::from_cents(MAX_HIGH_VALUE_SURCHARGE_CENTS) => {
                    config.high_value_surcharge = amount;
                }
                Ok(amount) => warn!(
                    value = %amount,
                    max = %Money::from_cents(MAX_HIGH_VALUE_SURCHARGE_CENTS),
                    "Ignoring SHOP_HIGH_VALUE_SURCHARGE above maximum"
                ),
                Err(e) => warn!(error = %e, "Ignoring invalid SHOP_HIGH_VALUE_SURCHARGE"),
            }
        }

        if let Some(output) = var("SHOP_OUTPUT") {
            match output.trim().to_ascii_lowercase().as_str() {
                "table" => config.output = OutputFormat::Table,
                "json" => config.output = OutputFormat::Json,
                _ => warn!(value = %output, "Ignoring invalid SHOP_OUTPUT"),
            }
        }

        config
    }

    /// Pricing policy handed to the session.
    pub fn pricing(&self) -> PricingPolicy {
        PricingPolicy {
            delivery_markup: Rate::from_bps(self.delivery_markup_bps),
            high_value_surcharge: self.high_value_surcharge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::{Catalog, Session};
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_core_pricing() {
        let config = ConfigState::from_vars(vars(&[]));
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.pricing(), PricingPolicy::default());
        assert_eq!(config.output, OutputFormat::Table);
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_vars(vars(&[
            ("SHOP_STORE_NAME", "Kitchen Corner"),
            ("SHOP_DELIVERY_MARKUP", "12.5"),
            ("SHOP_HIGH_VALUE_SURCHARGE", "3.50"),
            ("SHOP_OUTPUT", "JSON"),
        ]));

        assert_eq!(config.store_name, "Kitchen Corner");
        assert_eq!(config.delivery_markup_bps, 1250);
        assert_eq!(config.high_value_surcharge, Money::from_cents(350));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_overrides_keep_defaults() {
        let config = ConfigState::from_vars(vars(&[
            ("SHOP_DELIVERY_MARKUP", "ten"),
            ("SHOP_HIGH_VALUE_SURCHARGE", "-2"),
            ("SHOP_OUTPUT", "xml"),
        ]));

        assert_eq!(config, ConfigState::default());
    }

    #[test]
    fn test_oversized_overrides_keep_defaults() {
        let config = ConfigState::from_vars(vars(&[
            ("SHOP_DELIVERY_MARKUP", "1e12"),
            ("SHOP_HIGH_VALUE_SURCHARGE", "1000000000000000"),
        ]));
        assert_eq!(config, ConfigState::default());

        let mut session = Session::new(Catalog::standard().unwrap(), config.pricing());
        session.add_purchase(4, 49, "Delivery").unwrap();
        // 4897.55 + 10% + 49 × $2.00
        assert_eq!(session.total(), Money::from_mills(5_485_305));
    }

    #[test]
    fn test_overrides_at_the_limit_are_accepted() {
        let config = ConfigState::from_vars(vars(&[
            ("SHOP_DELIVERY_MARKUP", "100"),
            ("SHOP_HIGH_VALUE_SURCHARGE", "100.00"),
        ]));
        assert_eq!(config.delivery_markup_bps, 10_000);
        assert_eq!(config.high_value_surcharge, Money::from_cents(10_000));

        let mut session = Session::new(Catalog::standard().unwrap(), config.pricing());
        session.add_purchase(15, 49, "Delivery").unwrap();
        // 5632.55 × 2 + 49 × $100.00
        assert_eq!(session.total(), Money::from_mills(16_165_100));
    }
}
