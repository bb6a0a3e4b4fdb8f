//! # shopcart-core: Pure Business Logic for the Shopping Record Keeper
//!
//! All catalog, pricing, encoding and search rules live here as pure code
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/cli (interactive shell)                   │   │
//! │  │    Menu ──► Add Record ──► Search Record ──► Tables            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ already-parsed primitives             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shopcart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌────────────────┐   │   │
//! │  │   │ catalog │─►│  codec  │  │ pricing  │  │   validation   │   │   │
//! │  │   └─────────┘  └────┬────┘  └────┬─────┘  └────────────────┘   │   │
//! │  │                     ▼            ▼                              │   │
//! │  │                ┌─────────┐  ┌──────────┐                        │   │
//! │  │                │  store  │─►│  search  │   all behind Session   │   │
//! │  │                └─────────┘  └──────────┘                        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING SINKS • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, PurchaseRecord, SearchAggregateRow)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed product table
//! - [`codec`] - The `/`-delimited wire format
//! - [`validation`] - Code, quantity and shipping method rules
//! - [`pricing`] - Line costs, delivery surcharges, totals
//! - [`store`] - Append-only session records
//! - [`search`] - Keyword search with per-product aggregation
//! - [`session`] - The facade the shell calls
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::Session;
//!
//! let mut session = Session::standard().unwrap();
//! session.add_purchase(4, 2, "Delivery").unwrap();   // Knife Block Set
//!
//! assert_eq!(session.total().to_string(), "$223.89");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod codec;
pub mod error;
pub mod money;
pub mod pricing;
pub mod search;
pub mod session;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, DecodeError, ValidationError};
pub use money::Money;
pub use pricing::PricingPolicy;
pub use search::{SearchOutcome, SearchResults};
pub use session::Session;
pub use store::RecordStore;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Field separator of the wire format. Never escaped.
pub const RECORD_SEPARATOR: &str = "/";

/// Lowest valid product code.
pub const MIN_CODE: i64 = 0;

/// Highest valid product code.
pub const MAX_CODE: i64 = 39;

/// Smallest quantity per record.
pub const MIN_QUANTITY: i64 = 1;

/// Largest quantity per record.
pub const MAX_QUANTITY: i64 = 49;

/// Unit price at or above which a product is `ValueTier::High` ($30.00).
pub const HIGH_VALUE_THRESHOLD_CENTS: i64 = 3000;

/// Delivery markup in basis points (10%).
pub const DEFAULT_DELIVERY_MARKUP_BPS: u32 = 1000;

/// Per-unit surcharge on delivered high-tier items ($2.00).
pub const DEFAULT_HIGH_VALUE_SURCHARGE_CENTS: i64 = 200;
