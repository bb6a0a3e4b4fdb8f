//! # Validation Module
//!
//! Input validation for the add-record flow and the catalog table.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell (apps/cli)                                             │
//! │  ├── Parses raw text into integers                                     │
//! │  └── Reports failures and re-prompts                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── is_valid_*   → bool, no side effects                              │
//! │  └── validate_*   → typed value or ValidationError                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog lookup (Session::add_purchase)                       │
//! │  └── UnknownProduct for in-range codes missing from the table          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::validation::{is_valid_code, validate_quantity};
//!
//! assert!(is_valid_code(39));
//! assert!(!is_valid_code(40));
//! assert_eq!(validate_quantity(5).unwrap(), 5);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ShippingMethod;
use crate::{MAX_CODE, MAX_QUANTITY, MIN_CODE, MIN_QUANTITY, RECORD_SEPARATOR};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Predicates
// =============================================================================

/// `0 <= code <= 39`.
#[inline]
pub fn is_valid_code(code: i64) -> bool {
    (MIN_CODE..=MAX_CODE).contains(&code)
}

/// `1 <= qty <= 49`.
#[inline]
pub fn is_valid_quantity(qty: i64) -> bool {
    (MIN_QUANTITY..=MAX_QUANTITY).contains(&qty)
}

/// Exactly `"Pick-up"` or `"Delivery"`. No trimming, no case folding.
#[inline]
pub fn is_valid_shipping_method(method: &str) -> bool {
    ShippingMethod::from_label(method).is_some()
}

// =============================================================================
// Validators
// =============================================================================

/// Validates a product code and narrows it to the record type.
///
/// ## User Workflow
/// ```text
/// User enters code: 42
///      │
///      ▼
/// validate_code(42) ← THIS FUNCTION
///      │
///      ├── outside 0..=39? → OutOfRange, shell prints "Incorrect product code!"
///      │
///      └── OK → catalog lookup
/// ```
pub fn validate_code(code: i64) -> ValidationResult<u32> {
    if !is_valid_code(code) {
        return Err(ValidationError::OutOfRange {
            field: "code",
            value: code,
            min: MIN_CODE,
            max: MAX_CODE,
        });
    }

    Ok(code as u32)
}

/// Validates a purchase quantity.
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if !is_valid_quantity(qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity",
            value: qty,
            min: MIN_QUANTITY,
            max: MAX_QUANTITY,
        });
    }

    Ok(qty as u32)
}

/// Validates a shipping method label.
pub fn validate_shipping_method(method: &str) -> ValidationResult<ShippingMethod> {
    ShippingMethod::from_label(method).ok_or_else(|| ValidationError::NotAllowed {
        field: "shipping method",
        value: method.to_string(),
        allowed: ShippingMethod::LABELS.to_vec(),
    })
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a catalog product name.
///
/// ## Rules
/// - Must not be blank
/// - Must not contain the record separator `/`, since the wire format
///   has no escaping
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    if name.contains(RECORD_SEPARATOR) {
        return Err(ValidationError::InvalidFormat {
            field: format!("name '{}'", name),
            reason: format!("must not contain '{}'", RECORD_SEPARATOR),
        });
    }

    Ok(())
}

/// Validates a catalog unit price (must be > 0).
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
