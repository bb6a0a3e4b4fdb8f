//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  ├── CoreError        - Umbrella for every core failure                │
//! │  ├── ValidationError  - Bad code / quantity / shipping method          │
//! │  ├── DecodeError      - Malformed wire record                          │
//! │  └── MoneyParseError  - Malformed decimal amount                       │
//! │                                                                         │
//! │  shell errors (apps/cli)                                               │
//! │  └── ShellError       - I/O failures plus CoreError                    │
//! │                                                                         │
//! │  Recoverable: ValidationError, EmptyKeyword  → shell re-prompts        │
//! │  Surfaced:    DecodeError                    → never treated as $0.00  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, field, raw value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// User input rejected by the validator.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A stored record could not be decoded.
    ///
    /// ## When This Occurs
    /// - A wire line has the wrong number of fields
    /// - A numeric field does not parse
    ///
    /// This indicates corruption or a programming bug. Callers must not
    /// continue with a partially parsed record.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Search keyword was empty or whitespace only.
    #[error("Search keyword must not be empty")]
    EmptyKeyword,

    /// The static catalog table violates a load-time constraint.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Recoverable: the shell reports the message and asks again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} {value} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Value is not in allowed set.
    #[error("{field} '{value}' must be one of: {allowed:?}")]
    NotAllowed {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    /// Code is in range but the catalog has no such product.
    #[error("No product with code {code}")]
    UnknownProduct { code: u32 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., separator inside a product name).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate product code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Decode Error
// =============================================================================

/// Failures while decoding a `/`-delimited wire record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("{field} is not an integer: '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("{field} is not a valid amount: '{value}'")]
    InvalidAmount { field: &'static str, value: String },

    #[error("unknown value tier '{0}'")]
    InvalidValueTier(String),

    #[error("unknown shipping method '{0}'")]
    InvalidShippingMethod(String),

    /// Wraps a failure with the 1-based line it came from.
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<DecodeError>,
    },
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// A decimal amount string could not be parsed into `Money`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid amount '{0}': expected digits with at most 3 decimal places")]
pub struct MoneyParseError(pub String);

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "code",
            value: 40,
            min: 0,
            max: 39,
        };
        assert_eq!(err.to_string(), "code 40 must be between 0 and 39");

        let err = ValidationError::UnknownProduct { code: 7 };
        assert_eq!(err.to_string(), "No product with code 7");
    }

    #[test]
    fn test_decode_error_messages() {
        let err = DecodeError::FieldCount {
            expected: 6,
            found: 4,
        };
        assert_eq!(err.to_string(), "expected 6 fields, found 4");

        let err = DecodeError::AtLine {
            line: 3,
            source: Box::new(DecodeError::InvalidShippingMethod("Post".into())),
        };
        assert_eq!(err.to_string(), "line 3: unknown shipping method 'Post'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let err: CoreError = ValidationError::UnknownProduct { code: 1 }.into();
        assert!(matches!(err, CoreError::Validation(_)));

        let err: CoreError = DecodeError::InvalidValueTier("Mid".into()).into();
        assert!(matches!(err, CoreError::Decode(_)));
    }
}
