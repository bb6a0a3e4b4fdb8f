//! # Shell Error Type
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  ValidationError ──► UserError ──► "Incorrect quantity!"                │
//! │                      (printed, prompt repeats, nothing is returned)     │
//! │                                                                         │
//! │  CoreError::EmptyKeyword ──► UserError ──► "Error: Please enter a       │
//! │                                             keyword."                   │
//! │                                                                         │
//! │  io::Error / DecodeError / serde_json::Error                            │
//! │        └──► ShellError ──► UserError ──► main() prints it, exits 1      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopcart_core::{CoreError, ValidationError};
use thiserror::Error;
use tracing::error;

/// Errors that end the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A core operation failed in a way re-prompting cannot fix.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// JSON output could not be produced.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationError> for ShellError {
    fn from(err: ValidationError) -> Self {
        ShellError::Core(CoreError::Validation(err))
    }
}

/// Convenience alias for shell results.
pub type ShellResult<T> = Result<T, ShellError>;

/// Message printed before re-prompting after a blank search keyword.
pub const EMPTY_KEYWORD_MESSAGE: &str = "Error: Please enter a keyword.";

// =============================================================================
// User-facing errors
// =============================================================================

/// What the user is shown when something goes wrong.
///
/// ## JSON form
/// ```json
/// {
///   "code": "INVALID_QUANTITY",
///   "message": "Incorrect quantity!"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserError {
    /// Machine-readable category
    pub code: ErrorCode,

    /// Text printed to the console
    pub message: String,
}

/// Error categories for console and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product code not numeric, out of range, or not in the catalog
    InvalidCode,

    /// Quantity not numeric or out of range
    InvalidQuantity,

    /// Shipping method not an accepted label
    InvalidShippingMethod,

    /// Blank search keyword
    EmptyKeyword,

    /// Other rejected input
    InvalidInput,

    /// A wire record could not be decoded
    CorruptRecord,

    /// The product table failed its load-time checks
    InvalidCatalog,

    /// Terminal input or output failed
    Io,

    /// Anything else
    Internal,
}

impl UserError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        UserError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_code() -> Self {
        UserError::new(ErrorCode::InvalidCode, "Incorrect product code!")
    }

    pub fn invalid_quantity() -> Self {
        UserError::new(ErrorCode::InvalidQuantity, "Incorrect quantity!")
    }
}

/// Rejected prompt input.
impl From<&ValidationError> for UserError {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::OutOfRange { field: "quantity", .. } => UserError::invalid_quantity(),
            ValidationError::OutOfRange { .. } | ValidationError::UnknownProduct { .. } => {
                UserError::invalid_code()
            }
            ValidationError::NotAllowed { .. } => UserError::new(
                ErrorCode::InvalidShippingMethod,
                "Incorrect shipping method!",
            ),
            ValidationError::MustBePositive { .. }
            | ValidationError::InvalidFormat { .. }
            | ValidationError::Duplicate { .. } => {
                UserError::new(ErrorCode::InvalidInput, "Invalid input!")
            }
        }
    }
}

impl From<&CoreError> for UserError {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::Validation(e) => UserError::from(e),
            CoreError::EmptyKeyword => UserError::new(ErrorCode::EmptyKeyword, EMPTY_KEYWORD_MESSAGE),
            CoreError::Decode(e) => {
                error!(error = %e, "Record decode failed");
                UserError::new(ErrorCode::CorruptRecord, "A stored record could not be read")
            }
            CoreError::InvalidCatalog(e) => {
                error!(error = %e, "Catalog rejected");
                UserError::new(ErrorCode::InvalidCatalog, "The product catalog is invalid")
            }
        }
    }
}

/// Fatal shell errors.
impl From<&ShellError> for UserError {
    fn from(err: &ShellError) -> Self {
        match err {
            ShellError::Io(e) => UserError::new(ErrorCode::Io, format!("Console I/O failed: {}", e)),
            ShellError::Core(e) => UserError::from(e),
            ShellError::Json(e) => {
                error!(error = %e, "JSON serialization failed");
                UserError::new(ErrorCode::Internal, "Could not produce JSON output")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::validation::{validate_code, validate_quantity, validate_shipping_method};
    use shopcart_core::codec::decode_purchase;
    use shopcart_core::DecodeError;

    #[test]
    fn test_validation_messages() {
        let code = UserError::from(&validate_code(41).unwrap_err());
        assert_eq!(code, UserError::invalid_code());
        assert_eq!(code.message, "Incorrect product code!");

        let unknown = UserError::from(&ValidationError::UnknownProduct { code: 3 });
        assert_eq!(unknown.code, ErrorCode::InvalidCode);

        let quantity = UserError::from(&validate_quantity(0).unwrap_err());
        assert_eq!(quantity.code, ErrorCode::InvalidQuantity);
        assert_eq!(quantity.message, "Incorrect quantity!");

        let method = UserError::from(&validate_shipping_method("Drone").unwrap_err());
        assert_eq!(method.code, ErrorCode::InvalidShippingMethod);
        assert_eq!(method.message, "Incorrect shipping method!");
    }

    #[test]
    fn test_core_errors() {
        let empty = UserError::from(&CoreError::EmptyKeyword);
        assert_eq!(empty.code, ErrorCode::EmptyKeyword);
        assert_eq!(empty.message, EMPTY_KEYWORD_MESSAGE);

        let decode = CoreError::from(decode_purchase("16/Teapot/Low").unwrap_err());
        assert!(matches!(decode, CoreError::Decode(DecodeError::FieldCount { .. })));
        assert_eq!(UserError::from(&decode).code, ErrorCode::CorruptRecord);
    }

    #[test]
    fn test_fatal_errors() {
        let io = ShellError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(UserError::from(&io).code, ErrorCode::Io);

        let err: ShellError = ValidationError::UnknownProduct { code: 3 }.into();
        assert!(matches!(err, ShellError::Core(CoreError::Validation(_))));
        assert_eq!(err.to_string(), "Validation error: No product with code 3");
        assert_eq!(UserError::from(&err), UserError::invalid_code());
    }

    #[test]
    fn test_json_form() {
        let json = serde_json::to_value(UserError::invalid_quantity()).unwrap();
        assert_eq!(json["code"], "INVALID_QUANTITY");
        assert_eq!(json["message"], "Incorrect quantity!");
    }
}
