//! # Card Error Handling
//!
//! One error type, [`CardError`], shared by the price formatter, the card
//! configuration and the JSON decoding helpers. It follows the `thiserror`
//! pattern; the wasm layer turns it into a `JsValue` string at the boundary.
//!
//! ## Usage Example
//!
//! ```rust
//! use shared::error::{CardError, Result};
//!
//! fn require_symbol(symbol: &str) -> Result<&str> {
//!     if symbol.is_empty() {
//!         return Err(CardError::InvalidAmount("empty symbol".to_string()));
//!     }
//!     Ok(symbol)
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, CardError>`.
pub type Result<T> = std::result::Result<T, CardError>;

/// Errors raised while turning host input into a renderable card.
///
/// None of these is fatal for the card: a price that fails to format is
/// dropped from the price block, a bad configuration aborts the mount call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardError {
    /// Raw price is empty, non-numeric, NaN or infinite.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Raw price is below zero.
    #[error("Negative amount: {0}")]
    NegativeAmount(String),

    /// Payment token declares more decimals than can be represented.
    #[error("Decimals out of range: {0} (max {max})", max = crate::format::MAX_DECIMALS)]
    DecimalsOutOfRange(u32),

    /// Host supplied an unusable card configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Host input could not be decoded into the card data model.
    #[error("Decoding error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        CardError::Decode(err.to_string())
    }
}
