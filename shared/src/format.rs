//! # Price Formatting
//!
//! Converts raw payment-token amounts (smallest unit) into base-denomination
//! strings for display.
//!
//! ## Functions
//!
//! - [`to_base_denomination`] - Exact conversion, all fractional digits kept
//! - [`format_price`] - Conversion capped at a display precision
//!
//! Integer amounts are shifted with decimal string arithmetic so 18-decimal
//! tokens never lose digits. Amounts with a fractional part fall back to `f64`.

use crate::dto::PriceAmount;
use crate::error::{CardError, Result};

/// Largest decimal precision a payment token may declare.
pub const MAX_DECIMALS: u32 = 255;

/// Parsed raw amount.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RawAmount {
    Units(u128),
    Fractional(f64),
}

/// Convert a raw amount to its base denomination, keeping every significant digit.
///
/// # Examples
///
/// ```rust
/// use shared::dto::PriceAmount;
/// use shared::format::to_base_denomination;
///
/// let wei = PriceAmount::new("1000000000000000000");
/// assert_eq!(to_base_denomination(&wei, 18).unwrap(), "1");
///
/// let usdc = PriceAmount::new("2500000");
/// assert_eq!(to_base_denomination(&usdc, 6).unwrap(), "2.5");
/// ```
pub fn to_base_denomination(amount: &PriceAmount, decimals: u32) -> Result<String> {
    format_price(amount, decimals, None)
}

/// Convert a raw amount to its base denomination, truncated to at most
/// `precision` fractional digits. Trailing zeros and a bare decimal point are
/// trimmed, so whole amounts render without a fraction.
///
/// A non-zero amount below one is never truncated to `0`: its fraction is kept
/// up to the first significant digit.
///
/// # Examples
///
/// ```rust
/// use shared::dto::PriceAmount;
/// use shared::format::format_price;
///
/// let wei = PriceAmount::new("1234567890000000000");
/// assert_eq!(format_price(&wei, 18, Some(4)).unwrap(), "1.2345");
/// assert_eq!(format_price(&wei, 18, None).unwrap(), "1.23456789");
///
/// let dust = PriceAmount::new("50000000000000");
/// assert_eq!(format_price(&dust, 18, Some(4)).unwrap(), "0.00005");
/// ```
pub fn format_price(amount: &PriceAmount, decimals: u32, precision: Option<u32>) -> Result<String> {
    if decimals > MAX_DECIMALS {
        return Err(CardError::DecimalsOutOfRange(decimals));
    }

    let (integer_part, mut fraction) = match parse_amount(amount.as_str())? {
        RawAmount::Units(units) => shift_units(units, decimals),
        RawAmount::Fractional(value) => shift_float(value, decimals),
    };

    if let Some(precision) = precision {
        let keep = visible_digits(&integer_part, &fraction, precision as usize);
        fraction.truncate(keep);
    }
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        Ok(integer_part)
    } else {
        Ok(format!("{}.{}", integer_part, fraction))
    }
}

/// Number of fractional digits to keep for a `precision` cap.
fn visible_digits(integer_part: &str, fraction: &str, precision: usize) -> usize {
    if integer_part.bytes().any(|b| b != b'0') {
        return precision;
    }
    match fraction.bytes().position(|b| b != b'0') {
        Some(first_significant) => precision.max(first_significant + 1),
        None => precision,
    }
}

fn parse_amount(raw: &str) -> Result<RawAmount> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CardError::InvalidAmount(raw.to_string()));
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(units) = raw.parse::<u128>() {
            return Ok(RawAmount::Units(units));
        }
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| CardError::InvalidAmount(raw.to_string()))?;
    if !value.is_finite() {
        return Err(CardError::InvalidAmount(raw.to_string()));
    }
    if value < 0.0 {
        return Err(CardError::NegativeAmount(raw.to_string()));
    }

    // Exponent notation ("1e18") and whole floats stay on the exact path.
    if value.fract() == 0.0 && value < u128::MAX as f64 {
        return Ok(RawAmount::Units(value as u128));
    }
    Ok(RawAmount::Fractional(value))
}

/// Shift an integer amount `decimals` places right, as (integer, fraction) digit strings.
fn shift_units(units: u128, decimals: u32) -> (String, String) {
    let digits = units.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return (digits, String::new());
    }
    if digits.len() <= decimals {
        let padding = "0".repeat(decimals - digits.len());
        return ("0".to_string(), format!("{}{}", padding, digits));
    }

    let (integer_part, fraction) = digits.split_at(digits.len() - decimals);
    (integer_part.to_string(), fraction.to_string())
}

fn shift_float(value: f64, decimals: u32) -> (String, String) {
    let shifted = value / 10f64.powi(decimals as i32);
    let formatted = shifted.to_string();

    match formatted.split_once('.') {
        Some((integer_part, fraction)) => (integer_part.to_string(), fraction.to_string()),
        None => (formatted, String::new()),
    }
}
