//! # Validation Module
//!
//! Quantity input coercion.
//!
//! ## Coercion Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quantity Input Coercion                            │
//! │                                                                         │
//! │  "12"      ──► 12          unsigned integer, taken as-is               │
//! │  " 7 "     ──► 7           surrounding whitespace ignored              │
//! │  "3.9"     ──► 3           finite decimal, truncated toward zero       │
//! │  "1e3"     ──► 1000        exponent notation                           │
//! │  ""        ──► 0           empty                                       │
//! │  "-4"      ──► 0           negative                                    │
//! │  "abc"     ──► 0           non-numeric                                 │
//! │  "NaN"     ──► 0           not finite                                  │
//! │  "9999999999" ──► u32::MAX saturates                                   │
//! │                                                                         │
//! │  There is no error path: bad input silently becomes zero.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::count::Quantity;

/// Coerces user-typed text into a quantity.
///
/// ## Example
/// ```rust
/// use tally_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("12"), 12);
/// assert_eq!(parse_quantity("-3"), 0);
/// assert_eq!(parse_quantity("abc"), 0);
/// ```
pub fn parse_quantity(input: &str) -> Quantity {
    let input = input.trim();

    if input.is_empty() {
        return 0;
    }

    if input.bytes().all(|b| b.is_ascii_digit()) {
        return input.parse::<u64>().map(clamp_unsigned).unwrap_or(Quantity::MAX);
    }

    match input.parse::<f64>() {
        Ok(value) => clamp_float(value),
        Err(_) => 0,
    }
}

fn clamp_unsigned(value: u64) -> Quantity {
    Quantity::try_from(value).unwrap_or(Quantity::MAX)
}

fn clamp_float(value: f64) -> Quantity {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // `as` saturates at the integer bounds
    value.trunc() as Quantity
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(parse_quantity("0"), 0);
        assert_eq!(parse_quantity("12"), 12);
        assert_eq!(parse_quantity("  7 "), 7);
        assert_eq!(parse_quantity("007"), 7);
    }

    #[test]
    fn test_parse_invalid_becomes_zero() {
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("   "), 0);
        assert_eq!(parse_quantity("-4"), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("12abc"), 0);
        assert_eq!(parse_quantity("NaN"), 0);
        assert_eq!(parse_quantity("inf"), 0);
        assert_eq!(parse_quantity("-0.5"), 0);
    }

    #[test]
    fn test_parse_decimals_truncate() {
        assert_eq!(parse_quantity("3.9"), 3);
        assert_eq!(parse_quantity("1e3"), 1000);
        assert_eq!(parse_quantity("0.4"), 0);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_quantity("99999999999999999999999"), Quantity::MAX);
        assert_eq!(parse_quantity("4294967296"), Quantity::MAX);
        assert_eq!(parse_quantity("1e30"), Quantity::MAX);
    }
}
