//! # Price Module
//!
//! Provides the `Price` type for product prices.
//!
//! ## Why Integer Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The backend sends prices as decimal strings: "22.33"                   │
//! │                                                                         │
//! │  Parsed as f64 and printed back:                                        │
//! │    22.33 → 22.329999999999998  ❌ WRONG on screen                       │
//! │                                                                         │
//! │  OUR SOLUTION: parse the string straight into integer cents             │
//! │    "22.33" → 2233 → "22.33"   (exact, round-trips)                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::price::Price;
//!
//! let price: Price = "22.3".parse().unwrap();
//! assert_eq!(price.cents(), 2230);
//! assert_eq!(price.to_string(), "22.30");
//! assert_eq!(price.display_currency(), "$22.30");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Price Type
// =============================================================================

/// A non-negative price in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **u64**: prices are never negative, so the type rules it out
/// - **String on the wire**: matches the backend format and keeps exact digits
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Price(u64);

impl Price {
    /// Creates a price from cents.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::price::Price;
    ///
    /// let price = Price::from_cents(1099); // 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn units(&self) -> u64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> u64 {
        self.0 % 100
    }

    /// Checks if the price is zero (free item).
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats the price with a currency sign, as product cards show it.
    pub fn display_currency(&self) -> String {
        format!("${}", self)
    }
}

// =============================================================================
// Parsing
// =============================================================================

impl FromStr for Price {
    type Err = ValidationError;

    /// Parses `"22"`, `"22.3"` or `"22.33"`.
    ///
    /// Rejects signs, thousands separators, more than two fraction digits and
    /// anything that is not plain ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }

        let fraction_cents = match fraction {
            None => 0,
            Some(f) if f.is_empty() || f.len() > 2 => {
                return Err(invalid("expected one or two digits after the decimal point"));
            }
            Some(f) if !f.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(invalid("expected digits after the decimal point"));
            }
            Some(f) => {
                let digits: u64 = f.parse().map_err(|_| invalid("fraction out of range"))?;
                if f.len() == 1 { digits * 10 } else { digits }
            }
        };

        let units: u64 = whole.parse().map_err(|_| invalid("value out of range"))?;
        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .map(Price)
            .ok_or_else(|| invalid("value out of range"))
    }
}

impl TryFrom<String> for Price {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal form, identical to the wire format: `22.33`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.units(), self.cents_part())
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
