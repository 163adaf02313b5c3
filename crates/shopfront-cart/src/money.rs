//! Price type for cart arithmetic.
//!
//! Prices travel as JSON numbers and are held as exact decimals, so a
//! price like `0.125` keeps its third digit. Rounding to two places happens
//! only when an amount is formatted for display.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal places shown in formatted amounts.
const DISPLAY_PLACES: u32 = 2;

/// A unit price in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from an exact amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from cents.
    ///
    /// ```
    /// use shopfront_cart::money::Price;
    /// assert_eq!(Price::from_cents(4999).to_string(), "49.99");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, DISPLAY_PLACES))
    }

    /// Convert a JSON-style float, keeping the digits it prints with.
    ///
    /// `None` for NaN, infinities and magnitudes a decimal cannot hold.
    pub fn from_f64(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        // Display gives the shortest string that reads back as `amount`.
        Decimal::from_str(&amount.to_string()).ok().map(Self)
    }

    /// The exact amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units, saturating at the decimal range.
    pub fn times(&self, quantity: i64) -> Decimal {
        self.0.saturating_mul(Decimal::from(quantity))
    }

    /// Format as a 2-decimal amount without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        format_amount(self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_amount())
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map(Self)
    }
}

/// Round `amount` half away from zero and format it with exactly two
/// decimals, e.g. `0.125` → `"0.13"`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // No "-0.00".
        return format!("{:.2}", Decimal::ZERO);
    }
    format!("{rounded:.2}")
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let amount = self
            .0
            .to_f64()
            .ok_or_else(|| ser::Error::custom(format!("price {} has no float form", self.0)))?;
        serializer.serialize_f64(amount)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Admin forms post prices as strings, so accept both shapes.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(f64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Number(n) => Price::from_f64(n)
                .ok_or_else(|| de::Error::custom(format!("invalid price: {n}"))),
            Wire::Text(s) => s
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid price: {s:?}"))),
        }
    }
}
