//! Non-negative menu prices using decimal arithmetic.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The amount is above [`Price::MAX`].
    #[error("price cannot exceed {max} (got {0})", max = Price::MAX)]
    TooLarge(Decimal),
    /// The input could not be parsed as a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// Digits kept after the decimal point.
const CURRENCY_SCALE: u32 = 2;

/// A menu item price in the shop's currency.
///
/// Stored as a JSON number in the shop document. The amount is always
/// zero or greater, rounded to two decimal places and at most [`Price::MAX`],
/// so it reads back from the document exactly as it was written.
///
/// ```
/// use swift_menu_core::Price;
///
/// let price: Price = "120".parse().unwrap();
/// assert_eq!(price.to_string(), "120");
/// assert!("-5".parse::<Price>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Largest accepted amount. Fourteen significant digits fit an `f64`
    /// without loss.
    // 99_999_999_999_999 = 0x5AF3_107A_3FFF, split into 32-bit lo/mid words.
    pub const MAX: Decimal = Decimal::from_parts(0x107A_3FFF, 0x5AF3, 0, false, CURRENCY_SCALE);

    /// Create a price, rounding half away from zero to two decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the rounded amount is below zero and
    /// [`PriceError::TooLarge`] if it is above [`Price::MAX`].
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        let rounded =
            amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        if rounded > Self::MAX {
            return Err(PriceError::TooLarge(amount));
        }
        Ok(Self(rounded.normalize()))
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s
            .trim()
            .parse::<Decimal>()
            .map_err(|e| PriceError::Invalid(e.to_string()))?;
        Self::new(amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0.normalize(), serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}
