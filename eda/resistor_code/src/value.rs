use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ResistanceError;
use crate::literal;
use crate::notation::format_engineering;
use crate::significant::{self, Decomposition};

/// All values are canonicalised to this many significant digits.
pub const SIGNIFICANT_DIGITS: u32 = 2;

/// Round half-up (away from zero) to [`SIGNIFICANT_DIGITS`].
///
/// `None` if the rounded value does not fit in a `Decimal`.
pub(crate) fn round_significant(value: Decimal) -> Option<Decimal> {
    value.round_sf_with_strategy(SIGNIFICANT_DIGITS, RoundingStrategy::MidpointAwayFromZero)
}

/// A positive resistance in ohms, rounded to exactly two significant digits.
///
/// Equality is numeric, `parse("4.7k") == parse("4.70kΩ")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Decimal", into = "Decimal"))]
pub struct ResistanceValue(Decimal);

impl ResistanceValue {
    /// Canonicalise any positive decimal, e.g. `4749` becomes `4700`.
    pub fn try_from_decimal(value: Decimal) -> Result<Self, ResistanceError> {
        if value <= Decimal::ZERO {
            return Err(ResistanceError::ZeroOrNegative(value));
        }

        let rounded = round_significant(value).ok_or_else(|| ResistanceError::Unrepresentable(value.to_string()))?;

        // very small inputs can round away entirely
        if rounded <= Decimal::ZERO {
            return Err(ResistanceError::ZeroOrNegative(rounded));
        }

        Ok(Self(rounded))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn decompose(&self) -> Result<Decomposition, ResistanceError> {
        significant::decompose(self.0)
    }
}

impl TryFrom<Decimal> for ResistanceValue {
    type Error = ResistanceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_from_decimal(value)
    }
}

impl From<ResistanceValue> for Decimal {
    fn from(value: ResistanceValue) -> Self {
        value.0
    }
}

impl FromStr for ResistanceValue {
    type Err = ResistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Engineering notation, e.g. `4.7k`, without the ohm sign.
impl fmt::Display for ResistanceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_engineering(self.0))
    }
}

/// Parse a resistance literal such as `4.7kΩ` into its canonical value.
///
/// Literals that fail [`literal::is_valid`] are rejected with [`ResistanceError::InvalidLiteral`].
pub fn parse(text: &str) -> Result<ResistanceValue, ResistanceError> {
    if !literal::is_valid(text) {
        return Err(ResistanceError::InvalidLiteral(text.to_string()));
    }

    let (number, multiplier) = literal::split(text);
    // only trailing fractional zeros may be dropped, `from_str_exact` rejects other digits beyond scale 28
    // trailing fractional zeros carry no value, any other digit beyond `Decimal`'s scale must not be rounded away
    let number = match number.contains('.') {
        true => number
            .trim_end_matches('0')
            .trim_end_matches('.'),
        false => number,
    };

    let number = match number.starts_with('.') {
        true => Decimal::from_str_exact(&format!("0{}", number)),
        false => Decimal::from_str_exact(number),
    }
    .map_err(|_| ResistanceError::Unrepresentable(text.to_string()))?;

    let product = number
        .checked_mul(multiplier.factor())
        .ok_or_else(|| ResistanceError::Unrepresentable(text.to_string()))?;

    let value = ResistanceValue::try_from_decimal(product)?;
    trace!(
        "parsed resistance. text: '{}', number: {}, multiplier: {:?}, value: {}",
        text,
        number,
        multiplier,
        value.0
    );

    Ok(value)
}
