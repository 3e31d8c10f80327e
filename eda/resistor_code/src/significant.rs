use std::ops::RangeInclusive;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ResistanceError;
use crate::value::round_significant;

/// Decades a 4-band code can express, silver (x0.01) to white (x10^9).
pub const REPRESENTABLE_EXPONENTS: RangeInclusive<i32> = -2..=9;

/// Where the exponent search starts, one decade below the silver multiplier.
const FIRST_EXPONENT: i32 = -3;

/// `Decimal` holds at most 28 fractional digits and magnitudes below 10^29.
const MIN_EXPONENT: i32 = -28;
const MAX_EXPONENT: i32 = 28;

const TEN: Decimal = dec!(10);
const HUNDRED: Decimal = dec!(100);

/// A resistance split into two significant digits and a decade,
/// `value == (first * 10 + second) * 10^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Decomposition {
    pub exponent: i32,
    /// `1..=9`
    pub first: u8,
    /// `0..=9`
    pub second: u8,
}

impl Decomposition {
    /// The two significant digits as a number, `10..=99`.
    pub fn significand(&self) -> u8 {
        self.first * 10 + self.second
    }

    /// `None` only if `10^exponent` cannot be represented.
    pub fn value(&self) -> Option<Decimal> {
        pow10(self.exponent).and_then(|scale| Decimal::from(self.significand()).checked_mul(scale))
    }

    /// true if the decade fits a multiplier band, see [`REPRESENTABLE_EXPONENTS`].
    pub fn is_representable(&self) -> bool {
        REPRESENTABLE_EXPONENTS.contains(&self.exponent)
    }
}

pub(crate) fn pow10(exponent: i32) -> Option<Decimal> {
    match exponent >= 0 {
        true => 10_i128
            .checked_pow(exponent.unsigned_abs())
            .and_then(|power| Decimal::try_from_i128_with_scale(power, 0).ok()),
        false => Decimal::try_from_i128_with_scale(1, exponent.unsigned_abs()).ok(),
    }
}

/// `value / 10^exponent`, rounded to two significant digits.
///
/// `None` when the quotient overflows, which only happens when it is far above 100.
fn quotient(value: Decimal, exponent: i32) -> Option<Decimal> {
    pow10(exponent)
        .and_then(|divisor| value.checked_div(divisor))
        .and_then(round_significant)
}

/// Split a positive resistance into its decade exponent and two significant digits.
///
/// The value is rounded to two significant digits first. The exponent is the one for which
/// `value / 10^exponent` lies in `[10, 100)`, e.g. `1000` is `(2, 1, 0)`, not `(1, 10, 0)`.
pub fn decompose(value: Decimal) -> Result<Decomposition, ResistanceError> {
    if value <= Decimal::ZERO {
        return Err(ResistanceError::ZeroOrNegative(value));
    }
    let unrepresentable = || ResistanceError::Unrepresentable(value.to_string());

    let value = round_significant(value).ok_or_else(unrepresentable)?;

    let mut exponent = FIRST_EXPONENT;
    let significand = loop {
        match quotient(value, exponent) {
            Some(quotient) if quotient >= TEN && quotient < HUNDRED => break quotient,
            Some(quotient) if quotient < TEN => {
                if exponent <= MIN_EXPONENT {
                    return Err(unrepresentable());
                }
                exponent -= 1;
            }
            _ => {
                if exponent >= MAX_EXPONENT {
                    return Err(unrepresentable());
                }
                exponent += 1;
            }
        }
    };

    // truncated, not rounded, `quotient` is in `[1, 10)`
    let first = quotient(value, exponent + 1)
        .and_then(|quotient| quotient.trunc().to_u8())
        .ok_or_else(unrepresentable)?;

    let second = (significand - Decimal::from(first) * TEN)
        .to_u8()
        .ok_or_else(unrepresentable)?;

    let decomposition = Decomposition {
        exponent,
        first,
        second,
    };
    trace!("decomposed resistance. value: {}, decomposition: {:?}", value, decomposition);

    Ok(decomposition)
}
