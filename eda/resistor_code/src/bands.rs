use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing::{debug, trace};

use crate::color::{BandRole, ResistorColor};
use crate::error::ResistanceError;
use crate::significant::{decompose, pow10};
use crate::value::ResistanceValue;

pub fn digit_to_color(digit: u8) -> Result<ResistorColor, ResistanceError> {
    color_for_code(BandRole::Digit, i32::from(digit))
}

pub fn exponent_to_color(exponent: i32) -> Result<ResistorColor, ResistanceError> {
    color_for_code(BandRole::Multiplier, exponent)
}

pub fn color_to_code(color: ResistorColor) -> i32 {
    color.code()
}

fn color_for_code(role: BandRole, code: i32) -> Result<ResistorColor, ResistanceError> {
    role.color_for_code(code)
        .ok_or(ResistanceError::CodeOutOfRange {
            role,
            code,
        })
}

/// The three value bands of a 4-band code, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bands {
    pub msb: ResistorColor,
    pub lsb: ResistorColor,
    pub multiplier: ResistorColor,
}

impl Bands {
    pub fn decode(&self) -> Result<ResistanceValue, ResistanceError> {
        decode_bands(self.msb, self.lsb, self.multiplier)
    }
}

/// Encode a resistance as digit and multiplier bands.
///
/// Values whose decade falls outside [`crate::REPRESENTABLE_EXPONENTS`] are rejected, never clamped.
pub fn encode_bands(value: Decimal) -> Result<Bands, ResistanceError> {
    let decomposition = decompose(value)?;

    if !decomposition.is_representable() {
        debug!(
            "resistance out of range for bands. value: {}, exponent: {}",
            value, decomposition.exponent
        );
        return Err(ResistanceError::OutOfRange {
            exponent: decomposition.exponent,
        });
    }

    let bands = Bands {
        msb: digit_to_color(decomposition.first)?,
        lsb: digit_to_color(decomposition.second)?,
        multiplier: exponent_to_color(decomposition.exponent)?,
    };
    trace!("encoded bands. value: {}, bands: {:?}", value, bands);

    Ok(bands)
}

/// Decode digit and multiplier bands, `(msb * 10 + lsb) * 10^multiplier`.
///
/// The first band must be a non-zero digit, a black first band does not form a two digit code.
pub fn decode_bands(
    msb: ResistorColor,
    lsb: ResistorColor,
    multiplier: ResistorColor,
) -> Result<ResistanceValue, ResistanceError> {
    for (role, color) in [(BandRole::Digit, msb), (BandRole::Digit, lsb), (BandRole::Multiplier, multiplier)] {
        if !role.accepts(color) {
            return Err(ResistanceError::InvalidBand {
                role,
                color,
            });
        }
    }

    if msb == ResistorColor::Black {
        return Err(ResistanceError::InvalidBand {
            role: BandRole::Digit,
            color: msb,
        });
    }

    let significand = Decimal::from(msb.code() * 10 + lsb.code());
    let exponent = multiplier.code();
    let scale = pow10(exponent)
        .ok_or_else(|| ResistanceError::Unrepresentable(format!("{}e{}", significand, exponent)))?;

    let value = ResistanceValue::try_from_decimal(significand * scale)?;

    let decomposition = value.decompose()?;
    if !decomposition.is_representable() {
        return Err(ResistanceError::OutOfRange {
            exponent: decomposition.exponent,
        });
    }
    trace!(
        "decoded bands. msb: {}, lsb: {}, multiplier: {}, value: {}",
        msb,
        lsb,
        multiplier,
        value.value()
    );

    Ok(value)
}

/// A complete 4-band code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BandSet {
    pub msb: ResistorColor,
    pub lsb: ResistorColor,
    pub multiplier: ResistorColor,
    pub tolerance: ResistorColor,
}

impl BandSet {
    pub const DEFAULT_TOLERANCE: ResistorColor = ResistorColor::Gold;

    pub fn new(bands: Bands, tolerance: ResistorColor) -> Self {
        Self {
            msb: bands.msb,
            lsb: bands.lsb,
            multiplier: bands.multiplier,
            tolerance,
        }
    }

    pub fn bands(&self) -> Bands {
        Bands {
            msb: self.msb,
            lsb: self.lsb,
            multiplier: self.multiplier,
        }
    }

    pub fn with_bands(mut self, bands: Bands) -> Self {
        self.msb = bands.msb;
        self.lsb = bands.lsb;
        self.multiplier = bands.multiplier;
        self
    }

    pub fn color(&self, band: Band) -> ResistorColor {
        match band {
            Band::Msb => self.msb,
            Band::Lsb => self.lsb,
            Band::Multiplier => self.multiplier,
            Band::Tolerance => self.tolerance,
        }
    }

    fn color_mut(&mut self, band: Band) -> &mut ResistorColor {
        match band {
            Band::Msb => &mut self.msb,
            Band::Lsb => &mut self.lsb,
            Band::Multiplier => &mut self.multiplier,
            Band::Tolerance => &mut self.tolerance,
        }
    }

    /// Step one band to the next color of its role, see [`BandRole::step`].
    pub fn increment(self, band: Band) -> Self {
        self.step(band, true)
    }

    /// Step one band to the previous color of its role, see [`BandRole::step`].
    pub fn decrement(self, band: Band) -> Self {
        self.step(band, false)
    }

    fn step(mut self, band: Band, up: bool) -> Self {
        let color = self.color(band);
        let stepped = band.role().step(color, up);
        trace!("stepped band. band: {}, up: {}, from: {}, to: {}", band, up, color, stepped);

        *self.color_mut(band) = stepped;
        self
    }

    /// Tolerance in percent, `None` if the tolerance band has no tolerance meaning.
    pub fn tolerance_percent(&self) -> Option<Decimal> {
        self.tolerance.tolerance()
    }
}

/// A band position on the resistor body, first band first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Band {
    Msb,
    Lsb,
    Multiplier,
    Tolerance,
}

impl Band {
    pub fn role(&self) -> BandRole {
        match self {
            Band::Msb | Band::Lsb => BandRole::Digit,
            Band::Multiplier => BandRole::Multiplier,
            Band::Tolerance => BandRole::Tolerance,
        }
    }
}

/// All black value bands, shown when no valid resistance has been entered.
impl Default for BandSet {
    fn default() -> Self {
        Self {
            msb: ResistorColor::Black,
            lsb: ResistorColor::Black,
            multiplier: ResistorColor::Black,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}
