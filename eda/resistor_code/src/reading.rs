use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing::debug;

use crate::bands::{BandSet, encode_bands};
use crate::color::ResistorColor;
use crate::error::ResistanceError;
use crate::series::is_e12;
use crate::significant::Decomposition;
use crate::value::{ResistanceValue, parse};

/// Everything shown to the user for one resistance, whichever side (text or bands) it was entered on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    pub value: ResistanceValue,
    /// Engineering notation, without the ohm sign.
    pub text: String,
    pub decomposition: Decomposition,
    pub band_set: BandSet,
    pub standard: bool,
}

impl Reading {
    /// Text to bands.
    pub fn from_literal(literal: &str, tolerance: ResistorColor) -> Result<Self, ResistanceError> {
        let value = parse(literal)?;
        let bands = encode_bands(value.value())?;

        let reading = Self::build(value, BandSet::new(bands, tolerance))?;
        debug!("reading from literal. literal: '{}', reading: {:?}", literal, reading);

        Ok(reading)
    }

    /// Bands to text.
    pub fn from_bands(band_set: BandSet) -> Result<Self, ResistanceError> {
        let value = band_set.bands().decode()?;

        let reading = Self::build(value, band_set)?;
        debug!("reading from bands. band_set: {:?}, reading: {:?}", band_set, reading);

        Ok(reading)
    }

    fn build(value: ResistanceValue, band_set: BandSet) -> Result<Self, ResistanceError> {
        let decomposition = value.decompose()?;

        Ok(Self {
            value,
            text: value.to_string(),
            decomposition,
            band_set,
            standard: is_e12(decomposition.significand()),
        })
    }

    pub fn tolerance_percent(&self) -> Option<Decimal> {
        self.band_set.tolerance_percent()
    }

    pub fn indication(&self) -> Indication {
        match self.standard {
            true => Indication::Standard,
            false => Indication::NonStandard,
        }
    }
}

/// How a literal should be presented, each kind gets a distinct presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Indication {
    /// An E12 value that a 4-band code can express.
    Standard,
    NonStandard,
    /// A valid value whose decade cannot be expressed with a 4-band code.
    OutOfRange,
    Invalid,
}

impl Indication {
    pub fn of(literal: &str) -> Self {
        match Reading::from_literal(literal, BandSet::DEFAULT_TOLERANCE) {
            Ok(reading) => reading.indication(),
            Err(ResistanceError::OutOfRange {
                ..
            }) => Indication::OutOfRange,
            Err(_) => Indication::Invalid,
        }
    }
}
