use std::ffi::{OsStr, OsString};

use clap::builder::TypedValueParser;
use clap::error::ErrorKind;
use clap::{value_parser, Arg, Command, Error};
use resistor_code::{BandSet, ResistorColor};
use rust_decimal::Decimal;

use crate::args::ResistorColorArg;

#[derive(Clone, Default)]
pub struct BandSetParser {}

impl TypedValueParser for BandSetParser {
    type Value = BandSet;

    /// Parses a value in the format '<MSB>,<LSB>,<MULTIPLIER>[,<TOLERANCE>]' with lowercase color names, e.g. 'yellow,violet,red,gold'
    fn parse_ref(&self, cmd: &Command, _arg: Option<&Arg>, value: &OsStr) -> Result<Self::Value, Error> {
        let chunks_str = value
            .to_str()
            .ok_or_else(|| Error::raw(ErrorKind::InvalidValue, "Invalid argument encoding"))?;

        let chunks: Vec<_> = chunks_str.split(',').collect();
        if !(3..=4).contains(&chunks.len()) {
            return Err(Error::raw(
                ErrorKind::InvalidValue,
                format!(
                    "Invalid argument. Required format: '<MSB>,<LSB>,<MULTIPLIER>[,<TOLERANCE>]', found: '{}'",
                    chunks_str
                ),
            ));
        }

        let color_parser = value_parser!(ResistorColorArg);
        let colors = chunks
            .iter()
            .map(|chunk| {
                let color_os_str = OsString::from(chunk.trim());
                color_parser
                    .parse_ref(cmd, None, &color_os_str)
                    .map(ResistorColor::from)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BandSet {
            msb: colors[0],
            lsb: colors[1],
            multiplier: colors[2],
            tolerance: colors
                .get(3)
                .copied()
                .unwrap_or(BandSet::DEFAULT_TOLERANCE),
        })
    }
}


/// Any positive decimal, e.g. '4700' or '0.47', exponent notation is not accepted.
pub fn positive_decimal_parser(s: &str) -> Result<Decimal, String> {
    let value = s
        .trim()
        .parse::<Decimal>()
        .map_err(|e| format!("Failed to parse decimal value '{}': {}", s, e))?;

    if value <= Decimal::ZERO {
        return Err(format!("Value must be greater than zero, found: '{}'", s));
    }

    Ok(value)
}
