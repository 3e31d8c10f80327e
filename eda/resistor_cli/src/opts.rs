use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::args::{OutputArg, ResistorColorArg};
use cli::parsers::{positive_decimal_parser, BandSetParser};
use resistor_code::{BandSet, ResistorColor};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "resistor_cli")]
#[command(bin_name = "resistor_cli")]
#[command(version, about, long_about = None)]
pub(crate) struct Opts {
    #[command(subcommand)]
    pub(crate) command: ResistorCommand,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub(crate) output: OutputArg,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub(crate) trace: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbose: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum ResistorCommand {
    /// Check a resistance literal, e.g. '4.7k', '470', '.47', '22MΩ'
    Validate {
        /// Resistance literal
        literal: String,
    },
    /// Parse a resistance literal into ohms
    Parse {
        /// Resistance literal
        literal: String,
    },
    /// Format a value in ohms, e.g. '4700' is '4.7k'
    Format {
        /// Value in ohms
        #[arg(value_parser = positive_decimal_parser)]
        value: Decimal,
    },
    /// Classify a resistance literal as 'standard', 'non-standard', 'out-of-range' or 'invalid'
    Classify {
        /// Resistance literal
        literal: String,
    },
    /// Encode a resistance literal as a 4-band color code
    Encode {
        /// Resistance literal
        literal: String,

        /// Tolerance band
        #[arg(long, value_enum, default_value = "gold")]
        tolerance: ResistorColorArg,
    },
    /// Decode a 4-band color code
    Decode(DecodeArgs),
}

#[derive(Debug, Args)]
pub(crate) struct DecodeArgs {
    /// All bands, in the format '<MSB>,<LSB>,<MULTIPLIER>[,<TOLERANCE>]', e.g. 'yellow,violet,red,gold'
    #[arg(long, value_parser = BandSetParser::default(), conflicts_with_all = ["msb", "lsb", "multiplier", "tolerance"])]
    pub(crate) bands: Option<BandSet>,

    /// First digit band
    #[arg(long, value_enum, required_unless_present = "bands")]
    pub(crate) msb: Option<ResistorColorArg>,

    /// Second digit band
    #[arg(long, value_enum, required_unless_present = "bands")]
    pub(crate) lsb: Option<ResistorColorArg>,

    /// Multiplier band
    #[arg(long, value_enum, required_unless_present = "bands")]
    pub(crate) multiplier: Option<ResistorColorArg>,

    /// Tolerance band, defaults to gold
    #[arg(long, value_enum)]
    pub(crate) tolerance: Option<ResistorColorArg>,
}

impl DecodeArgs {
    pub(crate) fn band_set(&self) -> Option<BandSet> {
        if let Some(band_set) = self.bands {
            return Some(band_set);
        }

        Some(BandSet {
            msb: self.msb?.into(),
            lsb: self.lsb?.into(),
            multiplier: self.multiplier?.into(),
            tolerance: self
                .tolerance
                .map(ResistorColor::from)
                .unwrap_or(BandSet::DEFAULT_TOLERANCE),
        })
    }
}

#[cfg(test)]
mod decode_args_tests {
    use super::*;

    #[test]
    fn band_set_from_individual_bands() {
        // given
        let args = DecodeArgs {
            bands: None,
            msb: Some(ResistorColorArg::Brown),
            lsb: Some(ResistorColorArg::Black),
            multiplier: Some(ResistorColorArg::Orange),
            tolerance: None,
        };

        // then
        assert_eq!(
            args.band_set(),
            Some(BandSet {
                msb: ResistorColor::Brown,
                lsb: ResistorColor::Black,
                multiplier: ResistorColor::Orange,
                tolerance: ResistorColor::Gold,
            })
        );
    }

    #[test]
    fn band_set_requires_every_value_band() {
        // given
        let args = DecodeArgs {
            bands: None,
            msb: Some(ResistorColorArg::Brown),
            lsb: None,
            multiplier: Some(ResistorColorArg::Orange),
            tolerance: None,
        };

        // then
        assert_eq!(args.band_set(), None);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Opts::command().debug_assert();
    }
}
