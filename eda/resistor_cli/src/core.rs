use std::fmt;

use anyhow::anyhow;
use cli::args::OutputArg;
use resistor_code::{
    classify_standard, format, parse, validate, BandSet, Decomposition, Indication, Reading, ResistanceValue,
    ResistorColor,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::opts::ResistorCommand;

/// The result of one command, rendered as text or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub(crate) enum Outcome {
    Validate {
        literal: String,
        valid: bool,
    },
    Parse {
        literal: String,
        value: ResistanceValue,
        text: String,
        decomposition: Decomposition,
    },
    Format {
        value: Decimal,
        text: String,
    },
    Classify {
        literal: String,
        indication: Indication,
        standard: bool,
    },
    Encode {
        literal: String,
        reading: Reading,
    },
    Decode {
        reading: Reading,
    },
}

pub(crate) fn execute(command: ResistorCommand) -> anyhow::Result<Outcome> {
    let outcome = match command {
        ResistorCommand::Validate {
            literal,
        } => {
            let valid = validate(&literal);
            info!("Validated resistance. literal: '{}', valid: {}", literal, valid);

            Outcome::Validate {
                literal,
                valid,
            }
        }
        ResistorCommand::Parse {
            literal,
        } => {
            let value = parse(&literal)?;
            let decomposition = value.decompose()?;
            info!("Parsed resistance. literal: '{}', value: {}", literal, value.value().normalize());

            Outcome::Parse {
                literal,
                value,
                text: value.to_string(),
                decomposition,
            }
        }
        ResistorCommand::Format {
            value,
        } => {
            let text = format(value);
            info!("Formatted resistance. value: {}, text: '{}'", value, text);

            Outcome::Format {
                value,
                text,
            }
        }
        ResistorCommand::Classify {
            literal,
        } => {
            let indication = Indication::of(&literal);
            let standard = classify_standard(&literal);
            info!("Classified resistance. literal: '{}', indication: {}", literal, indication);

            Outcome::Classify {
                literal,
                indication,
                standard,
            }
        }
        ResistorCommand::Encode {
            literal,
            tolerance,
        } => {
            let reading = Reading::from_literal(&literal, ResistorColor::from(tolerance))?;
            info!(
                "Encoded resistance. literal: '{}', bands: {}",
                literal,
                band_names(&reading.band_set)
            );

            Outcome::Encode {
                literal,
                reading,
            }
        }
        ResistorCommand::Decode(args) => {
            // clap configuration prevents this
            let band_set = args
                .band_set()
                .ok_or_else(|| anyhow!("Missing bands"))?;

            let reading = Reading::from_bands(band_set)?;
            info!(
                "Decoded bands. bands: {}, resistance: '{}'",
                band_names(&band_set),
                reading.text
            );

            Outcome::Decode {
                reading,
            }
        }
    };

    Ok(outcome)
}

pub(crate) fn render(outcome: &Outcome, output: OutputArg) -> anyhow::Result<String> {
    match output {
        OutputArg::Text => Ok(outcome.to_string()),
        OutputArg::Json => Ok(serde_json::to_string_pretty(outcome)?),
    }
}

fn band_names(band_set: &BandSet) -> String {
    format!(
        "{} {} {} {}",
        band_set.msb, band_set.lsb, band_set.multiplier, band_set.tolerance
    )
}

fn resistance_with_tolerance(reading: &Reading) -> String {
    match reading.tolerance_percent() {
        Some(percent) => format!("{}Ω ±{}%", reading.text, percent.normalize()),
        None => format!("{}Ω", reading.text),
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Validate {
                valid, ..
            } => match valid {
                true => f.write_str("valid"),
                false => f.write_str("invalid"),
            },
            Outcome::Parse {
                value, ..
            } => write!(f, "{}", value.value().normalize()),
            Outcome::Format {
                text, ..
            } => f.write_str(text),
            Outcome::Classify {
                indication, ..
            } => write!(f, "{}", indication),
            Outcome::Encode {
                reading, ..
            } => f.write_str(&band_names(&reading.band_set)),
            Outcome::Decode {
                reading,
            } => f.write_str(&resistance_with_tolerance(reading)),
        }
    }
}

#[cfg(test)]
mod execute_tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::opts::DecodeArgs;

    #[test]
    fn validate_invalid_literal_is_not_an_error() {
        // when
        let outcome = execute(ResistorCommand::Validate {
            literal: "4k7".to_string(),
        })
        .unwrap();

        // then
        assert_eq!(outcome.to_string(), "invalid");
    }

    #[test]
    fn parse_prints_ohms() {
        // when
        let outcome = execute(ResistorCommand::Parse {
            literal: "4.7kΩ".to_string(),
        })
        .unwrap();

        // then
        assert_eq!(outcome.to_string(), "4700");
    }

    #[test]
    fn format_rounds_to_two_significant_digits() {
        // when
        let outcome = execute(ResistorCommand::Format {
            value: dec!(4749),
        })
        .unwrap();

        // then
        assert_eq!(outcome.to_string(), "4.7k");
    }

    #[test]
    fn encode_out_of_range() {
        // when
        let result = execute(ResistorCommand::Encode {
            literal: "0.047".to_string(),
            tolerance: cli::args::ResistorColorArg::Gold,
        });

        // then
        assert_eq!(
            result.unwrap_err().to_string(),
            "Resistance out of range for a 4-band code. exponent: -3, supported: -2..=9"
        );
    }

    #[test]
    fn decode_without_tolerance_meaning() {
        // given
        let args = DecodeArgs {
            bands: None,
            msb: Some(cli::args::ResistorColorArg::Red),
            lsb: Some(cli::args::ResistorColorArg::Red),
            multiplier: Some(cli::args::ResistorColorArg::Black),
            tolerance: Some(cli::args::ResistorColorArg::Black),
        };

        // when
        let outcome = execute(ResistorCommand::Decode(args)).unwrap();

        // then
        assert_eq!(outcome.to_string(), "22Ω");
    }
}
