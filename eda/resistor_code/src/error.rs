use rust_decimal::Decimal;
use thiserror::Error;

use crate::color::{BandRole, ResistorColor};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResistanceError {
    #[error("Invalid resistance: '{0}'")]
    InvalidLiteral(String),

    /// The value is legal, but a 4-band code cannot express its decade.
    #[error("Resistance out of range for a 4-band code. exponent: {exponent}, supported: -2..=9")]
    OutOfRange { exponent: i32 },

    #[error("Resistance must be greater than zero, found: {0}")]
    ZeroOrNegative(Decimal),

    #[error("Color {color} cannot be used as a {role} band")]
    InvalidBand { role: BandRole, color: ResistorColor },

    #[error("No color for code {code} in a {role} band")]
    CodeOutOfRange { role: BandRole, code: i32 },

    #[error("Resistance cannot be represented: '{0}'")]
    Unrepresentable(String),
}
