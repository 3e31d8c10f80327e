use clap::ValueEnum;
use resistor_code::ResistorColor;

/// Args decouple of CLI arg handling requirements from the internal data structures

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum ResistorColorArg {
    Silver,
    Gold,
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    #[value(alias("grey"))]
    Gray,
    White,
}

impl From<ResistorColorArg> for ResistorColor {
    fn from(value: ResistorColorArg) -> Self {
        match value {
            ResistorColorArg::Silver => Self::Silver,
            ResistorColorArg::Gold => Self::Gold,
            ResistorColorArg::Black => Self::Black,
            ResistorColorArg::Brown => Self::Brown,
            ResistorColorArg::Red => Self::Red,
            ResistorColorArg::Orange => Self::Orange,
            ResistorColorArg::Yellow => Self::Yellow,
            ResistorColorArg::Green => Self::Green,
            ResistorColorArg::Blue => Self::Blue,
            ResistorColorArg::Violet => Self::Violet,
            ResistorColorArg::Gray => Self::Gray,
            ResistorColorArg::White => Self::White,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum OutputArg {
    #[default]
    Text,
    Json,
}
