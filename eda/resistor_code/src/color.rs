use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::VariantArray;
use strum_macros::{Display, EnumString, VariantArray};

/// The colors printed on a resistor body.
///
/// Ordered by code, lowest first, the declaration order *is* the code table, see [`ResistorColor::from_code`].
/// Codes `0..=9` are digits, `-2..=9` are decade multipliers (silver = x0.01, gold = x0.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Display, EnumString, VariantArray)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResistorColor {
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
    #[strum(to_string = "gray", serialize = "grey")]
    Gray,
    White,
}

impl ResistorColor {
    /// The code of the first variant, used to index the table.
    const LOWEST_CODE: i32 = -2;

    pub fn code(&self) -> i32 {
        match self {
            ResistorColor::Silver => -2,
            ResistorColor::Gold => -1,
            ResistorColor::Black => 0,
            ResistorColor::Brown => 1,
            ResistorColor::Red => 2,
            ResistorColor::Orange => 3,
            ResistorColor::Yellow => 4,
            ResistorColor::Green => 5,
            ResistorColor::Blue => 6,
            ResistorColor::Violet => 7,
            ResistorColor::Gray => 8,
            ResistorColor::White => 9,
        }
    }

    /// Look up a color by code, `None` if the code is outside `-2..=9`.
    ///
    /// No band role is checked here, see [`BandRole::color_for_code`].
    pub fn from_code(code: i32) -> Option<Self> {
        let index = code.checked_sub(Self::LOWEST_CODE)?;
        usize::try_from(index)
            .ok()
            .and_then(|index| Self::VARIANTS.get(index))
            .copied()
    }

    /// sRGB swatch used when drawing the band.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ResistorColor::Silver => (192, 192, 192),
            ResistorColor::Gold => (255, 215, 0),
            ResistorColor::Black => (0, 0, 0),
            ResistorColor::Brown => (139, 69, 19),
            ResistorColor::Red => (255, 0, 0),
            ResistorColor::Orange => (255, 165, 0),
            ResistorColor::Yellow => (255, 255, 0),
            ResistorColor::Green => (0, 255, 0),
            ResistorColor::Blue => (0, 0, 255),
            ResistorColor::Violet => (148, 0, 211),
            ResistorColor::Gray => (136, 136, 136),
            ResistorColor::White => (255, 255, 255),
        }
    }

    /// Tolerance in percent when this color is used as the tolerance band.
    pub fn tolerance(&self) -> Option<Decimal> {
        match self {
            ResistorColor::Brown => Some(dec!(1)),
            ResistorColor::Red => Some(dec!(2)),
            ResistorColor::Green => Some(dec!(0.5)),
            ResistorColor::Blue => Some(dec!(0.25)),
            ResistorColor::Violet => Some(dec!(0.1)),
            ResistorColor::Gray => Some(dec!(0.05)),
            ResistorColor::Gold => Some(dec!(5)),
            ResistorColor::Silver => Some(dec!(10)),
            _ => None,
        }
    }
}

/// The position-dependent meaning of a band.
///
/// The same [`ResistorColor`] table serves every role, each role only accepts part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BandRole {
    Digit,
    Multiplier,
    Tolerance,
}

impl BandRole {
    pub fn codes(&self) -> RangeInclusive<i32> {
        match self {
            BandRole::Digit => 0..=9,
            BandRole::Multiplier | BandRole::Tolerance => -2..=9,
        }
    }

    pub fn accepts(&self, color: ResistorColor) -> bool {
        match self {
            BandRole::Tolerance => color.tolerance().is_some(),
            _ => self.codes().contains(&color.code()),
        }
    }

    /// Resolve a code for this role, `None` when the role does not allow the code.
    pub fn color_for_code(&self, code: i32) -> Option<ResistorColor> {
        if !self.codes().contains(&code) {
            return None;
        }

        ResistorColor::from_code(code).filter(|color| self.accepts(*color))
    }

    /// The colors a chooser offers for this role, in code order.
    pub fn palette(&self) -> Vec<ResistorColor> {
        ResistorColor::VARIANTS
            .iter()
            .copied()
            .filter(|color| self.accepts(*color))
            .collect()
    }

    /// The neighbouring color in this role's palette, one code up or down.
    ///
    /// Stepping past either end of the palette, or from a color the role does not accept, returns `color` unchanged,
    /// e.g. digits stop at black and white, the multiplier at silver and white.
    pub fn step(&self, color: ResistorColor, up: bool) -> ResistorColor {
        let palette = self.palette();

        let Some(index) = palette
            .iter()
            .position(|candidate| *candidate == color)
        else {
            return color;
        };

        let next = match up {
            true => index.checked_add(1),
            false => index.checked_sub(1),
        };

        next.and_then(|index| palette.get(index).copied())
            .unwrap_or(color)
    }
}

#[cfg(test)]
mod color_tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[test]
    fn variants_are_ordered_by_code() {
        // when
        let codes: Vec<i32> = ResistorColor::VARIANTS
            .iter()
            .map(ResistorColor::code)
            .collect();

        // then
        assert_eq!(codes, (-2..=9).collect::<Vec<_>>());

        // and
        let mut sorted = ResistorColor::VARIANTS.to_vec();
        sorted.sort();
        assert_eq!(sorted, ResistorColor::VARIANTS.to_vec());
    }

    #[test]
    fn from_code_is_inverse_of_code() {
        for color in ResistorColor::VARIANTS {
            assert_eq!(ResistorColor::from_code(color.code()), Some(*color));
        }
    }

    #[rstest]
    #[case(-3)]
    #[case(10)]
    #[case(i32::MIN)]
    #[case(i32::MAX)]
    fn from_code_out_of_table(#[case] code: i32) {
        assert_eq!(ResistorColor::from_code(code), None);
    }

    #[rstest]
    #[case("black", ResistorColor::Black)]
    #[case("Violet", ResistorColor::Violet)]
    #[case("GOLD", ResistorColor::Gold)]
    #[case("gray", ResistorColor::Gray)]
    #[case("grey", ResistorColor::Gray)]
    fn parse_name(#[case] name: &str, #[case] expected: ResistorColor) {
        assert_eq!(ResistorColor::from_str(name), Ok(expected));
    }

    #[test]
    fn parse_unknown_name() {
        assert!(ResistorColor::from_str("pink").is_err());
    }

    #[test]
    fn display_name() {
        assert_eq!(ResistorColor::Gray.to_string(), "gray");
        assert_eq!(ResistorColor::Silver.to_string(), "silver");
    }

    #[rstest]
    #[case(ResistorColor::Brown, (139, 69, 19))]
    #[case(ResistorColor::Gold, (255, 215, 0))]
    #[case(ResistorColor::Gray, (136, 136, 136))]
    fn rgb(#[case] color: ResistorColor, #[case] expected: (u8, u8, u8)) {
        assert_eq!(color.rgb(), expected);
    }

    #[rstest]
    #[case(ResistorColor::Gold, Some(dec!(5)))]
    #[case(ResistorColor::Silver, Some(dec!(10)))]
    #[case(ResistorColor::Brown, Some(dec!(1)))]
    #[case(ResistorColor::Black, None)]
    #[case(ResistorColor::Orange, None)]
    fn tolerance(#[case] color: ResistorColor, #[case] expected: Option<Decimal>) {
        assert_eq!(color.tolerance(), expected);
    }
}
