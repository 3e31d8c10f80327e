//! Grammar for human-entered resistance literals, e.g. `4.7k`, `470Ω`, `.47`, `2M`.
//!
//! A literal is a number with at most two significant digits followed by an optional
//! SI multiplier and an optional ohm sign. Three mutually exclusive shapes are accepted:
//!
//! | Shape            | Pattern                          | Examples              |
//! |------------------|----------------------------------|-----------------------|
//! | one to nine      | `[1-9]([.][0-9]0*)?`             | `4`, `4.7`, `4.70`    |
//! | ten or greater   | `[1-9][0-9]0*(\.0)?0*`           | `47`, `470`, `47.0`   |
//! | less than one    | `0?\.0*[1-9][0-9]?0*`            | `.047`, `0.047`, `.47`|

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const OHM_SIGN: char = '\u{03A9}';

const MULTIPLIERS: &str = "[kM]?";

static SHAPES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    let suffix = format!("{}{}?$", MULTIPLIERS, OHM_SIGN);
    // `\d` would also match non-ascii digits, hence `[0-9]`.
    [
        format!("^[1-9]([.][0-9]0*)?{}", suffix),
        format!("^[1-9][0-9]0*(\\.0)?0*{}", suffix),
        format!("^0?\\.0*[1-9][0-9]?0*{}", suffix),
    ]
    .map(|pattern| Regex::new(&pattern).unwrap())
});

/// SI multiplier marker at the end of a literal (before the optional ohm sign).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplier {
    Unit,
    Kilo,
    Mega,
}

impl Multiplier {
    pub fn factor(&self) -> Decimal {
        match self {
            Multiplier::Unit => dec!(1),
            Multiplier::Kilo => dec!(1000),
            Multiplier::Mega => dec!(1000000),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Multiplier::Unit => "",
            Multiplier::Kilo => "k",
            Multiplier::Mega => "M",
        }
    }
}

pub fn is_valid(text: &str) -> bool {
    SHAPES
        .iter()
        .any(|shape| shape.is_match(text))
}

/// Split a literal into its numeric part and multiplier.
///
/// The literal must already be valid, the numeric part is not checked.
pub(crate) fn split(text: &str) -> (&str, Multiplier) {
    let text = text
        .strip_suffix(OHM_SIGN)
        .unwrap_or(text);

    if let Some(number) = text.strip_suffix('k') {
        (number, Multiplier::Kilo)
    } else if let Some(number) = text.strip_suffix('M') {
        (number, Multiplier::Mega)
    } else {
        (text, Multiplier::Unit)
    }
}

#[cfg(test)]
mod is_valid_tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    // one to nine
    #[case("1", true)]
    #[case("4", true)]
    #[case("4.7", true)]
    #[case("4.70", true)]
    #[case("4.700k", true)]
    #[case("4.7Ω", true)]
    #[case("4.7kΩ", true)]
    #[case("4.7MΩ", true)]
    #[case("4.", false)]
    #[case("4.77", false)]
    #[case("4.07", false)]
    // ten or greater
    #[case("10", true)]
    #[case("47", true)]
    #[case("470", true)]
    #[case("47.0", true)]
    #[case("470.00", true)]
    #[case("990", true)]
    #[case("999", false)]
    #[case("33k", true)]
    #[case("22MΩ", true)]
    #[case("471", false)]
    #[case("47.1", false)]
    #[case("47.", false)]
    // less than one
    #[case(".47", true)]
    #[case("0.47", true)]
    #[case(".047", true)]
    #[case("0.047", true)]
    #[case("0.4700", true)]
    #[case(".1k", true)]
    #[case("0.001Ω", true)]
    #[case("00.47", false)]
    #[case("0.471", false)]
    #[case("0.", false)]
    // never valid
    #[case("", false)]
    #[case("0", false)]
    #[case("0.0", false)]
    #[case("00", false)]
    #[case("Ω", false)]
    #[case("k", false)]
    #[case("-47", false)]
    #[case("+47", false)]
    #[case("4.7e3", false)]
    #[case("4.7K", false)]
    #[case("4.7m", false)]
    #[case("4.7kk", false)]
    #[case("4.7kM", false)]
    #[case("4.7Ωk", false)]
    #[case("4.7ΩΩ", false)]
    #[case(" 47", false)]
    #[case("47 ", false)]
    #[case("4,7", false)]
    #[case("4k7", false)]
    #[case("٤٧", false)]
    fn is_valid(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(super::is_valid(text), expected);
    }
}
