use tracing::trace;

use crate::value::parse;

/// The twelve preferred significands of each decade (IEC 60063 E12).
pub const E12: [u8; 12] = [10, 12, 15, 18, 22, 27, 33, 39, 47, 56, 68, 82];

pub fn is_e12(significand: u8) -> bool {
    E12.contains(&significand)
}

/// true if the literal is valid and its two significant digits are an E12 value.
///
/// Only the digits matter, `"1"`, `"10"` and `"1M"` are all `10` and therefore standard.
pub fn is_standard(literal: &str) -> bool {
    let standard = parse(literal)
        .and_then(|value| value.decompose())
        .map(|decomposition| is_e12(decomposition.significand()))
        .unwrap_or(false);

    trace!("classified resistance. literal: '{}', standard: {}", literal, standard);

    standard
}

#[cfg(test)]
mod is_standard_tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("10", true)]
    #[case("11", false)]
    #[case("1", true)]
    #[case("1Ω", true)]
    #[case("4.7k", true)]
    #[case("4.7kΩ", true)]
    #[case("4.8k", false)]
    #[case("33", true)]
    #[case(".033", true)]
    #[case("0.033", true)]
    #[case("82M", true)]
    #[case("820", true)]
    #[case("91", false)]
    #[case("68.0", true)]
    // decades outside the 4-band range still classify by digits
    #[case("0.01", true)]
    #[case("", false)]
    #[case("0", false)]
    #[case("abc", false)]
    #[case("471", false)]
    fn is_standard(#[case] literal: &str, #[case] expected: bool) {
        assert_eq!(super::is_standard(literal), expected);
    }

    #[test]
    fn every_e12_significand_is_standard() {
        for significand in E12 {
            assert!(super::is_standard(&significand.to_string()));
        }
    }

    #[test]
    fn e12_count_per_decade() {
        // then
        assert_eq!((10..=99_u8).filter(|significand| is_e12(*significand)).count(), 12);
    }
}
