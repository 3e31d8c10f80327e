use rust_decimal::Decimal;

use crate::literal::Multiplier;
use crate::value::round_significant;

/// Render a resistance in engineering notation with two significant digits, e.g. `4.7k`, `22M`, `0.47`.
///
/// The result is a valid literal and parses back to the same canonical value.
/// Values of a million or more use `M`, a thousand or more use `k`.
pub fn format_engineering(value: Decimal) -> String {
    let value = round_significant(value).unwrap_or(value);

    let multiplier = if value >= Multiplier::Mega.factor() {
        Multiplier::Mega
    } else if value >= Multiplier::Kilo.factor() {
        Multiplier::Kilo
    } else {
        Multiplier::Unit
    };

    let scaled = value / multiplier.factor();
    let scaled = round_significant(scaled)
        .unwrap_or(scaled)
        .normalize();

    format!("{}{}", scaled, multiplier.symbol())
}

#[cfg(test)]
mod format_engineering_tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::value::parse;

    #[rstest]
    #[case(dec!(0.1), "0.1")]
    #[case(dec!(0.10), "0.1")]
    #[case(dec!(0.47), "0.47")]
    #[case(dec!(1), "1")]
    #[case(dec!(4.7), "4.7")]
    #[case(dec!(10), "10")]
    #[case(dec!(470), "470")]
    #[case(dec!(470.0), "470")]
    #[case(dec!(1000), "1k")]
    #[case(dec!(4700), "4.7k")]
    #[case(dec!(47000), "47k")]
    #[case(dec!(470000), "470k")]
    #[case(dec!(1000000), "1M")]
    #[case(dec!(2200000), "2.2M")]
    #[case(dec!(99000000000), "99000M")]
    // not canonical
    #[case(dec!(4749), "4.7k")]
    #[case(dec!(999999), "1M")]
    fn format_engineering(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(super::format_engineering(value), expected);
    }

    #[test]
    fn round_trip_through_parse() {
        for exponent in -2..=9 {
            for significand in 10..=99_u32 {
                // given
                let value = Decimal::from(significand) * Decimal::new(1, 2) * Decimal::from(10_i64.pow((exponent + 2) as u32));

                // when
                let text = super::format_engineering(value);
                let result = parse(&text);

                // then
                assert_eq!(result.map(Decimal::from), Ok(value), "text: {}", text);
            }
        }
    }
}
