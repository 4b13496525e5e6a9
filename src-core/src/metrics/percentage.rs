use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Percentage of `numerator` over `denominator`, rounded half-up at the
/// hundredths place. A zero denominator yields zero, never an error.
/// Every percentage metric goes through here so the zero-denominator and
/// rounding rules live in exactly one place.
pub fn percentage_of(numerator: i64, denominator: i64) -> Decimal {
    if denominator == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(numerator) * dec!(100) / Decimal::from(denominator))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders a percentage for storage: trailing zeros stripped, so 40.00
/// becomes "40" and 0.00 becomes "0", while 66.67 stays "66.67".
pub fn format_percentage(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_yields_zero() {
        assert_eq!(percentage_of(5, 0), Decimal::ZERO);
        assert_eq!(format_percentage(percentage_of(5, 0)), "0");
    }

    #[test]
    fn rounds_half_up_at_hundredths() {
        // 33335 / 100000 * 100 = 33.335 exactly
        assert_eq!(format_percentage(percentage_of(33335, 100000)), "33.34");
        // 2 / 3 * 100 = 66.666... -> 66.67
        assert_eq!(format_percentage(percentage_of(2, 3)), "66.67");
        // 1 / 3 * 100 = 33.333... -> 33.33
        assert_eq!(format_percentage(percentage_of(1, 3)), "33.33");
    }

    #[test]
    fn strips_trailing_zeros() {
        assert_eq!(format_percentage(percentage_of(4, 10)), "40");
        assert_eq!(format_percentage(percentage_of(1, 2)), "50");
        assert_eq!(format_percentage(percentage_of(1, 8)), "12.5");
        assert_eq!(format_percentage(percentage_of(10, 10)), "100");
    }

    #[test]
    fn never_rounds_the_count_only_the_percentage() {
        let pct = percentage_of(7, 9);
        assert_eq!(format_percentage(pct), "77.78");
        // value at most two fractional digits
        assert!(pct.scale() <= 2);
    }
}
