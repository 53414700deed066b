use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to cents using half-up semantics.
///
/// The payment oracle expects exact-half cases to round away from zero
/// (0.115 -> 0.12), which is not what `round_dp`'s banker's rounding does.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_up_at_midpoint() {
        assert_eq!(round_to_cents(dec!(0.115)), dec!(0.12));
        assert_eq!(round_to_cents(dec!(56.925)), dec!(56.93));
    }

    #[test]
    fn test_round_below_midpoint_stays_down() {
        assert_eq!(round_to_cents(dec!(0.0115)), dec!(0.01));
        assert_eq!(round_to_cents(dec!(33.693044)), dec!(33.69));
    }

    #[test]
    fn test_round_leaves_exact_cents_alone() {
        assert_eq!(round_to_cents(dec!(115.00)), dec!(115.00));
    }
}
