use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Orders at or above this payable amount ship for free.
const FREE_DELIVERY_THRESHOLD: Decimal = dec!(50.0);

const FLAT_FEE: Decimal = dec!(5.0);

/// Returns the delivery fee for a payable amount: a flat fee below the
/// threshold, free at or above it.
///
/// Never fails; non-positive amounts fall into the below-threshold branch.
pub fn calculate_delivery_fee(amount: Decimal) -> Decimal {
    if amount < FREE_DELIVERY_THRESHOLD {
        FLAT_FEE
    } else {
        Decimal::ZERO
    }
}
