use crate::error::{PricingError, Result};
use crate::money::round_to_cents;
use crate::order::PaymentMethod;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Flat 15% tax applied after all discounts.
const TAX_MULTIPLIER: Decimal = dec!(1.15);

/// Pre-tax multiplier for each (first order, payment method) combination.
///
/// The first-order and payment-method discounts do not compose as independent
/// percentages (first order + credit card is 15% off, not 10% then 5%), so
/// each of the six combinations names its multiplier directly.
fn combined_multiplier(first_order: bool, method: PaymentMethod) -> Decimal {
    match (first_order, method) {
        (true, PaymentMethod::CreditCard) => dec!(0.85),
        (true, PaymentMethod::PayPal) => dec!(0.88),
        (true, PaymentMethod::Cash) => dec!(0.90),
        (false, PaymentMethod::CreditCard) => dec!(0.95),
        (false, PaymentMethod::PayPal) => dec!(0.98),
        (false, PaymentMethod::Cash) => dec!(1.00),
    }
}

/// Computes the final payable amount for an order: discount, then tax, then
/// rounding to cents.
///
/// Fails with `InvalidAmount` when `amount` is not strictly positive.
pub fn process(amount: Decimal, first_order: bool, method: PaymentMethod) -> Result<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(PricingError::InvalidAmount(amount));
    }

    let discounted = amount * combined_multiplier(first_order, method);
    let taxed = discounted * TAX_MULTIPLIER;
    Ok(round_to_cents(taxed))
}
