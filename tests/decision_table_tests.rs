use orderpay::order::PaymentMethod;
use orderpay::pricing;
use rust_decimal_macros::dec;

#[test]
fn test_first_order_credit_card() {
    // (200 * 0.85) * 1.15
    let result = pricing::process(dec!(200.0), true, PaymentMethod::CreditCard).unwrap();
    assert_eq!(result, dec!(195.50));
}

#[test]
fn test_first_order_paypal() {
    // (200 * 0.88) * 1.15
    let result = pricing::process(dec!(200.0), true, PaymentMethod::PayPal).unwrap();
    assert_eq!(result, dec!(202.40));
}

#[test]
fn test_first_order_cash() {
    // (200 * 0.90) * 1.15
    let result = pricing::process(dec!(200.0), true, PaymentMethod::Cash).unwrap();
    assert_eq!(result, dec!(207.00));
}

#[test]
fn test_repeat_order_credit_card() {
    // (200 * 0.95) * 1.15
    let result = pricing::process(dec!(200.0), false, PaymentMethod::CreditCard).unwrap();
    assert_eq!(result, dec!(218.50));
}

#[test]
fn test_repeat_order_paypal() {
    // (200 * 0.98) * 1.15
    let result = pricing::process(dec!(200.0), false, PaymentMethod::PayPal).unwrap();
    assert_eq!(result, dec!(225.40));
}

#[test]
fn test_repeat_order_cash() {
    // 200 * 1.15, no discount
    let result = pricing::process(dec!(200.0), false, PaymentMethod::Cash).unwrap();
    assert_eq!(result, dec!(230.00));
}

#[test]
fn test_hundred_base_amounts() {
    let creditcard = pricing::process(dec!(100.0), true, PaymentMethod::CreditCard).unwrap();
    assert_eq!(creditcard, dec!(97.75));

    let paypal = pricing::process(dec!(100.0), false, PaymentMethod::PayPal).unwrap();
    assert_eq!(paypal, dec!(112.70));

    let cash = pricing::process(dec!(100.0), true, PaymentMethod::Cash).unwrap();
    assert_eq!(cash, dec!(103.50));
}
