use crate::delivery;
use crate::error::Result;
use crate::pricing;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
    Cash,
}

/// A single order to be priced. Orders are independent; nothing is retained
/// between calls.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub amount: Decimal,
    pub first_order: bool,
    pub method: PaymentMethod,
}

/// The priced result of an order: the tax-inclusive payable amount, the
/// delivery fee charged on it, and their sum.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Receipt {
    pub payable: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

impl Receipt {
    /// Prices an order end to end.
    ///
    /// The delivery fee is assessed on the post-discount, post-tax payable
    /// amount, not on the base amount.
    pub fn for_order(order: &Order) -> Result<Self> {
        let payable = pricing::process(order.amount, order.first_order, order.method)?;
        let delivery_fee = delivery::calculate_delivery_fee(payable);
        Ok(Self {
            payable,
            delivery_fee,
            total: payable + delivery_fee,
        })
    }
}
