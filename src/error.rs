use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("invalid order amount: {0} (must be positive)")]
    InvalidAmount(Decimal),
}

pub type Result<T> = std::result::Result<T, PricingError>;
