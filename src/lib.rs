pub mod delivery;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod reader;
pub mod writer;
