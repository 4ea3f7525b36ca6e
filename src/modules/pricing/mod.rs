// Pricing module

pub mod models;
pub mod services;

pub use models::{OrderLine, OrderTotals, PriceBreakdown, ProductSnapshot};
pub use services::PriceCalculator;
