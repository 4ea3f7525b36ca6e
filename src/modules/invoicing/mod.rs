// Invoicing module

pub mod models;
pub mod services;

pub use models::ExtraCharge;
pub use services::reconcile_stored_total;
