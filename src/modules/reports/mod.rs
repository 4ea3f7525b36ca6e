// Reports module

pub mod models;
pub mod services;

pub use models::{Gstr1Invoice, Gstr1Item, Gstr1Report, Gstr1Summary, OrderItemRecord, OrderRecord};
pub use services::Gstr1Service;
