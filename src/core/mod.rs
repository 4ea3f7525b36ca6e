pub mod error;
pub mod jurisdiction;
pub mod money;

pub use error::{AppError, Result};
pub use jurisdiction::Jurisdiction;
