/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main engine error type
///
/// The calculation paths are infallible by contract: degenerate numeric
/// input propagates arithmetically instead of failing. Only report-period
/// validation and configuration loading can produce an error.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
