use crate::core::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Engine configuration
///
/// Everything the calculators need to know about the seller: the default
/// GST rate applied when a product carries none, the home state driving the
/// CGST+SGST vs IGST decision, and the HSN placeholder used on statutory
/// exports when a product record lacks a code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// GST percentage applied when a product has no rate of its own
    pub default_gst_percentage: f64,
    /// Seller's home state, as rendered on place-of-supply labels
    pub home_state: String,
    /// Lowercase substrings that mark a shipping address as home-state
    pub home_state_keywords: Vec<String>,
    /// HSN code reported when a product record lacks one
    pub fallback_hsn_code: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_gst_percentage: 18.0,
            home_state: "Karnataka".to_string(),
            home_state_keywords: vec![
                "karnataka".to_string(),
                "bengaluru".to_string(),
                "bangalore".to_string(),
            ],
            fallback_hsn_code: "0000".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults above for anything unset.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let config = Self {
            default_gst_percentage: match env::var("GST_DEFAULT_RATE") {
                Ok(raw) => raw.parse().map_err(|_| {
                    AppError::configuration("Invalid GST_DEFAULT_RATE")
                })?,
                Err(_) => defaults.default_gst_percentage,
            },
            home_state: env::var("GST_HOME_STATE")
                .unwrap_or(defaults.home_state),
            home_state_keywords: match env::var("GST_HOME_STATE_KEYWORDS") {
                Ok(raw) => raw
                    .split(',')
                    .map(|kw| kw.trim().to_lowercase())
                    .filter(|kw| !kw.is_empty())
                    .collect(),
                Err(_) => defaults.home_state_keywords,
            },
            fallback_hsn_code: env::var("GST_FALLBACK_HSN")
                .unwrap_or(defaults.fallback_hsn_code),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_gst_percentage < 0.0 {
            return Err(AppError::configuration(
                "Default GST percentage must be non-negative",
            ));
        }

        if self.home_state_keywords.is_empty() {
            return Err(AppError::configuration(
                "At least one home-state keyword is required",
            ));
        }

        if self.fallback_hsn_code.trim().is_empty() {
            return Err(AppError::configuration(
                "Fallback HSN code cannot be empty",
            ));
        }

        Ok(())
    }
}
