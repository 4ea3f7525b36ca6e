use serde::{Deserialize, Serialize};

/// A charge on the stored order total that the line items do not explain,
/// surfaced as its own invoice row (COD surcharge, rounding adjustment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraCharge {
    /// Invoice row label, e.g. "COD Charges"
    pub label: String,
    /// Positive amount of the discrepancy
    pub amount: f64,
}

impl ExtraCharge {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}
