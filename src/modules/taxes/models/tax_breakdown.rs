use serde::{Deserialize, Serialize};

use crate::core::Jurisdiction;

/// How the GST amount divides between tax heads.
///
/// Exactly one shape exists per breakdown: intra-state sales carry the
/// CGST/SGST pair, inter-state sales carry IGST alone. Serialization is
/// untagged, so consumers see flat `cgst`/`sgst` or `igst` fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GstSplit {
    /// CGST + SGST, each exactly half of the total tax
    IntraState { cgst: f64, sgst: f64 },
    /// The whole tax as IGST
    InterState { igst: f64 },
}

/// Canonical tax split for a single money amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Value of the supply, net of GST
    pub taxable_amount: f64,

    /// Total GST on the supply (CGST + SGST, or IGST)
    pub total_tax: f64,

    /// Division of `total_tax` between tax heads
    #[serde(flatten)]
    pub split: GstSplit,
}

impl TaxBreakdown {
    /// Jurisdiction this breakdown was computed under
    pub fn jurisdiction(&self) -> Jurisdiction {
        match self.split {
            GstSplit::IntraState { .. } => Jurisdiction::IntraState,
            GstSplit::InterState { .. } => Jurisdiction::InterState,
        }
    }

    pub fn cgst(&self) -> Option<f64> {
        match self.split {
            GstSplit::IntraState { cgst, .. } => Some(cgst),
            GstSplit::InterState { .. } => None,
        }
    }

    pub fn sgst(&self) -> Option<f64> {
        match self.split {
            GstSplit::IntraState { sgst, .. } => Some(sgst),
            GstSplit::InterState { .. } => None,
        }
    }

    pub fn igst(&self) -> Option<f64> {
        match self.split {
            GstSplit::IntraState { .. } => None,
            GstSplit::InterState { igst } => Some(igst),
        }
    }
}
