use serde::{Deserialize, Serialize};
use std::fmt;

/// Place-of-supply classification for a shipping destination
///
/// Under GST, a sale delivered within the seller's home state attracts
/// CGST + SGST; a sale crossing a state boundary attracts IGST. The
/// classification here drives which split the tax calculator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    /// Delivery within the seller's home state (CGST + SGST)
    IntraState,
    /// Delivery outside the seller's home state (IGST)
    InterState,
}

impl Jurisdiction {
    /// Classify a free-text shipping address against the home-state keyword
    /// list.
    ///
    /// This is a case-insensitive substring heuristic, not a structured
    /// address lookup: an address that merely mentions a home-state keyword
    /// (in a landmark or note) classifies as intra-state. Keywords are
    /// expected to be lowercase. An empty or unrecognized address
    /// classifies as `InterState`; there is no "unknown" state.
    pub fn classify(address: &str, home_state_keywords: &[String]) -> Self {
        let address = address.to_lowercase();
        if home_state_keywords.iter().any(|kw| address.contains(kw)) {
            Jurisdiction::IntraState
        } else {
            Jurisdiction::InterState
        }
    }

    /// Render the place-of-supply label used on statutory exports,
    /// e.g. "Karnataka" / "Outside Karnataka".
    pub fn place_of_supply(&self, home_state: &str) -> String {
        match self {
            Jurisdiction::IntraState => home_state.to_string(),
            Jurisdiction::InterState => format!("Outside {}", home_state),
        }
    }

    pub fn is_intra_state(&self) -> bool {
        matches!(self, Jurisdiction::IntraState)
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jurisdiction::IntraState => write!(f, "intra_state"),
            Jurisdiction::InterState => write!(f, "inter_state"),
        }
    }
}
