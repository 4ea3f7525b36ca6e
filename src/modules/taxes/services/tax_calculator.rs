use crate::config::EngineConfig;
use crate::core::Jurisdiction;
use crate::modules::taxes::models::{GstSplit, TaxBreakdown};

/// TaxCalculator produces the canonical GST split for a single amount.
///
/// This is the one tax-breakdown primitive in the engine; both the order
/// pricing aggregator and the statutory report aggregator delegate to it
/// rather than carrying their own copy of the extraction formula.
///
/// Two directions exist as two named methods. Catalog prices in this
/// system are tax-inclusive, so most callers want
/// [`calculate_from_inclusive`](Self::calculate_from_inclusive); the
/// tax-on-top variant exists for amounts quoted net of GST. Callers pick
/// by name; there is deliberately no boolean switch between the two.
pub struct TaxCalculator {
    config: EngineConfig,
}

impl TaxCalculator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Extract the GST already contained in a tax-inclusive amount.
    ///
    /// taxable_amount = amount / (1 + rate)
    /// total_tax      = amount - taxable_amount
    ///
    /// `gst_percentage` of `None` resolves to the configured default.
    /// Degenerate input (zero amount, zero rate) yields a zeroed breakdown,
    /// never an error.
    pub fn calculate_from_inclusive(
        &self,
        amount: f64,
        gst_percentage: Option<f64>,
        shipping_address: &str,
    ) -> TaxBreakdown {
        let rate = self.resolve_percentage(gst_percentage) / 100.0;
        let taxable_amount = amount / (1.0 + rate);
        let total_tax = amount - taxable_amount;

        TaxBreakdown {
            taxable_amount,
            total_tax,
            split: self.split(total_tax, shipping_address),
        }
    }

    /// Add GST on top of a tax-exclusive amount.
    ///
    /// taxable_amount = amount
    /// total_tax      = amount × rate
    pub fn calculate_on_exclusive(
        &self,
        amount: f64,
        gst_percentage: Option<f64>,
        shipping_address: &str,
    ) -> TaxBreakdown {
        let rate = self.resolve_percentage(gst_percentage) / 100.0;
        let total_tax = amount * rate;

        TaxBreakdown {
            taxable_amount: amount,
            total_tax,
            split: self.split(total_tax, shipping_address),
        }
    }

    /// Jurisdiction for a shipping address under this calculator's
    /// home-state keyword list.
    pub fn jurisdiction(&self, shipping_address: &str) -> Jurisdiction {
        Jurisdiction::classify(shipping_address, &self.config.home_state_keywords)
    }

    fn resolve_percentage(&self, gst_percentage: Option<f64>) -> f64 {
        gst_percentage.unwrap_or(self.config.default_gst_percentage)
    }

    /// Intra-state tax divides exactly in half between CGST and SGST;
    /// inter-state tax lands wholly on IGST.
    fn split(&self, total_tax: f64, shipping_address: &str) -> GstSplit {
        match self.jurisdiction(shipping_address) {
            Jurisdiction::IntraState => GstSplit::IntraState {
                cgst: total_tax / 2.0,
                sgst: total_tax / 2.0,
            },
            Jurisdiction::InterState => GstSplit::InterState { igst: total_tax },
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
