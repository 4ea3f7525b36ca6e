use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::core::{AppError, Result};
use crate::modules::reports::models::{
    Gstr1Invoice, Gstr1Item, Gstr1Report, Gstr1Summary, OrderRecord,
};
use crate::modules::taxes::{GstSplit, TaxCalculator};

/// Service building GSTR-1-style statutory exports from order history.
///
/// Works the same per-line tax primitive as live cart pricing, but over a
/// bulk order-history batch: each order becomes an invoice breakdown, and
/// the whole batch folds into one summary. Absent optional fields degrade
/// to documented placeholders: a missing profile name, HSN code, or
/// shipping address never fails the export.
pub struct Gstr1Service {
    config: EngineConfig,
    tax_calculator: TaxCalculator,
}

impl Gstr1Service {
    pub fn new(config: EngineConfig) -> Self {
        let tax_calculator = TaxCalculator::new(config.clone());
        Self {
            config,
            tax_calculator,
        }
    }

    /// Build the invoice breakdown for one order.
    ///
    /// Each item is taxed at its own rate on its tax-inclusive
    /// `price × quantity`; the order's single shipping address decides the
    /// split for every item. Placeholders: customer name falls back to
    /// "Customer {id prefix}", HSN to the configured code.
    pub fn build_invoice(&self, order: &OrderRecord) -> Gstr1Invoice {
        let address = order.shipping_address.as_deref().unwrap_or("");
        let place_of_supply = self
            .tax_calculator
            .jurisdiction(address)
            .place_of_supply(&self.config.home_state);

        let customer_name = order
            .customer_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| synthesize_customer_name(&order.id));

        let items = order
            .items
            .iter()
            .map(|item| {
                let gross_value = item.price * f64::from(item.quantity);
                let breakdown = self.tax_calculator.calculate_from_inclusive(
                    gross_value,
                    item.gst_percentage,
                    address,
                );

                Gstr1Item {
                    description: item.product_name.clone().unwrap_or_default(),
                    hsn_code: item
                        .hsn_code
                        .clone()
                        .filter(|code| !code.trim().is_empty())
                        .unwrap_or_else(|| self.config.fallback_hsn_code.clone()),
                    quantity: item.quantity,
                    gross_value,
                    gst_rate: item
                        .gst_percentage
                        .unwrap_or(self.config.default_gst_percentage),
                    taxable_value: breakdown.taxable_amount,
                    split: breakdown.split,
                }
            })
            .collect();

        Gstr1Invoice {
            order_id: order.id,
            invoice_date: order.created_at.date_naive(),
            customer_name,
            place_of_supply,
            items,
        }
    }

    /// Fold invoice breakdowns into the period summary.
    ///
    /// Walks every item of every invoice in list order, accumulating
    /// taxable value and whichever tax heads each item carries; then
    ///
    /// total_tax_amount    = total_cgst + total_sgst + total_igst
    /// total_invoice_value = total_taxable_value + total_tax_amount
    pub fn aggregate(&self, invoices: &[Gstr1Invoice]) -> Gstr1Summary {
        let mut summary = Gstr1Summary {
            invoice_count: invoices.len() as i64,
            ..Gstr1Summary::default()
        };

        for invoice in invoices {
            for item in &invoice.items {
                summary.total_taxable_value += item.taxable_value;
                match item.split {
                    GstSplit::IntraState { cgst, sgst } => {
                        summary.total_cgst += cgst;
                        summary.total_sgst += sgst;
                    }
                    GstSplit::InterState { igst } => {
                        summary.total_igst += igst;
                    }
                }
            }
        }

        summary.total_tax_amount =
            summary.total_cgst + summary.total_sgst + summary.total_igst;
        summary.total_invoice_value =
            summary.total_taxable_value + summary.total_tax_amount;

        summary
    }

    /// Generate the full export snapshot for a reporting period.
    ///
    /// Orders outside the inclusive `[period_start, period_end]` window are
    /// dropped even if the caller's query was sloppier than its bounds, so
    /// the persisted snapshot can never carry out-of-period invoices.
    ///
    /// # Errors
    /// `AppError::Validation` when `period_start > period_end`.
    pub fn generate(
        &self,
        orders: &[OrderRecord],
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Result<Gstr1Report> {
        if period_start > period_end {
            return Err(AppError::validation(format!(
                "period_start ({}) must be before or equal to period_end ({})",
                period_start, period_end
            )));
        }

        info!(
            "Generating GSTR-1 report: start={}, end={}, orders={}",
            period_start,
            period_end,
            orders.len()
        );

        let invoices: Vec<Gstr1Invoice> = orders
            .iter()
            .filter(|order| {
                let placed_on = order.created_at.date_naive();
                placed_on >= period_start && placed_on <= period_end
            })
            .map(|order| self.build_invoice(order))
            .collect();

        let summary = self.aggregate(&invoices);

        if invoices.is_empty() {
            warn!(
                "Empty GSTR-1 report generated for period {} to {}",
                period_start, period_end
            );
        } else {
            info!(
                "GSTR-1 report generated: {} invoices, invoice value {:.2}",
                summary.invoice_count, summary.total_invoice_value
            );
        }

        Ok(Gstr1Report {
            period_start,
            period_end,
            invoices,
            summary,
        })
    }
}

impl Default for Gstr1Service {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Display-name placeholder for orders whose profile has no name: the
/// first 8 hex characters of the order id are enough to correlate with the
/// order row without leaking the full id into an export.
fn synthesize_customer_name(order_id: &Uuid) -> String {
    let id = order_id.simple().to_string();
    format!("Customer {}", &id[..8])
}
