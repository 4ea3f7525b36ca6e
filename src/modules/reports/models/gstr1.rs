use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::taxes::GstSplit;

/// One item row of a GSTR-1 invoice breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gstr1Item {
    /// Product name as sold; empty when the record lacks one
    pub description: String,

    /// HSN classification code (placeholder when the product has none)
    pub hsn_code: String,

    pub quantity: i32,

    /// Tax-inclusive item value (unit price × quantity)
    pub gross_value: f64,

    /// GST rate the item was taxed at
    pub gst_rate: f64,

    /// Item value net of GST
    pub taxable_value: f64,

    /// CGST/SGST or IGST carried by this item
    #[serde(flatten)]
    pub split: GstSplit,
}

impl Gstr1Item {
    /// Total GST on this item, whichever heads it falls under
    pub fn tax_amount(&self) -> f64 {
        match self.split {
            GstSplit::IntraState { cgst, sgst } => cgst + sgst,
            GstSplit::InterState { igst } => igst,
        }
    }
}

/// Per-order invoice breakdown on a GSTR-1 export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gstr1Invoice {
    pub order_id: Uuid,

    /// Date the order was placed
    pub invoice_date: NaiveDate,

    /// Profile name, or the synthesized "Customer xxxxxxxx" placeholder
    pub customer_name: String,

    /// Home state name, or "Outside {home state}"
    pub place_of_supply: String,

    pub items: Vec<Gstr1Item>,
}

impl Gstr1Invoice {
    /// Sum of item taxable values, in item order
    pub fn taxable_value(&self) -> f64 {
        self.items.iter().map(|item| item.taxable_value).sum()
    }

    /// Sum of item GST amounts, in item order
    pub fn tax_amount(&self) -> f64 {
        self.items.iter().map(|item| item.tax_amount()).sum()
    }

    /// Taxable value plus tax: what the invoice billed in total
    pub fn invoice_value(&self) -> f64 {
        self.taxable_value() + self.tax_amount()
    }
}

/// Cross-invoice totals for the reporting period
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Gstr1Summary {
    pub invoice_count: i64,
    pub total_taxable_value: f64,
    pub total_cgst: f64,
    pub total_sgst: f64,
    pub total_igst: f64,
    /// total_cgst + total_sgst + total_igst
    pub total_tax_amount: f64,
    /// total_taxable_value + total_tax_amount
    pub total_invoice_value: f64,
}

/// The full export snapshot the statutory collaborator persists for audit:
/// period bounds, every per-invoice breakdown, and the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gstr1Report {
    /// First day of the reporting period (inclusive)
    pub period_start: NaiveDate,
    /// Last day of the reporting period (inclusive)
    pub period_end: NaiveDate,
    pub invoices: Vec<Gstr1Invoice>,
    pub summary: Gstr1Summary,
}

impl Gstr1Report {
    /// Check if the report covers no invoices at all
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}
