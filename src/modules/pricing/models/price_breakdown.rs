use serde::{Deserialize, Serialize};

/// Fully priced line for one product at one quantity.
///
/// Price fields (`base_price`, `discount_amount`, `discounted_price`) are
/// per unit; tax fields (`taxable_amount`, `tax_amount`, `final_price`)
/// cover the whole line. `final_price` is tax-inclusive and always equals
/// `taxable_amount + tax_amount`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// List price per unit
    pub base_price: f64,
    /// Discount per unit (0 when not discounted)
    pub discount_amount: f64,
    /// Charged price per unit
    pub discounted_price: f64,
    /// Line value net of GST
    pub taxable_amount: f64,
    /// GST on the line
    pub tax_amount: f64,
    /// Tax-inclusive line total
    pub final_price: f64,
    /// GST rate the line was taxed at
    pub gst_percentage: f64,
}

/// Order-level totals across all lines plus delivery
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Sum of list price × quantity over all lines
    pub total_base_amount: f64,
    /// Sum of per-unit discount × quantity over all lines
    pub total_discount_amount: f64,
    /// Sum of line taxable values
    pub total_taxable_amount: f64,
    /// Sum of line GST amounts
    pub total_tax_amount: f64,
    /// Sum of tax-inclusive line totals
    pub total_final_price: f64,
    /// Delivery charge, tax-free in this model
    pub delivery_price: f64,
    /// total_final_price + delivery_price
    pub grand_total: f64,
}
