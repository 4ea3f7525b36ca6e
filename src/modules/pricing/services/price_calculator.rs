use tracing::debug;

use crate::config::EngineConfig;
use crate::modules::pricing::models::{OrderLine, OrderTotals, PriceBreakdown, ProductSnapshot};
use crate::modules::taxes::TaxCalculator;

/// PriceCalculator turns product snapshots into priced lines and order
/// totals.
///
/// Every line goes through the shared [`TaxCalculator`] in inclusive mode:
/// catalog prices already contain GST, so the tax is extracted, never added
/// on top. One shipping address applies to the whole order; mixed
/// jurisdictions within an order are not supported.
pub struct PriceCalculator {
    config: EngineConfig,
    tax_calculator: TaxCalculator,
}

impl PriceCalculator {
    pub fn new(config: EngineConfig) -> Self {
        let tax_calculator = TaxCalculator::new(config.clone());
        Self {
            config,
            tax_calculator,
        }
    }

    /// Price one product line.
    ///
    /// A present discounted price always wins (see [`ProductSnapshot`]).
    /// The effective unit price × quantity is treated as tax-inclusive and
    /// split through the tax calculator at the product's own GST rate.
    ///
    /// Quantity is not validated: zero or negative values propagate
    /// arithmetically into zero or negative totals. Callers relying on
    /// sane output must validate upstream.
    pub fn calculate_product_price(
        &self,
        product: &ProductSnapshot,
        quantity: i32,
        shipping_address: &str,
    ) -> PriceBreakdown {
        let line_total = product.effective_price() * f64::from(quantity);
        let breakdown = self.tax_calculator.calculate_from_inclusive(
            line_total,
            product.gst_percentage,
            shipping_address,
        );

        PriceBreakdown {
            base_price: product.price,
            discount_amount: product.unit_discount(),
            discounted_price: product.effective_price(),
            taxable_amount: breakdown.taxable_amount,
            tax_amount: breakdown.total_tax,
            final_price: line_total,
            gst_percentage: product
                .gst_percentage
                .unwrap_or(self.config.default_gst_percentage),
        }
    }

    /// Aggregate an order: per-line pricing summed in list order, plus the
    /// delivery charge.
    ///
    /// grand_total = Σ final_price + delivery_price
    ///
    /// Delivery is tax-free here; the shipping-rate lookup that produced
    /// it owns its own tax treatment. Summation follows list order so
    /// repeated runs over the same lines reproduce the same totals.
    /// An empty order yields zero totals, not an error.
    pub fn calculate_order_totals(
        &self,
        lines: &[OrderLine],
        shipping_address: &str,
        delivery_price: f64,
    ) -> OrderTotals {
        let mut totals = OrderTotals {
            delivery_price,
            ..OrderTotals::default()
        };

        for line in lines {
            let priced = self.calculate_product_price(&line.product, line.quantity, shipping_address);
            let quantity = f64::from(line.quantity);

            totals.total_base_amount += priced.base_price * quantity;
            totals.total_discount_amount += priced.discount_amount * quantity;
            totals.total_taxable_amount += priced.taxable_amount;
            totals.total_tax_amount += priced.tax_amount;
            totals.total_final_price += priced.final_price;
        }

        totals.grand_total = totals.total_final_price + delivery_price;

        debug!(
            lines = lines.len(),
            grand_total = totals.grand_total,
            "calculated order totals"
        );

        totals
    }
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
