use tracing::debug;

use crate::core::money::MONEY_EPSILON;
use crate::modules::invoicing::models::ExtraCharge;
use crate::modules::pricing::models::OrderTotals;

/// Reconcile a recomputed order total against the total persisted at
/// checkout.
///
/// The stored total is the source of truth. When it exceeds the recomputed
/// grand total, the difference was charged outside the line items and comes
/// back as an [`ExtraCharge`] so the invoice still adds up. Attribution is
/// a payment-method heuristic: cash-on-delivery orders label the gap
/// "COD Charges", anything else "Additional Charges".
///
/// A stored total at or below the recomputed one returns `None`; the
/// engine never invents a negative charge.
pub fn reconcile_stored_total(
    recomputed: &OrderTotals,
    stored_total: f64,
    payment_method: Option<&str>,
) -> Option<ExtraCharge> {
    let discrepancy = stored_total - recomputed.grand_total;
    if discrepancy <= MONEY_EPSILON {
        return None;
    }

    let is_cod = payment_method
        .map(|method| {
            let method = method.to_lowercase();
            method.contains("cod") || method.contains("cash")
        })
        .unwrap_or(false);

    let label = if is_cod { "COD Charges" } else { "Additional Charges" };

    debug!(discrepancy, label, "stored total exceeds recomputed total");

    Some(ExtraCharge::new(label, discrepancy))
}
