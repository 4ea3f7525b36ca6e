//! Presentation-side money helpers.
//!
//! Internal calculation keeps full double precision with a fixed summation
//! order so repeated runs over the same input reconcile exactly against
//! stored totals. Rounding and currency formatting happen only at the
//! display boundary, through the helpers here.

/// Tolerance for comparing monetary values that went through independent
/// floating-point computation paths.
pub const MONEY_EPSILON: f64 = 1e-6;

/// Compare two monetary values within [`MONEY_EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < MONEY_EPSILON
}

/// Round to 2 decimal places (paise), half away from zero.
///
/// Display-only: never fed back into totals.
pub fn round_display(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format an amount as rupees with Indian digit grouping,
/// e.g. `1234567.89` → `"₹12,34,567.89"`.
pub fn format_inr(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let paise = (amount.abs() * 100.0).round() as i128;
    let rupees = paise / 100;
    let fraction = paise % 100;
    format!("{}₹{}.{:02}", sign, group_indian(rupees), fraction)
}

/// Indian grouping: last three digits, then pairs (lakh/crore).
fn group_indian(value: i128) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
