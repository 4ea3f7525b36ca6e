// Order pricing tests: discount precedence, per-line tax extraction, and
// order-total additivity, including the stored-total reconciliation path.
//
// Properties tested:
// 1. Order totals equal the sum of per-line breakdowns, in list order
// 2. grand_total = total_final_price + delivery_price
// 3. A present discounted_price always wins, whatever its value
// 4. Empty orders and degenerate quantities propagate, never error

use proptest::prelude::*;

use gstkart::core::money::approx_eq;
use gstkart::invoicing::reconcile_stored_total;
use gstkart::pricing::{OrderLine, PriceCalculator, ProductSnapshot};

const INTRA_STATE_ADDR: &str = "45 Gandhi Bazaar, Basavanagudi, Bengaluru";
const INTER_STATE_ADDR: &str = "Flat 7B, Marine Drive, Mumbai, Maharashtra";

fn product(price: f64, discounted_price: Option<f64>, gst_percentage: Option<f64>) -> ProductSnapshot {
    ProductSnapshot {
        price,
        discounted_price,
        gst_percentage,
    }
}

#[test]
fn test_discount_always_wins() {
    let calculator = PriceCalculator::default();
    let priced = calculator.calculate_product_price(
        &product(100.0, Some(80.0), Some(18.0)),
        1,
        INTRA_STATE_ADDR,
    );

    assert_eq!(priced.base_price, 100.0);
    assert_eq!(priced.discounted_price, 80.0);
    assert_eq!(priced.discount_amount, 20.0);
    assert!(approx_eq(priced.final_price, 80.0));
}

#[test]
fn test_line_tax_extracted_from_inclusive_price() {
    // ₹118 at 18% within Karnataka: base ₹100, tax ₹18.
    let calculator = PriceCalculator::default();
    let priced =
        calculator.calculate_product_price(&product(118.0, None, Some(18.0)), 1, INTRA_STATE_ADDR);

    assert!(approx_eq(priced.taxable_amount, 100.0));
    assert!(approx_eq(priced.tax_amount, 18.0));
    assert!(approx_eq(priced.final_price, 118.0));
    assert_eq!(priced.gst_percentage, 18.0);
    assert_eq!(priced.discount_amount, 0.0);
}

#[test]
fn test_missing_gst_rate_defaults() {
    let calculator = PriceCalculator::default();
    let priced =
        calculator.calculate_product_price(&product(118.0, None, None), 1, INTER_STATE_ADDR);

    assert_eq!(priced.gst_percentage, 18.0);
    assert!(approx_eq(priced.tax_amount, 18.0));
}

#[test]
fn test_quantity_scales_the_line() {
    let calculator = PriceCalculator::default();
    let priced =
        calculator.calculate_product_price(&product(118.0, None, Some(18.0)), 3, INTRA_STATE_ADDR);

    assert!(approx_eq(priced.final_price, 354.0));
    assert!(approx_eq(priced.taxable_amount, 300.0));
    assert!(approx_eq(priced.tax_amount, 54.0));
    // Price fields stay per unit.
    assert_eq!(priced.base_price, 118.0);
    assert_eq!(priced.discounted_price, 118.0);
}

#[test]
fn test_zero_and_negative_quantity_propagate() {
    let calculator = PriceCalculator::default();

    let zero = calculator.calculate_product_price(&product(118.0, None, None), 0, "");
    assert_eq!(zero.final_price, 0.0);
    assert_eq!(zero.taxable_amount, 0.0);

    let negative = calculator.calculate_product_price(&product(118.0, None, None), -1, "");
    assert!(negative.final_price < 0.0);
    assert!(negative.taxable_amount < 0.0);
}

#[test]
fn test_inter_state_multi_item_order() {
    // Two ₹236 items at 18% shipped to Maharashtra with ₹50 delivery:
    // each line base ₹200 / IGST ₹36; order 400 / 72 / 472; grand ₹522.
    let calculator = PriceCalculator::default();
    let lines = vec![
        OrderLine::new(product(236.0, None, Some(18.0)), 1),
        OrderLine::new(product(236.0, None, Some(18.0)), 1),
    ];

    let totals = calculator.calculate_order_totals(&lines, INTER_STATE_ADDR, 50.0);

    assert!(approx_eq(totals.total_taxable_amount, 400.0));
    assert!(approx_eq(totals.total_tax_amount, 72.0));
    assert!(approx_eq(totals.total_final_price, 472.0));
    assert_eq!(totals.delivery_price, 50.0);
    assert!(approx_eq(totals.grand_total, 522.0));
}

#[test]
fn test_empty_order_yields_zero_totals() {
    let calculator = PriceCalculator::default();
    let totals = calculator.calculate_order_totals(&[], INTRA_STATE_ADDR, 0.0);

    assert_eq!(totals.total_base_amount, 0.0);
    assert_eq!(totals.total_discount_amount, 0.0);
    assert_eq!(totals.total_taxable_amount, 0.0);
    assert_eq!(totals.total_tax_amount, 0.0);
    assert_eq!(totals.total_final_price, 0.0);
    assert_eq!(totals.grand_total, 0.0);
}

#[test]
fn test_delivery_is_tax_free() {
    let calculator = PriceCalculator::default();
    let lines = vec![OrderLine::new(product(118.0, None, Some(18.0)), 1)];

    let with_delivery = calculator.calculate_order_totals(&lines, INTRA_STATE_ADDR, 40.0);
    let without_delivery = calculator.calculate_order_totals(&lines, INTRA_STATE_ADDR, 0.0);

    // Delivery moves the grand total, never the tax.
    assert_eq!(with_delivery.total_tax_amount, without_delivery.total_tax_amount);
    assert!(approx_eq(
        with_delivery.grand_total,
        without_delivery.grand_total + 40.0
    ));
}

#[test]
fn test_reconciliation_against_stored_total() {
    let calculator = PriceCalculator::default();
    let lines = vec![
        OrderLine::new(product(236.0, None, Some(18.0)), 1),
        OrderLine::new(product(236.0, None, Some(18.0)), 1),
    ];
    let totals = calculator.calculate_order_totals(&lines, INTER_STATE_ADDR, 50.0);

    // Stored total matches: nothing to attribute.
    assert_eq!(reconcile_stored_total(&totals, 522.0, Some("cod")), None);

    // Stored total carries a COD surcharge the lines don't explain.
    let charge = reconcile_stored_total(&totals, 572.0, Some("cod")).unwrap();
    assert_eq!(charge.label, "COD Charges");
    assert!(approx_eq(charge.amount, 50.0));
}

prop_compose! {
    fn arb_line()(
        price in 1.0f64..10_000.0,
        discounted in proptest::option::of(1.0f64..10_000.0),
        gst_percent in proptest::option::of(0u32..=40u32),
        quantity in 0i32..5,
    ) -> OrderLine {
        OrderLine::new(
            ProductSnapshot {
                price,
                discounted_price: discounted,
                gst_percentage: gst_percent.map(f64::from),
            },
            quantity,
        )
    }
}

proptest! {
    #[test]
    fn test_order_totals_are_additive(
        lines in proptest::collection::vec(arb_line(), 0..6),
        delivery in 0.0f64..500.0,
    ) {
        let calculator = PriceCalculator::default();
        let totals = calculator.calculate_order_totals(&lines, INTRA_STATE_ADDR, delivery);

        let mut expected_taxable = 0.0;
        let mut expected_tax = 0.0;
        let mut expected_final = 0.0;
        for line in &lines {
            let priced =
                calculator.calculate_product_price(&line.product, line.quantity, INTRA_STATE_ADDR);
            expected_taxable += priced.taxable_amount;
            expected_tax += priced.tax_amount;
            expected_final += priced.final_price;
        }

        // Same list order, same summation: exact equality.
        prop_assert_eq!(totals.total_taxable_amount, expected_taxable);
        prop_assert_eq!(totals.total_tax_amount, expected_tax);
        prop_assert_eq!(totals.total_final_price, expected_final);
        prop_assert_eq!(totals.grand_total, totals.total_final_price + delivery);
    }

    #[test]
    fn test_line_invariant_final_is_taxable_plus_tax(
        line in arb_line(),
    ) {
        let calculator = PriceCalculator::default();
        let priced =
            calculator.calculate_product_price(&line.product, line.quantity, INTER_STATE_ADDR);

        prop_assert!(
            approx_eq(priced.final_price, priced.taxable_amount + priced.tax_amount)
        );
    }
}
