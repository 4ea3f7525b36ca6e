use serde::{Deserialize, Serialize};

/// The slice of a catalog product the pricing engine reads.
///
/// Snapshots come from the catalog/cart layer. A present `discounted_price`
/// is authoritative: the engine charges it as-is and does not compare it
/// against `price`. The catalog is responsible for ensuring
/// `discounted_price < price` before handing the snapshot over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Tax-inclusive list price per unit
    pub price: f64,

    /// Tax-inclusive sale price per unit, when the product is discounted
    #[serde(default)]
    pub discounted_price: Option<f64>,

    /// GST rate for this product; `None` resolves to the engine default
    #[serde(default)]
    pub gst_percentage: Option<f64>,
}

impl ProductSnapshot {
    /// Price the customer actually pays per unit
    pub fn effective_price(&self) -> f64 {
        self.discounted_price.unwrap_or(self.price)
    }

    /// Per-unit discount, 0 when no discounted price is set
    pub fn unit_discount(&self) -> f64 {
        match self.discounted_price {
            Some(discounted) => self.price - discounted,
            None => 0.0,
        }
    }
}

/// One cart/order line: a product snapshot and how many units of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: ProductSnapshot,
    pub quantity: i32,
}

impl OrderLine {
    pub fn new(product: ProductSnapshot, quantity: i32) -> Self {
        Self { product, quantity }
    }
}
