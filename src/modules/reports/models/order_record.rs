use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An order as the statutory export collaborator hands it over: a
/// date-bounded order-history row joined with its items. The engine reads
/// these snapshots, never writes them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: Uuid,

    /// When the order was placed; its date decides period membership
    pub created_at: DateTime<Utc>,

    /// Free-text shipping address; absent resolves to inter-state
    #[serde(default)]
    pub shipping_address: Option<String>,

    /// Buyer's profile name, when the profile has one
    #[serde(default)]
    pub customer_name: Option<String>,

    pub items: Vec<OrderItemRecord>,
}

/// One purchased item within an order-history row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemRecord {
    #[serde(default)]
    pub product_name: Option<String>,

    /// HSN classification code; absent falls back to the configured
    /// placeholder on the export
    #[serde(default)]
    pub hsn_code: Option<String>,

    /// GST rate at time of sale; absent resolves to the engine default
    #[serde(default)]
    pub gst_percentage: Option<f64>,

    /// Tax-inclusive unit price paid
    pub price: f64,

    pub quantity: i32,
}
