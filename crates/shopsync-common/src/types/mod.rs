//! Flat record types delivered to the ingest sink
//!
//! Every record is single-level: scalar fields only, with `None` serialised
//! as JSON `null`. Field names are the sink's column names.

use serde::{Deserialize, Serialize};

/// A record that can be handed to the ingestion dispatcher.
pub trait FlatRecord: Serialize + Send + Sync {
    /// Default sink model this record kind is ingested into
    const MODEL: &'static str;

    /// Human-readable identity used in failure reports
    fn identity(&self) -> String;
}

fn part(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

// ============================================================================
// Inventory
// ============================================================================

/// One inventory level of one item at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub sku: Option<String>,
    pub tracked: bool,
    /// Only set when the level reported an `available` quantity
    pub available: Option<f64>,
    pub location_id: Option<String>,
    pub location_name: Option<String>,
    /// Ingestion wall-clock time, RFC 3339 in UTC with a `Z` suffix
    pub updated_at: String,
}

impl FlatRecord for InventoryRecord {
    const MODEL: &'static str = "shopify_inventory_levels";

    fn identity(&self) -> String {
        format!(
            "{}/{}/{}",
            part(self.sku.as_deref()),
            part(self.location_id.as_deref()),
            self.updated_at
        )
    }
}

// ============================================================================
// Orders
// ============================================================================

/// A postal address as six optional strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

/// An order flattened to one row, including both addresses and a
/// line-item summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub order_number: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub processed_at: Option<String>,
    pub cancelled_at: Option<String>,
    pub closed_at: Option<String>,

    pub total_price: Option<f64>,
    pub subtotal_price: Option<f64>,
    pub total_tax: Option<f64>,
    pub total_discounts: Option<f64>,
    pub currency: Option<String>,
    pub presentment_currency: Option<String>,

    pub financial_status: Option<String>,
    pub fulfillment_status: Option<String>,
    pub confirmation_number: Option<String>,

    pub customer_id: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,

    pub billing_address1: Option<String>,
    pub billing_address2: Option<String>,
    pub billing_city: Option<String>,
    pub billing_province: Option<String>,
    pub billing_country: Option<String>,
    pub billing_zip: Option<String>,

    pub shipping_address1: Option<String>,
    pub shipping_address2: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_province: Option<String>,
    pub shipping_country: Option<String>,
    pub shipping_zip: Option<String>,

    pub test: Option<bool>,
    /// Tags joined with `", "`, or `None` when there are none
    pub tags: Option<String>,
    pub note: Option<String>,
    pub source_name: Option<String>,
    pub referring_site: Option<String>,

    /// Sum of line-item quantities; `None` when the sum is zero
    pub total_line_items_quantity: Option<i64>,
    pub line_items_count: usize,
}

impl OrderRecord {
    pub fn set_billing(&mut self, address: PostalAddress) {
        self.billing_address1 = address.address1;
        self.billing_address2 = address.address2;
        self.billing_city = address.city;
        self.billing_province = address.province;
        self.billing_country = address.country;
        self.billing_zip = address.zip;
    }

    pub fn set_shipping(&mut self, address: PostalAddress) {
        self.shipping_address1 = address.address1;
        self.shipping_address2 = address.address2;
        self.shipping_city = address.city;
        self.shipping_province = address.province;
        self.shipping_country = address.country;
        self.shipping_zip = address.zip;
    }
}

impl FlatRecord for OrderRecord {
    const MODEL: &'static str = "shopify_orders";

    fn identity(&self) -> String {
        part(self.id.as_deref()).to_string()
    }
}

// ============================================================================
// Customers
// ============================================================================

/// A customer with their default address inlined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub verified_email: Option<bool>,
    pub state: Option<String>,
    #[serde(flatten)]
    pub address: PostalAddress,
}

impl FlatRecord for CustomerRecord {
    const MODEL: &'static str = "shopify_customers";

    fn identity(&self) -> String {
        part(self.id.as_deref()).to_string()
    }
}
