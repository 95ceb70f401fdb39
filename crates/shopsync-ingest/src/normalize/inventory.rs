use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use shopsync_common::InventoryRecord;

use super::{flag, nodes, number, text};

/// Quantity name that carries the sellable count
const AVAILABLE: &str = "available";

/// Flatten an inventory-items payload into one record per (item, location).
///
/// The payload has no per-level update time, so `updated_at` is stamped
/// with the current UTC time. Two calls over the same payload differ only
/// in that field.
pub fn inventory(raw: &Value) -> Vec<InventoryRecord> {
    inventory_at(raw, Utc::now())
}

/// [`inventory`] with an explicit ingestion timestamp
pub fn inventory_at(raw: &Value, now: DateTime<Utc>) -> Vec<InventoryRecord> {
    let updated_at = now.to_rfc3339_opts(SecondsFormat::Micros, true);
    let mut records = Vec::new();

    for item in nodes(&raw["data"]["inventoryItems"]) {
        for level in nodes(&item["inventoryLevels"]) {
            let location = &level["location"];

            records.push(InventoryRecord {
                sku: text(&item["sku"]),
                tracked: flag(&item["tracked"]).unwrap_or(false),
                available: available_quantity(&level["quantities"]),
                location_id: text(&location["id"]),
                location_name: text(&location["name"]),
                updated_at: updated_at.clone(),
            });
        }
    }

    records
}

/// First `available` entry wins, even if its quantity is missing
fn available_quantity(quantities: &Value) -> Option<f64> {
    quantities
        .as_array()?
        .iter()
        .find(|entry| entry["name"].as_str() == Some(AVAILABLE))
        .and_then(|entry| number(&entry["quantity"]))
}
