use serde_json::Value;
use shopsync_common::CustomerRecord;

use super::{address, flag, nodes, text};

/// Flatten a customers payload into one record per customer edge.
pub fn customers(raw: &Value) -> Vec<CustomerRecord> {
    nodes(&raw["data"]["customers"])
        .map(|node| CustomerRecord {
            id: text(&node["id"]),
            email: text(&node["email"]),
            first_name: text(&node["firstName"]),
            last_name: text(&node["lastName"]),
            phone: text(&node["phone"]),
            created_at: text(&node["createdAt"]),
            updated_at: text(&node["updatedAt"]),
            verified_email: flag(&node["verifiedEmail"]),
            state: text(&node["state"]),
            address: address(&node["defaultAddress"]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_fields_map_one_to_one() {
        let raw = json!({
            "data": { "customers": { "edges": [{ "node": {
                "id": "gid://shopify/Customer/7",
                "email": "jo@example.com",
                "firstName": "Jo",
                "lastName": "Doe",
                "phone": "+15550100",
                "createdAt": "2024-05-01T10:00:00Z",
                "updatedAt": "2024-06-01T10:00:00Z",
                "verifiedEmail": true,
                "state": "ENABLED",
                "defaultAddress": { "address1": "5 Main St", "city": "Boston", "province": "MA", "country": "US", "zip": "02101" }
            } }] } }
        });

        let records = customers(&raw);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.first_name.as_deref(), Some("Jo"));
        assert_eq!(record.verified_email, Some(true));
        assert_eq!(record.state.as_deref(), Some("ENABLED"));
        assert_eq!(record.address.city.as_deref(), Some("Boston"));
        assert_eq!(record.address.address2, None);
    }

    #[test]
    fn test_missing_default_address_is_all_null() {
        let raw = json!({ "data": { "customers": { "edges": [{ "node": { "id": "c1" } }] } } });
        let record = &customers(&raw)[0];
        assert_eq!(record.address, Default::default());
        assert_eq!(record.verified_email, None);
    }
}
