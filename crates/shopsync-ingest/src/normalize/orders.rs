use serde_json::Value;
use shopsync_common::OrderRecord;

use super::{address, amount, edge_list, flag, nodes, number, text};

/// Flatten an orders payload into one record per order edge.
pub fn orders(raw: &Value) -> Vec<OrderRecord> {
    nodes(&raw["data"]["orders"]).map(order).collect()
}

fn order(node: &Value) -> OrderRecord {
    let total = &node["currentTotalPriceSet"]["shopMoney"];
    let customer = &node["customer"];
    let line_items = edge_list(&node["lineItems"]);

    let quantity = line_items
        .iter()
        .map(|edge| line_quantity(&edge["node"]["quantity"]))
        .fold(0i64, i64::saturating_add);

    let mut record = OrderRecord {
        id: text(&node["id"]),
        name: text(&node["name"]),
        order_number: text(&node["orderNumber"]),
        created_at: text(&node["createdAt"]),
        updated_at: text(&node["updatedAt"]),
        processed_at: text(&node["processedAt"]),
        cancelled_at: text(&node["cancelledAt"]),
        closed_at: text(&node["closedAt"]),

        total_price: amount(&total["amount"]),
        subtotal_price: amount(&node["subtotalPriceSet"]["shopMoney"]["amount"]),
        total_tax: amount(&node["totalTaxSet"]["shopMoney"]["amount"]),
        total_discounts: amount(&node["totalDiscountsSet"]["shopMoney"]["amount"]),
        currency: text(&total["currencyCode"]),
        presentment_currency: text(&node["presentmentCurrencyCode"]),

        financial_status: text(&node["displayFinancialStatus"]),
        fulfillment_status: text(&node["displayFulfillmentStatus"]),
        confirmation_number: text(&node["confirmationNumber"]),

        customer_id: text(&customer["id"]),
        customer_email: text(&customer["email"]),
        customer_phone: text(&customer["phone"]),

        test: flag(&node["test"]),
        tags: tags(&node["tags"]),
        note: text(&node["note"]),
        source_name: text(&node["sourceName"]),
        referring_site: text(&node["referringSite"]),

        total_line_items_quantity: (quantity != 0).then_some(quantity),
        line_items_count: line_items.len(),
        ..Default::default()
    };

    record.set_billing(address(&node["billingAddress"]));
    record.set_shipping(address(&node["shippingAddress"]));
    record
}

/// Missing quantity counts as zero. Fractional values truncate and
/// out-of-range values saturate.
fn line_quantity(value: &Value) -> i64 {
    match value.as_i64() {
        Some(quantity) => quantity,
        None => number(value).map(|q| q as i64).unwrap_or(0),
    }
}

/// `["a", "b"]` becomes `"a, b"`; no tags becomes `None`
fn tags(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => {
            let tags: Vec<String> = items.iter().filter_map(text).collect();
            (!tags.is_empty()).then(|| tags.join(", "))
        },
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wrap(node: Value) -> Value {
        json!({ "data": { "orders": { "edges": [{ "node": node }] } } })
    }

    #[test]
    fn test_money_and_currency_come_from_shop_money() {
        let raw = wrap(json!({
            "id": "gid://shopify/Order/1",
            "currentTotalPriceSet": { "shopMoney": { "amount": "42.50", "currencyCode": "CAD" } },
            "subtotalPriceSet": { "shopMoney": { "amount": "40.00" } },
            "totalTaxSet": { "shopMoney": { "amount": "2.50" } },
            "totalDiscountsSet": { "shopMoney": { "amount": "0.00" } },
            "presentmentCurrencyCode": "USD"
        }));

        let record = &orders(&raw)[0];
        assert_eq!(record.total_price, Some(42.5));
        assert_eq!(record.subtotal_price, Some(40.0));
        assert_eq!(record.total_tax, Some(2.5));
        assert_eq!(record.total_discounts, None);
        assert_eq!(record.currency.as_deref(), Some("CAD"));
        assert_eq!(record.presentment_currency.as_deref(), Some("USD"));
    }

    #[test]
    fn test_addresses_and_customer_are_flattened() {
        let raw = wrap(json!({
            "customer": { "id": "gid://shopify/Customer/5", "email": "a@example.com" },
            "billingAddress": { "address1": "1 Rue", "city": "Lyon", "country": "France", "zip": "69001" },
            "shippingAddress": null
        }));

        let record = &orders(&raw)[0];
        assert_eq!(record.customer_id.as_deref(), Some("gid://shopify/Customer/5"));
        assert_eq!(record.customer_email.as_deref(), Some("a@example.com"));
        assert_eq!(record.customer_phone, None);
        assert_eq!(record.billing_address1.as_deref(), Some("1 Rue"));
        assert_eq!(record.billing_address2, None);
        assert_eq!(record.billing_zip.as_deref(), Some("69001"));
        assert_eq!(record.shipping_city, None);
    }

    #[test]
    fn test_tags_join() {
        assert_eq!(tags(&json!(["vip", "wholesale"])), Some("vip, wholesale".to_string()));
        assert_eq!(tags(&json!([])), None);
        assert_eq!(tags(&Value::Null), None);
        assert_eq!(tags(&json!("vip")), Some("vip".to_string()));
    }

    #[test]
    fn test_numeric_order_number_is_text() {
        let raw = wrap(json!({ "orderNumber": 1001, "name": "#1001" }));
        assert_eq!(orders(&raw)[0].order_number.as_deref(), Some("1001"));
    }

    #[test]
    fn test_line_item_sum_saturates_instead_of_overflowing() {
        let raw = wrap(json!({
            "lineItems": { "edges": [ { "node": { "quantity": i64::MAX } }, { "node": { "quantity": 1 } } ] }
        }));

        let record = &orders(&raw)[0];
        assert_eq!(record.total_line_items_quantity, Some(i64::MAX));
        assert_eq!(record.line_items_count, 2);
    }

    #[test]
    fn test_non_integer_quantities_are_counted() {
        let raw = wrap(json!({
            "lineItems": { "edges": [ { "node": { "quantity": 2.0 } }, { "node": { "quantity": 3 } }, { "node": { "quantity": "4" } } ] }
        }));
        assert_eq!(orders(&raw)[0].total_line_items_quantity, Some(9));

        assert_eq!(line_quantity(&json!(1.9)), 1);
        assert_eq!(line_quantity(&json!(u64::MAX)), i64::MAX);
        assert_eq!(line_quantity(&json!("lots")), 0);
        assert_eq!(line_quantity(&Value::Null), 0);
    }

    #[test]
    fn test_line_item_without_quantity_counts_as_zero() {
        let raw = wrap(json!({
            "lineItems": { "edges": [ { "node": { "quantity": 4 } }, { "node": {} }, {} ] }
        }));

        let record = &orders(&raw)[0];
        assert_eq!(record.total_line_items_quantity, Some(4));
        assert_eq!(record.line_items_count, 3);
    }
}
