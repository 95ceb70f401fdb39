//! Normalizers: raw GraphQL payloads in, flat records out
//!
//! Every function here is pure and total. Traversal goes through
//! `serde_json::Value` indexing, which yields `Null` for a missing key or a
//! non-object parent, so an absent branch at any depth reads as empty and an
//! absent leaf reads as `None`.

mod customers;
mod inventory;
mod orders;

pub use customers::customers;
pub use inventory::{inventory, inventory_at};
pub use orders::orders;

use serde_json::Value;
use shopsync_common::PostalAddress;

/// Nodes of a GraphQL connection (`{ "edges": [ { "node": ... } ] }`).
///
/// A non-object edge still yields a (null) node.
fn nodes(connection: &Value) -> impl Iterator<Item = &Value> {
    edge_list(connection).iter().map(|edge| &edge["node"])
}

fn edge_list(connection: &Value) -> &[Value] {
    connection["edges"].as_array().map(Vec::as_slice).unwrap_or_default()
}

/// String leaf; numbers are rendered as text
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn flag(value: &Value) -> Option<bool> {
    value.as_bool()
}

/// Numeric leaf; numeric strings (the platform's decimal encoding) are parsed
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Money amount. Zero and missing are deliberately indistinguishable.
fn amount(value: &Value) -> Option<f64> {
    number(value).filter(|amount| *amount != 0.0)
}

fn address(value: &Value) -> PostalAddress {
    PostalAddress {
        address1: text(&value["address1"]),
        address2: text(&value["address2"]),
        city: text(&value["city"]),
        province: text(&value["province"]),
        country: text(&value["country"]),
        zip: text(&value["zip"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nodes_tolerates_missing_and_malformed_connections() {
        assert_eq!(nodes(&Value::Null).count(), 0);
        assert_eq!(nodes(&json!({ "edges": "nope" })).count(), 0);

        let odd = json!({ "edges": [ 7, { "node": { "id": "a" } } ] });
        let collected: Vec<&Value> = nodes(&odd).collect();
        assert_eq!(collected.len(), 2);
        assert!(collected[0].is_null());
        assert_eq!(collected[1]["id"], "a");
    }

    #[test]
    fn test_text_renders_numbers() {
        assert_eq!(text(&json!("x")), Some("x".to_string()));
        assert_eq!(text(&json!(1001)), Some("1001".to_string()));
        assert_eq!(text(&json!(null)), None);
        assert_eq!(text(&json!({ "a": 1 })), None);
    }

    #[test]
    fn test_amount_collapses_zero_and_garbage() {
        assert_eq!(amount(&json!("19.99")), Some(19.99));
        assert_eq!(amount(&json!(4)), Some(4.0));
        assert_eq!(amount(&json!("0.00")), None);
        assert_eq!(amount(&json!(0)), None);
        assert_eq!(amount(&json!("")), None);
        assert_eq!(amount(&json!("n/a")), None);
        assert_eq!(amount(&Value::Null), None);
    }

    #[test]
    fn test_address_of_missing_object_is_empty() {
        assert_eq!(address(&Value::Null), PostalAddress::default());
    }
}
