use serde_json::{json, Map, Value};

use crate::order::OrderRecord;

/// This file contains methods used ONLY in unit and integration testing.
pub fn build_order_record(
    order_id: &str,
    customer_name: &str,
    order_date: &str,
    amount: Value,
) -> OrderRecord {
    OrderRecord {
        order_id: Some(json!(order_id)),
        customer_name: Some(json!(customer_name)),
        order_date: Some(json!(order_date)),
        amount: Some(amount),
        extra: Map::new(),
    }
}

pub fn order_record_json(
    order_id: &str,
    customer_name: &str,
    order_date: &str,
    amount: Value,
) -> Value {
    json!({
        "orderId": order_id,
        "customerName": customer_name,
        "orderDate": order_date,
        "amount": amount
    })
}
