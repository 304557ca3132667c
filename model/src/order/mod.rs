use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub mod helpers;

/// Key under which the decision status is written into the order details.
pub const STATUS_KEY: &str = "status";

#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Approved,
    Rejected,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order under evaluation, as delivered by the state machine.
///
/// Values are carried as raw JSON so ids, dates and amounts reach the response exactly as they
/// were received. A key that is missing stays missing; a key that is present (even as `null`)
/// is kept. Keys other than the four known ones are collected in `extra`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_id: Option<Value>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub customer_name: Option<Value>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_date: Option<Value>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Only called when the key exists, so an explicit `null` becomes `Some(Value::Null)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// The order record with the decision applied.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OrderResult {
    #[serde(flatten)]
    pub record: OrderRecord,
    pub status: OrderStatus,
}

impl OrderResult {
    /// Any `status` carried by the incoming record is discarded in favour of `status`.
    pub fn new(mut record: OrderRecord, status: OrderStatus) -> Self {
        record.extra.remove(STATUS_KEY);
        Self { record, status }
    }
}

/// Payload handed back to the state machine.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub message: String,
    pub order_details: OrderResult,
}
