use model::order::OrderRecord;

#[cfg(feature = "test_mocks")]
use mockall::mock;

/// Side channel used by the decision lambdas to report the event they received.
///
/// Implementations must not fail: a logging problem is never allowed to change the response
/// returned to the state machine.
pub trait EventLogger: Send + Sync {
    fn log_received(&self, record: &OrderRecord);
}

/// Writes the received event to the `tracing` subscriber installed by the lambda runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventLogger;

impl EventLogger for TracingEventLogger {
    fn log_received(&self, record: &OrderRecord) {
        tracing::info!(
            payload = %raw_event(record),
            "Received event from step function"
        );
    }
}

/// JSON form of the record as it came in, or its `Debug` form if it cannot be serialized.
pub fn raw_event(record: &OrderRecord) -> String {
    serde_json::to_string(record).unwrap_or_else(|_| format!("{record:?}"))
}

#[cfg(feature = "test_mocks")]
mock! {
    pub EventLogger {}
    impl EventLogger for EventLogger {
        fn log_received(&self, record: &OrderRecord);
    }
}

#[cfg(test)]
mod tests {
    use model::order::helpers::build_order_record;
    use serde_json::json;

    use super::*;

    #[test]
    fn raw_event_is_the_received_json() {
        let input = json!({
            "orderId": "O1",
            "customerName": "Alice",
            "orderDate": "2024-01-01",
            "amount": 50,
            "channel": null
        });
        let record: OrderRecord = serde_json::from_value(input.clone()).unwrap();

        let logged: serde_json::Value = serde_json::from_str(&raw_event(&record)).unwrap();

        assert_eq!(input, logged);
    }

    #[test]
    fn raw_event_of_empty_record() {
        assert_eq!("{}", raw_event(&OrderRecord::default()));
    }

    #[test]
    fn raw_event_has_no_debug_wrappers() {
        let logged = raw_event(&build_order_record("O2", "Bob", "2024-02-02", json!(75)));

        assert!(!logged.contains("Some("), "Actual log payload was: {logged}");
        assert!(logged.contains(r#""orderId":"O2""#));
    }
}
