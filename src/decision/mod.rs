//! Shared core of the order decision lambdas.
//!
//! Both lambdas run as terminal states of the order state machine: one for the payment failure
//! branch and one for the success branch. They log the received order, stamp it with a fixed
//! status and hand it back with a fixed message. Nothing is persisted.

use std::sync::Arc;

use common::logging::{EventLogger, TracingEventLogger};
use model::order::{OrderRecord, OrderResult, OrderStatus, ResponseEnvelope};

pub const APPROVED_MESSAGE: &str = "Your order is approved and it will be delivered soon";
pub const REJECTED_MESSAGE: &str = "Your order is not approved because of payment failure";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDecision {
    Approve,
    Reject,
}

impl OrderDecision {
    pub fn status(&self) -> OrderStatus {
        match self {
            OrderDecision::Approve => OrderStatus::Approved,
            OrderDecision::Reject => OrderStatus::Rejected,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            OrderDecision::Approve => APPROVED_MESSAGE,
            OrderDecision::Reject => REJECTED_MESSAGE,
        }
    }
}

/// State kept between executions of a decision lambda.
pub struct DecisionState {
    pub logger: Arc<dyn EventLogger>,
}

impl DecisionState {
    pub fn new(logger: Arc<dyn EventLogger>) -> Self {
        Self { logger }
    }
}

impl Default for DecisionState {
    fn default() -> Self {
        Self::new(Arc::new(TracingEventLogger))
    }
}

/// Logs `record` and builds the response for `decision`.
///
/// Every field of the record is carried into `orderDetails` as received, except `status`, which
/// is always replaced by the decision's status.
pub fn decide(
    decision: OrderDecision,
    record: OrderRecord,
    logger: &dyn EventLogger,
) -> ResponseEnvelope {
    logger.log_received(&record);

    ResponseEnvelope {
        message: decision.message().to_owned(),
        order_details: OrderResult::new(record, decision.status()),
    }
}
