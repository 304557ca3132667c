use async_trait::async_trait;
use model::order::{OrderRecord, ResponseEnvelope};
use order_decision_sm::{
    decision::{decide, DecisionState, OrderDecision},
    lambda_main,
    lambda_structure::lambda_trait::Lambda,
    result::{error::OrchestrationError, Result},
};

/// Terminal state of the successful payment branch.
///
/// Delivery date calculation and writing the order to the orders table belong here once they
/// exist; callers must not rely on either today.
pub struct CompleteOrder;

#[async_trait]
impl Lambda for CompleteOrder {
    type PersistedMemory = DecisionState;
    type InputBody = OrderRecord;
    type Output = ResponseEnvelope;
    type Error = OrchestrationError;

    async fn bootstrap() -> Result<Self::PersistedMemory> {
        Ok(DecisionState::default())
    }

    async fn run(request: Self::InputBody, state: &Self::PersistedMemory) -> Result<Self::Output> {
        Ok(decide(OrderDecision::Approve, request, state.logger.as_ref()))
    }
}

lambda_main!(CompleteOrder);
