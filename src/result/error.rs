//! OrchestrationError is the error type the decision lambdas declare to the runtime.
//! The decisions themselves cannot fail; only ambient setup problems are mapped to it.

use lambda_runtime::Error as LambdaRuntimeError;
use std::fmt;
use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, OrchestrationError>;
pub type LambdaRuntimeResult = std::result::Result<(), LambdaRuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum OrchestrationError {
    Unknown(#[source] anyhow::Error),
}

impl Display for OrchestrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OrchestrationError::Unknown(e) => write!(f, "{e:#}"),
        }
    }
}

impl From<anyhow::Error> for OrchestrationError {
    fn from(e: anyhow::Error) -> Self {
        Self::Unknown(e)
    }
}
