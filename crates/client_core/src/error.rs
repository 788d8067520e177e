use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOperation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for GatewayOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GatewayOperation::List => "list customers",
            GatewayOperation::Create => "create customer",
            GatewayOperation::Update => "update customer",
            GatewayOperation::Delete => "delete customer",
        };
        f.write_str(name)
    }
}

/// Any failed round trip: transport error, non-2xx status or a payload that
/// does not decode. Callers never branch on the reason.
#[derive(Debug, Clone, Error)]
#[error("{operation} request failed: {reason}")]
pub struct GatewayError {
    pub operation: GatewayOperation,
    pub reason: String,
}

impl GatewayError {
    pub fn new(operation: GatewayOperation, reason: impl Into<String>) -> Self {
        Self {
            operation,
            reason: reason.into(),
        }
    }
}
