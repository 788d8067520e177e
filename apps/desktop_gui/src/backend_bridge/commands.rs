//! Backend commands queued from UI to backend worker.

use client_core::SaveRequest;
use shared::domain::CustomerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    Refresh,
    Save(SaveRequest),
    Delete(CustomerId),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Refresh => "refresh",
            BackendCommand::Save(SaveRequest::Create(_)) => "create",
            BackendCommand::Save(SaveRequest::Update(..)) => "update",
            BackendCommand::Delete(_) => "delete",
        }
    }
}
