//! Backend outcomes delivered to the UI thread.

use client_core::{EditorMode, GatewayError};
use shared::domain::{Customer, CustomerId};

#[derive(Debug)]
pub enum UiEvent {
    CustomersLoaded(Result<Vec<Customer>, GatewayError>),
    SaveFinished {
        mode: EditorMode,
        outcome: Result<(), GatewayError>,
    },
    DeleteFinished {
        id: CustomerId,
        outcome: Result<(), GatewayError>,
    },
    BackendUnavailable(String),
}
