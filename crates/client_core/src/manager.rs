use std::time::Duration;

use shared::domain::{Customer, CustomerField, CustomerId};

use crate::{
    gateway::CustomerGateway,
    session::{CustomerSession, SaveRequest},
};

/// Drives a [`CustomerSession`] against a gateway, awaiting each request
/// before applying its outcome.
pub struct CustomerManager<G: CustomerGateway> {
    gateway: G,
    session: CustomerSession,
}

impl<G: CustomerGateway> CustomerManager<G> {
    pub fn new(gateway: G, notification_timeout: Duration) -> Self {
        Self {
            gateway,
            session: CustomerSession::new(notification_timeout),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn session(&self) -> &CustomerSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut CustomerSession {
        &mut self.session
    }

    pub fn customers(&self) -> &[Customer] {
        self.session.customers()
    }

    /// Returns whether the list was replaced.
    pub async fn refresh(&mut self) -> bool {
        let outcome = self.gateway.list_all().await;
        let ok = outcome.is_ok();
        self.session.apply_refresh(outcome);
        ok
    }

    pub fn open_create(&mut self) {
        self.session.open_create();
    }

    pub fn open_edit(&mut self, customer: &Customer) {
        self.session.open_edit(customer);
    }

    pub fn update_field(&mut self, field: CustomerField, value: impl Into<String>) {
        self.session.update_field(field, value);
    }

    pub fn close(&mut self) {
        self.session.close_editor();
    }

    /// Creates or updates the working record. Returns whether the backend
    /// accepted it; a closed dialog is a no-op.
    pub async fn save(&mut self) -> bool {
        let Some(request) = self.session.begin_save() else {
            return false;
        };
        let outcome = match &request {
            SaveRequest::Create(customer) => {
                self.gateway.create(customer).await.map(|_| ())
            }
            SaveRequest::Update(id, customer) => {
                self.gateway.update(*id, customer).await
            }
        };
        let saved = outcome.is_ok();
        if self.session.finish_save(request.mode(), outcome) {
            self.refresh().await;
        }
        saved
    }

    pub fn request_delete(&mut self, id: CustomerId) {
        self.session.request_delete(id);
    }

    pub fn cancel_delete(&mut self) {
        self.session.cancel_delete();
    }

    /// Deletes the armed record. Returns whether the backend accepted it;
    /// without an armed target nothing is sent.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.session.begin_delete() else {
            return false;
        };
        let outcome = self.gateway.delete(id).await;
        let deleted = outcome.is_ok();
        if self.session.finish_delete(id, outcome) {
            self.refresh().await;
        }
        deleted
    }
}

#[cfg(test)]
#[path = "tests/manager_tests.rs"]
mod tests;
