//! UI-independent state of the customers screen: the record list, the
//! add/edit dialog, the delete confirmation and the current notification.
//!
//! Network calls happen elsewhere. Each mutating action is split into a
//! `begin_*` step that yields what to send and a `finish_*` step that applies
//! the outcome, so the same transitions serve the async manager and the GUI's
//! queued backend worker.

use std::time::Duration;

use shared::domain::{Customer, CustomerDraft, CustomerField, CustomerId};
use tracing::{info, warn};

use crate::{
    error::GatewayError,
    notification::{NotificationCenter, Severity},
};

pub const MSG_FETCH_FAILED: &str = "Error fetching customers";
pub const MSG_ADDED: &str = "Customer added successfully";
pub const MSG_UPDATED: &str = "Customer updated successfully";
pub const MSG_SAVE_FAILED: &str = "Error saving customer";
pub const MSG_DELETED: &str = "Customer deleted successfully";
pub const MSG_DELETE_FAILED: &str = "Error deleting customer";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Create,
    Edit(CustomerId),
}

impl EditorMode {
    /// Maps a wire id onto a mode: the unsaved sentinel means create.
    pub fn for_id(id: CustomerId) -> Self {
        if id.is_unsaved() {
            EditorMode::Create
        } else {
            EditorMode::Edit(id)
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            EditorMode::Create => "Add Customer",
            EditorMode::Edit(_) => "Edit Customer",
        }
    }

    pub fn action_label(self) -> &'static str {
        match self {
            EditorMode::Create => "Add",
            EditorMode::Edit(_) => "Update",
        }
    }
}

/// What a save sends to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(Customer),
    Update(CustomerId, Customer),
}

impl SaveRequest {
    pub fn mode(&self) -> EditorMode {
        match self {
            SaveRequest::Create(_) => EditorMode::Create,
            SaveRequest::Update(id, _) => EditorMode::Edit(*id),
        }
    }

    pub fn customer(&self) -> &Customer {
        match self {
            SaveRequest::Create(customer) | SaveRequest::Update(_, customer) => customer,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerEditor {
    open: bool,
    mode: EditorMode,
    draft: CustomerDraft,
}

impl CustomerEditor {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// The working record.
    pub fn draft(&self) -> &CustomerDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CustomerDraft {
        &mut self.draft
    }

    fn open_create(&mut self) {
        self.mode = EditorMode::Create;
        self.draft = CustomerDraft::default();
        self.open = true;
    }

    fn open_edit(&mut self, customer: &Customer) {
        self.mode = EditorMode::for_id(customer.id);
        self.draft = CustomerDraft::from(customer);
        self.open = true;
    }

    fn close(&mut self) {
        *self = Self::default();
    }

    fn save_request(&self) -> SaveRequest {
        match self.mode {
            EditorMode::Create => {
                SaveRequest::Create(Customer::from_draft(CustomerId::UNSAVED, &self.draft))
            }
            EditorMode::Edit(id) => SaveRequest::Update(id, Customer::from_draft(id, &self.draft)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteConfirmation {
    #[default]
    Hidden,
    Armed(CustomerId),
}

impl DeleteConfirmation {
    pub fn is_visible(self) -> bool {
        matches!(self, DeleteConfirmation::Armed(_))
    }

    pub fn target(self) -> Option<CustomerId> {
        match self {
            DeleteConfirmation::Armed(id) => Some(id),
            DeleteConfirmation::Hidden => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomerSession {
    customers: Vec<Customer>,
    editor: CustomerEditor,
    delete_confirmation: DeleteConfirmation,
    notifications: NotificationCenter,
}

impl CustomerSession {
    pub fn new(notification_timeout: Duration) -> Self {
        Self {
            notifications: NotificationCenter::new(notification_timeout),
            ..Self::default()
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn editor(&self) -> &CustomerEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut CustomerEditor {
        &mut self.editor
    }

    pub fn delete_confirmation(&self) -> DeleteConfirmation {
        self.delete_confirmation
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    /// Replaces the whole list on success; keeps the stale list on failure.
    pub fn apply_refresh(&mut self, outcome: Result<Vec<Customer>, GatewayError>) {
        match outcome {
            Ok(customers) => {
                info!(count = customers.len(), "customer list refreshed");
                self.customers = customers;
            }
            Err(err) => {
                warn!(reason = %err, "failed to fetch customers");
                self.notifications.show(MSG_FETCH_FAILED, Severity::Error);
            }
        }
    }

    pub fn open_create(&mut self) {
        self.editor.open_create();
    }

    pub fn open_edit(&mut self, customer: &Customer) {
        self.editor.open_edit(customer);
    }

    pub fn update_field(&mut self, field: CustomerField, value: impl Into<String>) {
        self.editor.draft.set(field, value);
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
    }

    /// `None` when no dialog is open.
    pub fn begin_save(&self) -> Option<SaveRequest> {
        self.editor.is_open().then(|| self.editor.save_request())
    }

    /// Applies the outcome of a save. Returns `true` when the list must be
    /// re-fetched.
    pub fn finish_save(&mut self, mode: EditorMode, outcome: Result<(), GatewayError>) -> bool {
        match outcome {
            Ok(()) => {
                let message = match mode {
                    EditorMode::Create => MSG_ADDED,
                    EditorMode::Edit(_) => MSG_UPDATED,
                };
                info!(?mode, "customer saved");
                self.notifications.show(message, Severity::Success);
                self.editor.close();
                true
            }
            Err(err) => {
                warn!(?mode, reason = %err, "failed to save customer");
                self.notifications.show(MSG_SAVE_FAILED, Severity::Error);
                false
            }
        }
    }

    pub fn request_delete(&mut self, id: CustomerId) {
        self.delete_confirmation = DeleteConfirmation::Armed(id);
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirmation = DeleteConfirmation::Hidden;
    }

    /// Disarms the confirmation and yields the id to delete. The dialog is
    /// hidden whatever the outcome turns out to be.
    pub fn begin_delete(&mut self) -> Option<CustomerId> {
        std::mem::take(&mut self.delete_confirmation).target()
    }

    /// Returns `true` when the list must be re-fetched.
    pub fn finish_delete(&mut self, id: CustomerId, outcome: Result<(), GatewayError>) -> bool {
        match outcome {
            Ok(()) => {
                info!(%id, "customer deleted");
                self.notifications.show(MSG_DELETED, Severity::Success);
                true
            }
            Err(err) => {
                warn!(%id, reason = %err, "failed to delete customer");
                self.notifications.show(MSG_DELETE_FAILED, Severity::Error);
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
