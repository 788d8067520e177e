//! Applies backend outcomes to the session on the UI thread.

use client_core::{CustomerSession, Severity};
use crossbeam_channel::Sender;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

pub fn apply_ui_event(
    session: &mut CustomerSession,
    event: UiEvent,
    cmd_tx: &Sender<BackendCommand>,
) {
    let needs_refresh = match event {
        UiEvent::CustomersLoaded(outcome) => {
            session.apply_refresh(outcome);
            false
        }
        UiEvent::SaveFinished { mode, outcome } => session.finish_save(mode, outcome),
        UiEvent::DeleteFinished { id, outcome } => session.finish_delete(id, outcome),
        UiEvent::BackendUnavailable(message) => {
            session.notifications_mut().show(message, Severity::Error);
            false
        }
    };

    if needs_refresh {
        dispatch_backend_command(cmd_tx, BackendCommand::Refresh, session);
    }
}
