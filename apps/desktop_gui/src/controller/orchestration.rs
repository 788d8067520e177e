//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{CustomerSession, Severity};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command for the backend worker. A full or closed queue surfaces as
/// an error notification; returns whether the command was queued.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    session: &mut CustomerSession,
) -> bool {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui command queue is full");
            session
                .notifications_mut()
                .show("UI command queue is full; please retry", Severity::Error);
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            session.notifications_mut().show(
                "Backend command processor disconnected; restart the application",
                Severity::Error,
            );
            false
        }
    }
}

/// Saves the working record if the dialog is open.
pub fn dispatch_save(cmd_tx: &Sender<BackendCommand>, session: &mut CustomerSession) -> bool {
    match session.begin_save() {
        Some(request) => dispatch_backend_command(cmd_tx, BackendCommand::Save(request), session),
        None => false,
    }
}

/// Hides the confirmation and deletes the armed record, if any.
pub fn dispatch_confirmed_delete(
    cmd_tx: &Sender<BackendCommand>,
    session: &mut CustomerSession,
) -> bool {
    match session.begin_delete() {
        Some(id) => dispatch_backend_command(cmd_tx, BackendCommand::Delete(id), session),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::SaveRequest;
    use crossbeam_channel::bounded;
    use shared::domain::{CustomerField, CustomerId};

    #[test]
    fn save_queues_create_for_new_record() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut session = CustomerSession::default();
        session.open_create();
        session.update_field(CustomerField::Name, "Bob");

        assert!(dispatch_save(&cmd_tx, &mut session));

        let Ok(BackendCommand::Save(SaveRequest::Create(customer))) = cmd_rx.try_recv() else {
            panic!("expected queued create");
        };
        assert_eq!(customer.name, "Bob");
        assert!(session.editor().is_open());
    }

    #[test]
    fn save_with_closed_dialog_queues_nothing() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut session = CustomerSession::default();

        assert!(!dispatch_save(&cmd_tx, &mut session));
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn confirmed_delete_hides_dialog_and_queues_delete() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut session = CustomerSession::default();
        session.request_delete(CustomerId(3));

        assert!(dispatch_confirmed_delete(&cmd_tx, &mut session));

        assert_eq!(cmd_rx.try_recv().ok(), Some(BackendCommand::Delete(CustomerId(3))));
        assert!(!session.delete_confirmation().is_visible());
    }

    #[test]
    fn full_queue_surfaces_error_notification() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        let mut session = CustomerSession::default();
        assert!(dispatch_backend_command(&cmd_tx, BackendCommand::Refresh, &mut session));

        assert!(!dispatch_backend_command(&cmd_tx, BackendCommand::Refresh, &mut session));

        let current = session.notifications().current().expect("notification");
        assert_eq!(current.severity, Severity::Error);
    }

    #[test]
    fn disconnected_worker_surfaces_error_notification() {
        let (cmd_tx, cmd_rx) = bounded(1);
        drop(cmd_rx);
        let mut session = CustomerSession::default();

        assert!(!dispatch_backend_command(&cmd_tx, BackendCommand::Refresh, &mut session));
        assert!(session
            .notifications()
            .current()
            .is_some_and(|n| n.message.contains("disconnected")));
    }
}
