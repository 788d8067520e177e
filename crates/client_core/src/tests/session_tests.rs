use super::*;
use crate::error::GatewayOperation;

fn ann() -> Customer {
    Customer {
        id: CustomerId(1),
        name: "Ann".into(),
        birthday: "1990-04-01".into(),
        phone: "555-0100".into(),
        email: "ann@example.com".into(),
        address: "1 Main St".into(),
    }
}

fn failure(operation: GatewayOperation) -> GatewayError {
    GatewayError::new(operation, "connection refused")
}

fn current_message(session: &CustomerSession) -> Option<(&str, Severity)> {
    session
        .notifications()
        .current()
        .map(|n| (n.message.as_str(), n.severity))
}

#[test]
fn open_create_resets_to_empty_working_record() {
    let mut session = CustomerSession::default();
    session.open_edit(&ann());
    session.update_field(CustomerField::Phone, "999");

    session.open_create();

    assert!(session.editor().is_open());
    assert_eq!(session.editor().mode(), EditorMode::Create);
    assert_eq!(session.editor().draft(), &CustomerDraft::default());
}

#[test]
fn open_edit_copies_record_fields() {
    let mut session = CustomerSession::default();
    session.open_edit(&ann());

    assert_eq!(session.editor().mode(), EditorMode::Edit(CustomerId(1)));
    assert_eq!(session.editor().draft().name, "Ann");
    assert_eq!(session.editor().draft().address, "1 Main St");
    assert_eq!(session.editor().mode().title(), "Edit Customer");
    assert_eq!(session.editor().mode().action_label(), "Update");
}

#[test]
fn unsaved_record_opens_in_create_mode() {
    let mut session = CustomerSession::default();
    let customer = Customer {
        id: CustomerId::UNSAVED,
        ..ann()
    };
    session.open_edit(&customer);
    assert_eq!(session.editor().mode(), EditorMode::Create);
    assert_eq!(session.editor().mode().title(), "Add Customer");
}

#[test]
fn close_discards_working_record() {
    let mut session = CustomerSession::default();
    session.open_edit(&ann());
    session.close_editor();

    assert!(!session.editor().is_open());
    assert_eq!(session.editor(), &CustomerEditor::default());
    assert_eq!(session.begin_save(), None);
}

#[test]
fn create_mode_builds_create_request_with_sentinel_id() {
    let mut session = CustomerSession::default();
    session.open_create();
    session.update_field(CustomerField::Name, "Bob");
    session.update_field(CustomerField::Birthday, "2001-02-03");

    let request = session.begin_save().expect("dialog open");
    let SaveRequest::Create(customer) = &request else {
        panic!("expected create, got {request:?}");
    };
    assert_eq!(customer.id, CustomerId::UNSAVED);
    assert_eq!(customer.name, "Bob");
    assert_eq!(customer.birthday, "2001-02-03");
    assert_eq!(request.mode(), EditorMode::Create);
}

#[test]
fn edit_mode_builds_update_request_for_that_id() {
    let mut session = CustomerSession::default();
    session.open_edit(&ann());
    session.update_field(CustomerField::Name, "Annie");

    let request = session.begin_save().expect("dialog open");
    assert_eq!(
        request,
        SaveRequest::Update(
            CustomerId(1),
            Customer {
                name: "Annie".into(),
                ..ann()
            }
        )
    );
}

#[test]
fn successful_save_closes_dialog_and_requests_refresh() {
    let mut session = CustomerSession::default();
    session.open_edit(&ann());

    let refresh = session.finish_save(EditorMode::Edit(CustomerId(1)), Ok(()));

    assert!(refresh);
    assert!(!session.editor().is_open());
    assert_eq!(
        current_message(&session),
        Some((MSG_UPDATED, Severity::Success))
    );
}

#[test]
fn successful_create_reports_added() {
    let mut session = CustomerSession::default();
    session.open_create();
    assert!(session.finish_save(EditorMode::Create, Ok(())));
    assert_eq!(current_message(&session), Some((MSG_ADDED, Severity::Success)));
}

#[test]
fn failed_save_keeps_dialog_and_values() {
    let mut session = CustomerSession::default();
    session.open_create();
    session.update_field(CustomerField::Email, "bob@example.com");

    let refresh = session.finish_save(EditorMode::Create, Err(failure(GatewayOperation::Create)));

    assert!(!refresh);
    assert!(session.editor().is_open());
    assert_eq!(session.editor().draft().email, "bob@example.com");
    assert_eq!(
        current_message(&session),
        Some((MSG_SAVE_FAILED, Severity::Error))
    );
}

#[test]
fn refresh_replaces_list_in_server_order() {
    let mut session = CustomerSession::default();
    session.apply_refresh(Ok(vec![ann()]));

    let second = Customer {
        id: CustomerId(9),
        name: "Zed".into(),
        ..Customer::default()
    };
    session.apply_refresh(Ok(vec![second.clone(), ann()]));

    assert_eq!(session.customers(), &[second, ann()]);
    assert!(session.notifications().current().is_none());
}

#[test]
fn failed_refresh_keeps_stale_list() {
    let mut session = CustomerSession::default();
    session.apply_refresh(Ok(vec![ann()]));
    session.apply_refresh(Err(failure(GatewayOperation::List)));

    assert_eq!(session.customers(), &[ann()]);
    assert_eq!(
        current_message(&session),
        Some((MSG_FETCH_FAILED, Severity::Error))
    );
}

#[test]
fn delete_request_then_cancel_hides_without_target() {
    let mut session = CustomerSession::default();
    session.request_delete(CustomerId(1));
    assert!(session.delete_confirmation().is_visible());
    assert_eq!(session.delete_confirmation().target(), Some(CustomerId(1)));

    session.cancel_delete();

    assert_eq!(session.delete_confirmation(), DeleteConfirmation::Hidden);
    assert_eq!(session.begin_delete(), None);
}

#[test]
fn begin_delete_hides_dialog_before_outcome() {
    let mut session = CustomerSession::default();
    session.request_delete(CustomerId(4));

    assert_eq!(session.begin_delete(), Some(CustomerId(4)));
    assert!(!session.delete_confirmation().is_visible());

    assert!(!session.finish_delete(CustomerId(4), Err(failure(GatewayOperation::Delete))));
    assert!(!session.delete_confirmation().is_visible());
    assert_eq!(
        current_message(&session),
        Some((MSG_DELETE_FAILED, Severity::Error))
    );
}

#[test]
fn successful_delete_requests_refresh() {
    let mut session = CustomerSession::default();
    session.request_delete(CustomerId(4));
    let id = session.begin_delete().expect("armed");

    assert!(session.finish_delete(id, Ok(())));
    assert_eq!(
        current_message(&session),
        Some((MSG_DELETED, Severity::Success))
    );
}

#[test]
fn session_uses_configured_notification_timeout() {
    let session = CustomerSession::new(Duration::from_secs(2));
    assert_eq!(session.notifications().auto_hide(), Duration::from_secs(2));
}
