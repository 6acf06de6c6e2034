//! Dialog Flow Tests
//!
//! Drive create/edit/suspend/recover submissions against the in-memory
//! service, the way the dashboard's dialogs do.

use std::cell::{Cell, RefCell};

use chrono::{Offset, Utc};

use crate::dialog::{submit, DialogHost, DialogState, SubmitBlocked, SubmitOutcome};
use crate::domain::{AdminEntity, DistrictDraft, ElectionParty, ElectorateDistrict, Entity, Node, StatusFilter};
use crate::error::AdminError;
use crate::form::{validate, FormValues};
use crate::list::{ListBody, ListView};
use crate::notify::{Level, Notification, NotificationLog};
use crate::service::memory::{Call, MemoryService};
use crate::service::{load_all, EntityService, Transition};

fn open_dialog() -> RefCell<DialogState> {
    let host = RefCell::new(DialogState::default());
    host.update_dialog(|state| state.open());
    host
}

fn dialog_state(host: &RefCell<DialogState>) -> DialogState {
    *host.borrow()
}

fn district(id: u32, name: &str, active: bool) -> ElectorateDistrict {
    ElectorateDistrict {
        id,
        name: name.to_string(),
        current_voters: 500,
        is_active: active,
        created_at: "2024-01-01T10:00:00Z".to_string(),
    }
}

/// Submit the edit form of `record` with `values`
async fn submit_edit<E: AdminEntity>(
    host: &RefCell<DialogState>,
    service: &MemoryService<E>,
    record: &E,
    values: &FormValues,
    log: &NotificationLog,
    refreshes: &Cell<u32>,
) -> SubmitOutcome {
    let errors = validate(E::FORM, values);
    let payload = record.with_edits(values);
    submit(host, &errors, || service.update(&payload), log, || refreshes.set(refreshes.get() + 1)).await
}

#[tokio::test]
async fn short_name_never_reaches_the_service() {
    let record = district(1, "District A", true);
    let service = MemoryService::with_records(vec![record.clone()]);
    let host = open_dialog();
    let log = NotificationLog::new();
    let refreshes = Cell::new(0);

    let values = record.form_values().with("name", "A");
    let outcome = submit_edit(&host, &service, &record, &values, &log, &refreshes).await;

    assert_eq!(outcome, SubmitOutcome::Blocked(SubmitBlocked::Invalid));
    assert!(service.calls().is_empty());
    assert!(log.is_empty());
    assert_eq!(refreshes.get(), 0);
    let state = dialog_state(&host);
    assert!(state.open && state.show_all_errors && !state.submitting);
}

#[tokio::test]
async fn padded_short_name_never_reaches_the_service() {
    let record = district(1, "District A", true);
    let service = MemoryService::with_records(vec![record.clone()]);
    let host = open_dialog();
    let log = NotificationLog::new();
    let refreshes = Cell::new(0);

    let values = record.form_values().with("name", "A ");
    let outcome = submit_edit(&host, &service, &record, &values, &log, &refreshes).await;

    assert_eq!(outcome, SubmitOutcome::Blocked(SubmitBlocked::Invalid));
    assert!(service.calls().is_empty());
    assert_eq!(service.records()[0].name, "District A");
    assert_eq!(refreshes.get(), 0);
}

#[tokio::test]
async fn padded_short_url_never_reaches_the_service() {
    let service = MemoryService::<Node>::new();
    let host = open_dialog();
    let log = NotificationLog::new();
    let values = FormValues::blank(Node::FORM).with("name", "Node").with("url", " abc");
    let errors = validate(Node::FORM, &values);
    let draft = Node::draft(&values);

    let outcome = submit(&host, &errors, || service.create(&draft), &log, || {}).await;

    assert_eq!(outcome, SubmitOutcome::Blocked(SubmitBlocked::Invalid));
    assert!(errors.contains_key("url"));
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn short_name_blocks_create() {
    for name in ["", "A"] {
        let service = MemoryService::<ElectionParty>::new();
        let host = open_dialog();
        let log = NotificationLog::new();
        let refreshes = Cell::new(0);
        let values = FormValues::blank(ElectionParty::FORM).with("name", name);
        let errors = validate(ElectionParty::FORM, &values);
        let draft = ElectionParty::draft(&values);

        let outcome = submit(
            &host,
            &errors,
            || service.create(&draft),
            &log,
            || refreshes.set(refreshes.get() + 1),
        )
        .await;

        assert_eq!(outcome, SubmitOutcome::Blocked(SubmitBlocked::Invalid), "{name:?}");
        assert!(service.calls().is_empty());
        assert!(service.records().is_empty());
        assert!(log.is_empty());
        assert_eq!(refreshes.get(), 0);
        let state = dialog_state(&host);
        assert!(state.open && state.show_all_errors && !state.submitting);
    }
}

#[tokio::test]
async fn successful_edit_closes_and_refreshes_once() {
    let record = district(1, "District A", true);
    let service = MemoryService::with_records(vec![record.clone()]);
    let host = open_dialog();
    let log = NotificationLog::new();
    let refreshes = Cell::new(0);

    let values = record.form_values().with("name", "District B");
    let outcome = submit_edit(&host, &service, &record, &values, &log, &refreshes).await;

    assert!(outcome.succeeded());
    assert_eq!(refreshes.get(), 1);
    assert!(!dialog_state(&host).open);
    assert!(!dialog_state(&host).submitting);
    assert_eq!(
        log.entries(),
        vec![Notification::success("Electoral district updated successfully")]
    );
    assert_eq!(service.records()[0].name, "District B");
    assert_eq!(service.calls(), vec![Call::Update(1)]);
}

#[tokio::test]
async fn failed_edit_keeps_dialog_open_without_refresh() {
    let record = district(1, "District A", true);
    let service = MemoryService::with_records(vec![record.clone()]);
    service.fail_next(AdminError::Api {
        status: 422,
        message: "Name already exists".into(),
    });
    let host = open_dialog();
    let log = NotificationLog::new();
    let refreshes = Cell::new(0);

    let values = record.form_values().with("name", "District B");
    let outcome = submit_edit(&host, &service, &record, &values, &log, &refreshes).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(AdminError::Api { status: 422, .. })));
    assert_eq!(refreshes.get(), 0);
    let state = dialog_state(&host);
    assert!(state.open && !state.submitting);
    assert_eq!(log.entries(), vec![Notification::error("Name already exists")]);

    // the user retries from the same dialog
    let retry = submit_edit(&host, &service, &record, &values, &log, &refreshes).await;
    assert!(retry.succeeded());
    assert_eq!(refreshes.get(), 1);
}

#[tokio::test]
async fn double_submit_issues_one_request() {
    let service = MemoryService::<ElectionParty>::new();
    let host = open_dialog();
    let log = NotificationLog::new();
    let refreshes = Cell::new(0);
    let values = FormValues::blank(ElectionParty::FORM).with("name", "Green");
    let errors = validate(ElectionParty::FORM, &values);
    let draft = ElectionParty::draft(&values);

    let (svc, payload) = (&service, &draft);
    let first = submit(
        &host,
        &errors,
        move || async move {
            // still in flight when the second click lands
            tokio::task::yield_now().await;
            svc.create(payload).await
        },
        &log,
        || refreshes.set(refreshes.get() + 1),
    );
    let second = submit(&host, &errors, || service.create(&draft), &log, || refreshes.set(refreshes.get() + 1));
    let (first, second) = tokio::join!(first, second);

    assert!(first.succeeded());
    assert_eq!(second, SubmitOutcome::Blocked(SubmitBlocked::InFlight));
    assert_eq!(service.calls(), vec![Call::Create]);
    assert_eq!(service.records().len(), 1);
    assert_eq!(refreshes.get(), 1);
}

#[tokio::test]
async fn create_then_refresh_shows_new_active_record() {
    let service = MemoryService::<Node>::new();
    let host = open_dialog();
    let log = NotificationLog::new();
    let values = FormValues::blank(Node::FORM)
        .with("name", "Colombo 01")
        .with("url", "https://node-01.example");
    let errors = validate(Node::FORM, &values);
    let draft = Node::draft(&values);

    let page_items = RefCell::new(Vec::<Node>::new());
    let outcome = submit(&host, &errors, || service.create(&draft), &log, || {}).await;
    assert!(outcome.succeeded());

    if let Some(items) = load_all(&service, &log).await {
        *page_items.borrow_mut() = items;
    }
    let items = page_items.borrow();
    let active = ListView::build(&items, StatusFilter::Active, false, Utc.fix());
    assert_eq!(active.row_count(), 1);
    assert_eq!(ListView::build(&items, StatusFilter::Inactive, false, Utc.fix()).row_count(), 0);
    assert_eq!(items[0].url, "https://node-01.example");
}

#[tokio::test]
async fn suspend_and_recover_move_rows_between_tabs() {
    let service = MemoryService::with_records(vec![district(1, "District A", true), district(2, "District B", true)]);
    let log = NotificationLog::new();

    let transition = Transition::for_flag(true);
    assert_eq!(transition, Transition::Suspend);
    let host = open_dialog();
    let outcome = submit(&host, &Default::default(), || transition.apply::<ElectorateDistrict, _>(&service, 2), &log, || {}).await;
    assert_eq!(outcome, SubmitOutcome::Succeeded("Electoral district suspended successfully".into()));

    let items = load_all(&service, &log).await.unwrap();
    let archived = ListView::build(&items, StatusFilter::Inactive, false, Utc.fix());
    let ListBody::Table { rows, .. } = archived else {
        panic!("expected the suspended district on the archived tab");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.id(), 2);
    assert!(rows[0].actions.recover);

    let recover = Transition::for_flag(rows[0].record.is_active());
    let host = open_dialog();
    let outcome = submit(&host, &Default::default(), || recover.apply::<ElectorateDistrict, _>(&service, 2), &log, || {}).await;
    assert!(outcome.succeeded());
    let items = load_all(&service, &log).await.unwrap();
    assert_eq!(ListView::build(&items, StatusFilter::Active, false, Utc.fix()).row_count(), 2);
    assert!(log.entries().iter().all(|n| n.level == Level::Success));
}

#[tokio::test]
async fn duplicate_transition_from_a_stale_row_is_rejected_by_the_backend() {
    // two rows rendered from the same stale fetch, both offering "suspend"
    let service = MemoryService::with_records(vec![district(1, "District A", true)]);
    let log = NotificationLog::new();

    let (a, b) = (open_dialog(), open_dialog());
    let first = submit(&a, &Default::default(), || service.suspend(1), &log, || {}).await;
    let second = submit(&b, &Default::default(), || service.suspend(1), &log, || {}).await;

    assert!(first.succeeded());
    assert!(matches!(second, SubmitOutcome::Failed(AdminError::Api { status: 409, .. })));
    assert!(dialog_state(&b).open);
}

#[tokio::test]
async fn failed_fetch_notifies_and_keeps_previous_items() {
    let service = MemoryService::with_records(vec![district(1, "District A", true)]);
    let log = NotificationLog::new();
    let mut items = load_all(&service, &log).await.unwrap_or_default();

    service.fail_next(AdminError::Network("connection refused".into()));
    if let Some(fresh) = load_all(&service, &log).await {
        items = fresh;
    }

    assert_eq!(items.len(), 1);
    assert_eq!(log.entries(), vec![Notification::error("network error: connection refused")]);
}

#[tokio::test]
async fn create_draft_payload_matches_backend_shape() {
    let values = FormValues::blank(ElectorateDistrict::FORM).with("name", "  Gampaha ");
    assert_eq!(ElectorateDistrict::draft(&values), DistrictDraft { name: "Gampaha".into() });
    let json = serde_json::to_value(Node::draft(&FormValues::default().with("name", "n"))).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "n", "url": "" }));
}
