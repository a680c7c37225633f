//! Tests for the dashboard controller against a recording gateway.

mod common;

use assert_matches::assert_matches;
use common::{query, RecordingApi};
use serde_json::json;
use shopfloor_client::api::paths;
use shopfloor_client::{ClientError, Dashboard};
use shopfloor_core::error::CoreError;
use shopfloor_core::fallback;
use shopfloor_core::render::Panel;
use shopfloor_core::selection::Stage;
use shopfloor_core::types::SelectionId;

fn id(s: &str) -> SelectionId {
    SelectionId::from(s)
}

/// Dashboard with work area W1, plan P1 and process work 7 selected.
async fn selected_dashboard() -> Dashboard<RecordingApi> {
    let mut dashboard = Dashboard::new(RecordingApi::new());
    dashboard.select_work_area(id("W1")).await.unwrap();
    dashboard.select_plan(id("P1")).await.unwrap();
    dashboard.select_process_work(id("7")).await.unwrap();
    dashboard
}

// ---------------------------------------------------------------------------
// Test: Initial load reads work areas and workers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_initial_reads_work_areas_and_workers() {
    let api = RecordingApi::new();
    api.returns(paths::WORK_AREA_LIST, json!([{ "code": "WA01", "name": "메인" }]));
    api.returns(paths::WORKER_LIST, json!([{ "empNo": "E001", "name": "김철수" }]));
    let mut dashboard = Dashboard::new(api).with_plant("P100");

    dashboard.load_initial().await;

    assert_eq!(dashboard.rows(Panel::WorkAreas).len(), 1);
    assert_eq!(dashboard.rows(Panel::Workers).len(), 1);
    assert_eq!(
        dashboard.api().gets_to(paths::WORK_AREA_LIST),
        vec![query(&[("plant", "P100")])]
    );
}

// ---------------------------------------------------------------------------
// Test: Failed reads fall back to the placeholder dataset
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_reads_show_fallback_data() {
    let api = RecordingApi::new();
    api.fail_path(paths::WORK_AREA_LIST);
    api.fail_path(paths::WORKER_LIST);
    let mut dashboard = Dashboard::new(api);

    dashboard.load_initial().await;

    assert_eq!(dashboard.rows(Panel::WorkAreas), fallback::work_areas().as_slice());
    assert_eq!(dashboard.rows(Panel::Workers), fallback::workers().as_slice());
}

// ---------------------------------------------------------------------------
// Test: Each selection loads the next panel with its scope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn selections_load_dependent_panels() {
    let dashboard = selected_dashboard().await;
    let api = dashboard.api();

    assert_eq!(
        api.gets_to(paths::PRODUCTION_PLAN_LIST),
        vec![query(&[("workArea", "W1")])]
    );
    assert_eq!(
        api.gets_to(paths::PROCESS_WORK_LIST),
        vec![query(&[("planId", "P1")])]
    );
    assert_eq!(
        api.gets_to(paths::WORK_PROGRESS_LIST),
        vec![query(&[("workId", "7")])]
    );
}

// ---------------------------------------------------------------------------
// Test: Enablement follows the selection and the worker set
// ---------------------------------------------------------------------------

#[tokio::test]
async fn start_requires_a_worker() {
    let mut dashboard = selected_dashboard().await;

    let enablement = dashboard.enablement();
    assert!(!enablement.can_start);
    assert!(enablement.can_end);
    assert!(enablement.can_resolve);

    assert!(dashboard.toggle_worker(id("E001")));
    assert!(dashboard.enablement().can_start);
    assert!(dashboard.render_buttons().contains(r#"id="btnStart">"#));
}

// ---------------------------------------------------------------------------
// Test: Selecting a new work area clears deeper levels but keeps workers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_work_area_clears_plan_and_process_work_data() {
    let api = RecordingApi::new();
    api.returns(paths::PROCESS_WORK_LIST, json!([{ "id": 7, "name": "사상" }]));
    api.returns(paths::WORK_PROGRESS_LIST, json!([{ "id": 1, "quantity": 3 }]));
    let mut dashboard = Dashboard::new(api);
    dashboard.select_work_area(id("W1")).await.unwrap();
    dashboard.select_plan(id("P1")).await.unwrap();
    dashboard.select_process_work(id("7")).await.unwrap();
    dashboard.toggle_worker(id("E001"));

    dashboard.select_work_area(id("W2")).await.unwrap();

    assert_eq!(
        dashboard.selection().stage(),
        &Stage::WorkAreaSelected { work_area: id("W2") }
    );
    assert!(dashboard.rows(Panel::ProcessWorks).is_empty());
    assert!(dashboard.rows(Panel::WorkProgress).is_empty());
    assert!(dashboard.selection().workers().contains(&id("E001")));
    assert!(dashboard
        .render(Panel::ProcessWorks)
        .contains("생산계획을 선택하세요"));
}

// ---------------------------------------------------------------------------
// Test: Selecting a plan without a work area is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn plan_without_work_area_is_rejected_without_request() {
    let mut dashboard = Dashboard::new(RecordingApi::new());

    let result = dashboard.select_plan(id("P1")).await;

    assert_matches!(result, Err(ClientError::Selection(CoreError::MissingParent { .. })));
    assert!(dashboard.api().requests().is_empty());
}

// ---------------------------------------------------------------------------
// Test: Start sends the selected workers and refreshes progress
// ---------------------------------------------------------------------------

#[tokio::test]
async fn start_sends_selected_workers_and_refreshes_progress() {
    let mut dashboard = selected_dashboard().await;
    dashboard.toggle_worker(id("E002"));
    dashboard.toggle_worker(id("E001"));
    dashboard.api().clear();

    dashboard.start().await.unwrap();

    let posts = dashboard.api().posts_to(paths::WORK_START);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["processWorkId"], "7");
    let mut workers: Vec<String> = posts[0]["workers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w.as_str().unwrap().to_string())
        .collect();
    workers.sort();
    assert_eq!(workers, vec!["E001", "E002"]);

    assert_eq!(
        dashboard.api().gets_to(paths::WORK_PROGRESS_LIST),
        vec![query(&[("workId", "7")])]
    );
    assert_eq!(dashboard.selection().process_work(), Some(&id("7")));
}

#[tokio::test]
async fn start_without_workers_is_not_permitted() {
    let mut dashboard = selected_dashboard().await;
    dashboard.api().clear();

    assert_matches!(
        dashboard.start().await,
        Err(ClientError::NotPermitted { action: "start" })
    );
    assert!(dashboard.api().requests().is_empty());
}

// ---------------------------------------------------------------------------
// Test: End refreshes progress and the process-work list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn end_refreshes_progress_and_process_works() {
    let mut dashboard = selected_dashboard().await;
    dashboard.api().clear();

    dashboard.end().await.unwrap();

    assert_eq!(
        dashboard.api().posts_to(paths::WORK_END),
        vec![json!({ "processWorkId": "7" })]
    );
    assert_eq!(dashboard.api().gets_to(paths::WORK_PROGRESS_LIST).len(), 1);
    assert_eq!(
        dashboard.api().gets_to(paths::PROCESS_WORK_LIST),
        vec![query(&[("planId", "P1")])]
    );
    assert_eq!(dashboard.selection().process_work(), Some(&id("7")));
}

#[tokio::test]
async fn resolve_refreshes_process_works_only() {
    let mut dashboard = selected_dashboard().await;
    dashboard.api().clear();

    dashboard.resolve().await.unwrap();

    assert_eq!(dashboard.api().posts_to(paths::WORK_RESOLVE).len(), 1);
    assert_eq!(dashboard.api().gets_to(paths::PROCESS_WORK_LIST).len(), 1);
    assert!(dashboard.api().gets_to(paths::WORK_PROGRESS_LIST).is_empty());
}

// ---------------------------------------------------------------------------
// Test: A refused action surfaces the error and keeps the selection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn refused_action_keeps_selection() {
    let mut dashboard = selected_dashboard().await;
    dashboard.toggle_worker(id("E001"));
    dashboard.api().fail_path(paths::WORK_START);

    let err = dashboard.start().await.unwrap_err();

    assert_eq!(err.user_message(), "action refused");
    assert_eq!(dashboard.selection().process_work(), Some(&id("7")));
    assert!(dashboard.selection().workers().contains(&id("E001")));
}

// ---------------------------------------------------------------------------
// Test: Reset clears selection and dependent rows
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reset_returns_to_no_work_area() {
    let mut dashboard = selected_dashboard().await;
    dashboard.toggle_worker(id("E001"));

    dashboard.reset();

    assert_eq!(dashboard.selection().stage(), &Stage::NoWorkArea);
    assert!(dashboard.selection().workers().is_empty());
    assert!(dashboard.rows(Panel::ProductionPlans).is_empty());
    assert!(!dashboard.enablement().can_end);
}
