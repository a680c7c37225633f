//! The dashboard controller.
//!
//! Owns the [`Selection`] and the rows behind each selection panel. Reads
//! fall back to fixed placeholder data when the gateway cannot answer;
//! actions never fall back and leave the selection as it was on failure.

use serde_json::{json, Value};
use shopfloor_core::fallback;
use shopfloor_core::render::{render_action_buttons, render_panel, Highlight, Panel};
use shopfloor_core::selection::{Enablement, Level, Selection};
use shopfloor_core::types::{RecordSet, Row, SelectionId};

use crate::api::{list_or_fallback, paths, ActionOutcome, FloorApi};
use crate::error::ClientError;

pub struct Dashboard<A> {
    api: A,
    plant: Option<String>,
    selection: Selection,
    work_areas: RecordSet,
    plans: RecordSet,
    process_works: RecordSet,
    workers: RecordSet,
    progress: RecordSet,
}

impl<A: FloorApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            plant: None,
            selection: Selection::new(),
            work_areas: Vec::new(),
            plans: Vec::new(),
            process_works: Vec::new(),
            workers: Vec::new(),
            progress: Vec::new(),
        }
    }

    /// Scope the work-area list to one plant.
    pub fn with_plant(mut self, plant: impl Into<String>) -> Self {
        self.plant = Some(plant.into());
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn enablement(&self) -> Enablement {
        self.selection.enablement()
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Load the work areas and workers shown before anything is selected.
    pub async fn load_initial(&mut self) {
        let plant = self.plant.clone();
        let query: Vec<(&str, &str)> = plant.as_deref().map(|p| ("plant", p)).into_iter().collect();

        let (work_areas, workers) = tokio::join!(
            list_or_fallback(&self.api, paths::WORK_AREA_LIST, &query, fallback::work_areas),
            list_or_fallback(&self.api, paths::WORKER_LIST, &[], fallback::workers),
        );
        self.work_areas = work_areas;
        self.workers = workers;

        tracing::debug!(
            work_areas = self.work_areas.len(),
            workers = self.workers.len(),
            "Initial data loaded"
        );
    }

    /// Select a work area and load its production plans.
    pub async fn select_work_area(&mut self, id: SelectionId) -> Result<(), ClientError> {
        self.transition(Level::WorkArea, id.clone())?;
        self.plans = list_or_fallback(
            &self.api,
            paths::PRODUCTION_PLAN_LIST,
            &[("workArea", id.as_str())],
            fallback::production_plans,
        )
        .await;
        Ok(())
    }

    /// Select a production plan and load its process works.
    pub async fn select_plan(&mut self, id: SelectionId) -> Result<(), ClientError> {
        self.transition(Level::Plan, id.clone())?;
        self.refresh_process_works(&id).await;
        Ok(())
    }

    /// Select a process work and load its progress.
    pub async fn select_process_work(&mut self, id: SelectionId) -> Result<(), ClientError> {
        self.transition(Level::ProcessWork, id.clone())?;
        self.refresh_progress(&id).await;
        Ok(())
    }

    /// Check or uncheck a worker. Returns whether the worker is now checked.
    pub fn toggle_worker(&mut self, id: SelectionId) -> bool {
        self.selection.toggle_worker(id)
    }

    /// Clear the whole selection and the rows that depended on it.
    pub fn reset(&mut self) {
        self.selection.reset();
        self.plans.clear();
        self.process_works.clear();
        self.progress.clear();
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Start the selected process work with every checked worker.
    pub async fn start(&mut self) -> Result<ActionOutcome, ClientError> {
        if !self.enablement().can_start {
            return Err(ClientError::NotPermitted { action: "start" });
        }
        let process_work = self.selected_process_work("start")?;

        let workers: Vec<Value> = self
            .selection
            .workers()
            .iter()
            .map(|w| Value::String(w.to_string()))
            .collect();
        let worker_count = workers.len();
        let body = json!({ "processWorkId": process_work.as_str(), "workers": workers });

        let outcome = self.api.post_action(paths::WORK_START, body).await?;
        tracing::info!(process_work = %process_work, workers = worker_count, "Work started");

        self.refresh_progress(&process_work).await;
        Ok(outcome)
    }

    /// End the selected process work.
    pub async fn end(&mut self) -> Result<ActionOutcome, ClientError> {
        if !self.enablement().can_end {
            return Err(ClientError::NotPermitted { action: "end" });
        }
        let process_work = self.selected_process_work("end")?;

        let body = json!({ "processWorkId": process_work.as_str() });
        let outcome = self.api.post_action(paths::WORK_END, body).await?;
        tracing::info!(process_work = %process_work, "Work ended");

        self.refresh_progress(&process_work).await;
        if let Some(plan) = self.selection.plan().cloned() {
            self.refresh_process_works(&plan).await;
        }
        Ok(outcome)
    }

    /// Clear the process exception of the selected process work.
    pub async fn resolve(&mut self) -> Result<ActionOutcome, ClientError> {
        if !self.enablement().can_resolve {
            return Err(ClientError::NotPermitted { action: "resolve" });
        }
        let process_work = self.selected_process_work("resolve")?;

        let body = json!({ "processWorkId": process_work.as_str() });
        let outcome = self.api.post_action(paths::WORK_RESOLVE, body).await?;
        tracing::info!(process_work = %process_work, "Process exception resolved");

        if let Some(plan) = self.selection.plan().cloned() {
            self.refresh_process_works(&plan).await;
        }
        Ok(outcome)
    }

    // -----------------------------------------------------------------------
    // Panels
    // -----------------------------------------------------------------------

    pub fn rows(&self, panel: Panel) -> &[Row] {
        match panel {
            Panel::WorkAreas => &self.work_areas,
            Panel::ProductionPlans => &self.plans,
            Panel::ProcessWorks => &self.process_works,
            Panel::Workers => &self.workers,
            Panel::WorkProgress => &self.progress,
            Panel::Production | Panel::BenchStatus | Panel::ExceptionStatus => &[],
        }
    }

    /// Render one selection panel with the current highlight.
    pub fn render(&self, panel: Panel) -> String {
        let highlight = match panel {
            Panel::WorkAreas => Highlight {
                selected: self.selection.work_area(),
                ..Highlight::default()
            },
            Panel::ProductionPlans => Highlight {
                selected: self.selection.plan(),
                ..Highlight::default()
            },
            Panel::ProcessWorks => Highlight {
                selected: self.selection.process_work(),
                ..Highlight::default()
            },
            Panel::Workers => Highlight {
                checked: Some(self.selection.workers()),
                ..Highlight::default()
            },
            _ => Highlight::default(),
        };
        render_panel(panel, self.rows(panel), highlight)
    }

    pub fn render_buttons(&self) -> String {
        render_action_buttons(self.enablement())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn transition(&mut self, level: Level, id: SelectionId) -> Result<(), ClientError> {
        let cleared = self.selection.select(level, id)?;
        for level in cleared {
            match level {
                Level::WorkArea => self.plans.clear(),
                Level::Plan => self.process_works.clear(),
                Level::ProcessWork => self.progress.clear(),
            }
        }
        Ok(())
    }

    fn selected_process_work(&self, action: &'static str) -> Result<SelectionId, ClientError> {
        self.selection
            .process_work()
            .cloned()
            .ok_or(ClientError::NotPermitted { action })
    }

    async fn refresh_process_works(&mut self, plan: &SelectionId) {
        self.process_works = list_or_fallback(
            &self.api,
            paths::PROCESS_WORK_LIST,
            &[("planId", plan.as_str())],
            fallback::process_works,
        )
        .await;
    }

    async fn refresh_progress(&mut self, process_work: &SelectionId) {
        self.progress = list_or_fallback(
            &self.api,
            paths::WORK_PROGRESS_LIST,
            &[("workId", process_work.as_str())],
            fallback::work_progress,
        )
        .await;
    }
}
