//! The legacy production list screen.
//!
//! [`ProductionList`] loads the work-center choices and the production
//! items for the chosen work center and status filter, keeps the set of
//! checked items, and runs the per-item actions of [`batch`](crate::batch)
//! over it. A fully successful batch clears the checks and reloads the
//! list; a failed one leaves both as they were.

use std::collections::BTreeSet;

use shopfloor_core::fallback;
use shopfloor_core::procedures::FILTER_ALL;
use shopfloor_core::render::{escape_html, field_text, render_panel, Highlight, Panel};
use shopfloor_core::types::{RecordSet, SelectionId};

use crate::api::{list_or_fallback, paths, FloorApi};
use crate::batch::{run_batch, BatchOutcome, ProductionAction};
use crate::error::ClientError;

/// Label of the "every work center" choice.
const ALL_WORK_CENTERS: &str = "전체";

pub struct ProductionList<A> {
    api: A,
    work_centers: RecordSet,
    work_center: String,
    filter: String,
    items: RecordSet,
    checked: BTreeSet<SelectionId>,
}

impl<A: FloorApi> ProductionList<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            work_centers: Vec::new(),
            work_center: String::new(),
            filter: FILTER_ALL.to_string(),
            items: Vec::new(),
            checked: BTreeSet::new(),
        }
    }

    pub fn items(&self) -> &RecordSet {
        &self.items
    }

    pub fn work_centers(&self) -> &RecordSet {
        &self.work_centers
    }

    /// Checked items, in id order.
    pub fn checked(&self) -> &BTreeSet<SelectionId> {
        &self.checked
    }

    /// Load the work-center choices. On failure the choices stay as they
    /// were; there is no placeholder list.
    pub async fn load_work_centers(&mut self) {
        match self.api.get_list(paths::WORK_CENTER_LIST, &[]).await {
            Ok(rows) => self.work_centers = rows,
            Err(e) => tracing::warn!(error = %e, "Could not load work centers"),
        }
    }

    /// Reload the items for the current work center and filter.
    pub async fn reload(&mut self) {
        let query = [
            ("workCenter", self.work_center.as_str()),
            ("filter", self.filter.as_str()),
        ];
        self.items = list_or_fallback(
            &self.api,
            paths::PRODUCTION_LIST,
            &query,
            fallback::production_items,
        )
        .await;

        tracing::debug!(
            work_center = %self.work_center,
            filter = %self.filter,
            items = self.items.len(),
            "Production list loaded"
        );
    }

    /// Choose a work center (empty for all of them) and reload.
    pub async fn set_work_center(&mut self, work_center: impl Into<String>) {
        self.work_center = work_center.into();
        self.reload().await;
    }

    /// Choose a status filter and reload. An empty filter means `ALL`.
    pub async fn set_filter(&mut self, filter: impl Into<String>) {
        let filter = filter.into();
        self.filter = if filter.is_empty() {
            FILTER_ALL.to_string()
        } else {
            filter
        };
        self.reload().await;
    }

    /// Check or uncheck an item. Returns whether the item is now checked.
    pub fn toggle_item(&mut self, id: SelectionId) -> bool {
        if self.checked.remove(&id) {
            false
        } else {
            self.checked.insert(id);
            true
        }
    }

    /// Check or uncheck every listed item.
    pub fn check_all(&mut self, checked: bool) {
        let listed = self
            .items
            .iter()
            .filter_map(|row| SelectionId::from_row(row, &["id"]));
        if checked {
            self.checked.extend(listed);
        } else {
            for id in listed {
                self.checked.remove(&id);
            }
        }
    }

    /// Run `action` over the checked items.
    ///
    /// Fails with [`ClientError::NotPermitted`] when nothing is checked.
    pub async fn run_action(
        &mut self,
        action: ProductionAction,
    ) -> Result<BatchOutcome, ClientError> {
        let outcome = run_batch(&self.api, action, &self.checked, &self.items).await?;
        if outcome.is_success() {
            self.checked.clear();
            self.reload().await;
        }
        Ok(outcome)
    }

    /// Body markup of the production table.
    pub fn render(&self) -> String {
        let highlight = Highlight {
            checked: Some(&self.checked),
            ..Highlight::default()
        };
        render_panel(Panel::Production, &self.items, highlight)
    }

    /// `<option>` markup of the work-center choice, the current one
    /// selected.
    pub fn render_work_center_options(&self) -> String {
        let option = |value: &str, label: &str| {
            let selected = if value == self.work_center {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                escape_html(value),
                escape_html(label)
            )
        };

        let mut html = option("", ALL_WORK_CENTERS);
        for row in &self.work_centers {
            let Some(code) = field_text(row, "code") else {
                continue;
            };
            let name = field_text(row, "name").unwrap_or_else(|| code.clone());
            html.push_str(&option(&code, &name));
        }
        html
    }
}
