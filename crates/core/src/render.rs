//! View renderer: projects fetched rows into table markup.
//!
//! Rendering is a pure function of the rows and the current selection.
//! Missing optional text fields render `-`, missing numeric fields render
//! `0`, and an empty result renders a single placeholder row carrying the
//! panel's instructional message. All interpolated values are escaped.

use std::collections::BTreeSet;
use std::fmt::Write;

use serde_json::Value;

use crate::selection::Enablement;
use crate::status::Status;
use crate::types::{Row, SelectionId};

/// Placeholder for missing text fields.
pub const MISSING_TEXT: &str = "-";

/// Placeholder for missing numeric fields.
pub const MISSING_NUMBER: &str = "0";

/// A display surface on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    WorkAreas,
    ProductionPlans,
    ProcessWorks,
    Workers,
    WorkProgress,
    /// Legacy production list.
    Production,
    BenchStatus,
    ExceptionStatus,
}

impl Panel {
    /// DOM id of the panel's body element.
    pub fn element_id(&self) -> &'static str {
        match self {
            Self::WorkAreas => "workAreaTable",
            Self::ProductionPlans => "productionPlanTable",
            Self::ProcessWorks => "processWorkTable",
            Self::Workers => "workerTable",
            Self::WorkProgress => "workProgressTable",
            Self::Production => "tableBody",
            Self::BenchStatus => "benchStatus",
            Self::ExceptionStatus => "exceptionStatus",
        }
    }

    /// Column headers of table panels; status panels have none.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::WorkAreas => &["코드", "작업구역"],
            Self::ProductionPlans => &["기종", "호기", "계획일", "수량", "공정진행", "상태"],
            Self::ProcessWorks => &["공정코드", "공정명", "작업순서", "상태"],
            Self::Workers => &["선택", "사번", "이름"],
            Self::WorkProgress => &[
                "작업ID",
                "공정명",
                "작업자",
                "시작시간",
                "경과시간",
                "진행수량",
                "상태",
            ],
            Self::Production => &[
                "선택", "No", "기종", "공정코드", "단위", "수량", "상태", "작업장", "시작시간",
            ],
            Self::BenchStatus | Self::ExceptionStatus => &[],
        }
    }

    /// Message shown when the panel has no rows.
    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::WorkAreas => "전체작업구역 조회를 클릭하세요",
            Self::ProductionPlans => "작업구역을 선택하세요",
            Self::ProcessWorks => "생산계획을 선택하세요",
            Self::Workers => "작업자 목록",
            Self::WorkProgress => "공정작업을 선택하세요",
            Self::Production => "데이터가 없습니다.",
            Self::BenchStatus | Self::ExceptionStatus => "데이터 없음",
        }
    }

    fn is_status_panel(&self) -> bool {
        matches!(self, Self::BenchStatus | Self::ExceptionStatus)
    }
}

/// Selection state the renderer highlights.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlight<'a> {
    /// The selected row of a single-select panel.
    pub selected: Option<&'a SelectionId>,
    /// The checked rows of a multi-select panel.
    pub checked: Option<&'a BTreeSet<SelectionId>>,
}

impl Highlight<'_> {
    fn is_selected(&self, id: Option<&SelectionId>) -> bool {
        matches!((self.selected, id), (Some(a), Some(b)) if a == b)
    }

    fn is_checked(&self, id: Option<&SelectionId>) -> bool {
        match (self.checked, id) {
            (Some(set), Some(id)) => set.contains(id),
            _ => false,
        }
    }
}

/// Render the body markup of `panel` for `rows`.
pub fn render_panel(panel: Panel, rows: &[Row], highlight: Highlight<'_>) -> String {
    if rows.is_empty() {
        return render_empty(panel);
    }

    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        let line = match panel {
            Panel::WorkAreas => work_area_row(row, highlight),
            Panel::ProductionPlans => plan_row(row, highlight),
            Panel::ProcessWorks => process_work_row(row, highlight),
            Panel::Workers => worker_row(row, highlight),
            Panel::WorkProgress => progress_row(row),
            Panel::Production => production_row(index, row, highlight),
            Panel::BenchStatus => status_item(row, "status-item"),
            Panel::ExceptionStatus => status_item(row, "status-item exception"),
        };
        out.push_str(&line);
    }
    out
}

/// Render the placeholder shown when `panel` has no rows.
pub fn render_empty(panel: Panel) -> String {
    let message = escape_html(panel.empty_message());
    if panel.is_status_panel() {
        format!(r#"<div class="loading">{message}</div>"#)
    } else {
        format!(
            r#"<tr><td colspan="{}" class="empty-state">{message}</td></tr>"#,
            panel.headers().len()
        )
    }
}

/// Render the three action buttons with their current enablement.
pub fn render_action_buttons(enablement: Enablement) -> String {
    let buttons = [
        ("btnStart", "btn btn-success", "시작", enablement.can_start),
        ("btnEnd", "btn btn-danger", "종료", enablement.can_end),
        ("btnResolve", "btn btn-warning", "공정이상해제", enablement.can_resolve),
    ];

    let mut out = String::from(r#"<div class="btn-group">"#);
    for (id, class, label, enabled) in buttons {
        let disabled = if enabled { "" } else { " disabled" };
        let _ = write!(
            out,
            r#"<button class="{class}" id="{id}"{disabled}>{label}</button>"#
        );
    }
    out.push_str("</div>");
    out
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Field access
// ---------------------------------------------------------------------------

/// Text form of a scalar field, `None` when missing, null or empty.
pub fn field_text(row: &Row, key: &str) -> Option<String> {
    match row.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn text_or_dash(row: &Row, key: &str) -> String {
    escape_html(&field_text(row, key).unwrap_or_else(|| MISSING_TEXT.to_string()))
}

fn number_or_zero(row: &Row, key: &str) -> String {
    escape_html(&field_text(row, key).unwrap_or_else(|| MISSING_NUMBER.to_string()))
}

fn status_cell(row: &Row) -> String {
    match field_text(row, "status") {
        Some(raw) => {
            let status = Status::parse(&raw);
            format!(
                r#"<td><span class="status status-{}">{}</span></td>"#,
                escape_html(status.as_str()),
                escape_html(status.label())
            )
        }
        None => format!("<td>{MISSING_TEXT}</td>"),
    }
}

fn row_open(id: Option<&SelectionId>, selected: bool) -> String {
    let class = if selected {
        "selectable selected"
    } else {
        "selectable"
    };
    match id {
        Some(id) => format!(
            r#"<tr class="{class}" data-id="{}">"#,
            escape_html(id.as_str())
        ),
        None => format!(r#"<tr class="{class}">"#),
    }
}

// ---------------------------------------------------------------------------
// Panel rows
// ---------------------------------------------------------------------------

fn work_area_row(row: &Row, highlight: Highlight<'_>) -> String {
    let id = SelectionId::from_row(row, &["code", "id"]);
    format!(
        "{}<td>{}</td><td>{}</td></tr>",
        row_open(id.as_ref(), highlight.is_selected(id.as_ref())),
        text_or_dash(row, "code"),
        text_or_dash(row, "name"),
    )
}

fn plan_row(row: &Row, highlight: Highlight<'_>) -> String {
    let id = SelectionId::from_row(row, &["id"]);
    format!(
        "{}<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>{}</tr>",
        row_open(id.as_ref(), highlight.is_selected(id.as_ref())),
        text_or_dash(row, "model"),
        text_or_dash(row, "machine"),
        text_or_dash(row, "planDate"),
        number_or_zero(row, "quantity"),
        text_or_dash(row, "processProgress"),
        status_cell(row),
    )
}

fn process_work_row(row: &Row, highlight: Highlight<'_>) -> String {
    let id = SelectionId::from_row(row, &["id"]);
    format!(
        "{}<td>{}</td><td>{}</td><td>{}</td>{}</tr>",
        row_open(id.as_ref(), highlight.is_selected(id.as_ref())),
        text_or_dash(row, "code"),
        text_or_dash(row, "name"),
        number_or_zero(row, "sequence"),
        status_cell(row),
    )
}

fn worker_row(row: &Row, highlight: Highlight<'_>) -> String {
    let id = SelectionId::from_row(row, &["id", "empNo"]);
    let checked = if highlight.is_checked(id.as_ref()) {
        " checked"
    } else {
        ""
    };
    let data_id = id
        .as_ref()
        .map(|id| escape_html(id.as_str()))
        .unwrap_or_default();
    format!(
        r#"<tr><td><input type="checkbox" data-id="{data_id}"{checked}></td><td>{}</td><td>{}</td></tr>"#,
        text_or_dash(row, "empNo"),
        text_or_dash(row, "name"),
    )
}

fn progress_row(row: &Row) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>{}</tr>",
        text_or_dash(row, "id"),
        text_or_dash(row, "processName"),
        text_or_dash(row, "worker"),
        text_or_dash(row, "startTime"),
        text_or_dash(row, "elapsed"),
        number_or_zero(row, "quantity"),
        status_cell(row),
    )
}

fn production_row(index: usize, row: &Row, highlight: Highlight<'_>) -> String {
    let id = SelectionId::from_row(row, &["id"]);
    let raw_status = field_text(row, "status").unwrap_or_else(|| "normal".to_string());
    let checked = if highlight.is_checked(id.as_ref()) {
        " checked"
    } else {
        ""
    };
    let data_id = id
        .as_ref()
        .map(|id| escape_html(id.as_str()))
        .unwrap_or_default();
    format!(
        r#"<tr class="status-{}"><td><input type="checkbox" data-id="{data_id}"{checked}></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>{}<td>{}</td><td>{}</td></tr>"#,
        escape_html(&raw_status),
        index + 1,
        text_or_dash(row, "modelName"),
        text_or_dash(row, "processCode"),
        text_or_dash(row, "unit"),
        number_or_zero(row, "quantity"),
        status_cell(row),
        text_or_dash(row, "workCenter"),
        text_or_dash(row, "startTime"),
    )
}

fn status_item(row: &Row, class: &str) -> String {
    let name = field_text(row, "name")
        .or_else(|| field_text(row, "text"))
        .unwrap_or_else(|| MISSING_TEXT.to_string());
    let count = field_text(row, "count")
        .filter(|c| c != "0")
        .map(|c| format!(" ({})", escape_html(&c)))
        .unwrap_or_default();
    format!(
        r#"<div class="{class}">{}{count}</div>"#,
        escape_html(&name)
    )
}
