//! The dashboard page served at `/`.
//!
//! The page is a fixed five-panel layout. Every panel starts with its
//! placeholder row and the action buttons start in the enablement of an
//! empty selection; clients fill the panels in through `/api`.

use std::fmt::Write;

use axum::response::Html;
use axum::{routing::get, Router};
use shopfloor_core::render::{escape_html, render_action_buttons, render_empty, Panel};
use shopfloor_core::selection::Selection;

use crate::state::AppState;

/// Panels in layout order with their titles.
const PANELS: &[(Panel, &str)] = &[
    (Panel::WorkAreas, "작업구역"),
    (Panel::ProductionPlans, "생산계획 / 공정흐름"),
    (Panel::ProcessWorks, "공정작업"),
    (Panel::Workers, "작업자"),
    (Panel::WorkProgress, "작업진행정보"),
];

const STATUS_PANELS: &[(Panel, &str)] = &[
    (Panel::BenchStatus, "벤치 현황"),
    (Panel::ExceptionStatus, "공정이상 현황"),
];

/// Render the full dashboard page.
pub fn render_dashboard() -> String {
    let mut body = String::new();

    for (panel, title) in PANELS {
        let mut headers = String::new();
        for header in panel.headers() {
            let _ = write!(headers, "<th>{}</th>", escape_html(header));
        }
        let _ = write!(
            body,
            r#"<div class="grid-box"><div class="grid-header">{}</div><div class="grid-body"><table><thead><tr>{headers}</tr></thead><tbody id="{}">{}</tbody></table></div></div>"#,
            escape_html(title),
            panel.element_id(),
            render_empty(*panel),
        );
    }

    for (panel, title) in STATUS_PANELS {
        let _ = write!(
            body,
            r#"<div class="status-box"><div class="grid-header">{}</div><div id="{}">{}</div></div>"#,
            escape_html(title),
            panel.element_id(),
            render_empty(*panel),
        );
    }

    let buttons = render_action_buttons(Selection::new().enablement());

    format!(
        r#"<!DOCTYPE html><html lang="ko"><head><meta charset="UTF-8"><title>생산 모니터링</title></head><body><div class="container"><div id="current-time"></div><div class="grid-layout">{body}</div>{buttons}</div></body></html>"#
    )
}

/// GET / -- the dashboard page.
async fn dashboard() -> Html<String> {
    Html(render_dashboard())
}

/// Mount the dashboard page at root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_panel_starts_with_its_placeholder() {
        let html = render_dashboard();

        assert!(html.contains(r#"<tbody id="workAreaTable"><tr><td colspan="2" class="empty-state">전체작업구역 조회를 클릭하세요</td></tr></tbody>"#));
        assert!(html.contains("작업구역을 선택하세요"));
        assert!(html.contains("생산계획을 선택하세요"));
        assert!(html.contains("공정작업을 선택하세요"));
        assert!(html.contains(r#"<div id="benchStatus"><div class="loading">데이터 없음</div></div>"#));
    }

    #[test]
    fn action_buttons_start_disabled() {
        let html = render_dashboard();

        assert!(html.contains(r#"id="btnStart" disabled>"#));
        assert!(html.contains(r#"id="btnEnd" disabled>"#));
        assert!(html.contains(r#"id="btnResolve" disabled>"#));
    }
}
