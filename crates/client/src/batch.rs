//! Legacy per-item production actions.
//!
//! The production list supports multi-select actions that issue one
//! request per selected item, all at once. The batch is reported as
//! failed when any item fails, but items that succeeded stay applied:
//! nothing is rolled back.

use std::collections::BTreeSet;

use futures::future::join_all;
use serde_json::{json, Value};
use shopfloor_core::types::{Row, SelectionId};

use crate::api::{paths, ActionOutcome, FloorApi};
use crate::error::ClientError;

/// Row keys that identify a production item.
const ITEM_ID_KEYS: &[&str] = &["id", "itemId"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductionAction {
    Start,
    Complete,
    Resolve,
    MaterialCheck,
}

impl ProductionAction {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Start => paths::PRODUCTION_START,
            Self::Complete => paths::PRODUCTION_COMPLETE,
            Self::Resolve => paths::PRODUCTION_RESOLVE,
            Self::MaterialCheck => paths::MATERIAL_CHECK,
        }
    }

    /// Button label of the action.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "시작",
            Self::Complete => "종료",
            Self::Resolve => "공정이상해제",
            Self::MaterialCheck => "원재료확인",
        }
    }
}

/// Result of one item of a batch.
#[derive(Debug)]
pub struct ItemOutcome {
    pub item: SelectionId,
    pub result: Result<ActionOutcome, ClientError>,
}

/// Per-item results of a batch, in selection order.
#[derive(Debug)]
pub struct BatchOutcome {
    pub action: ProductionAction,
    pub items: Vec<ItemOutcome>,
}

impl BatchOutcome {
    /// True only when every item succeeded.
    pub fn is_success(&self) -> bool {
        self.items.iter().all(|i| i.result.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.items.iter().filter(|i| i.result.is_err())
    }

    /// The alert text for the whole batch.
    pub fn summary(&self) -> String {
        match self.failed().find_map(|i| i.result.as_ref().err()) {
            None => format!("{} 작업이 완료되었습니다.", self.action.label()),
            Some(err) => format!("작업 중 오류가 발생했습니다: {}", err.user_message()),
        }
    }
}

/// Run `action` for every selected item concurrently.
///
/// Each request carries the item's `workCenter` and `quantity` from the
/// matching row of `rows`. Every request is dispatched even if another
/// fails.
pub async fn run_batch<A: FloorApi + ?Sized>(
    api: &A,
    action: ProductionAction,
    selected: &BTreeSet<SelectionId>,
    rows: &[Row],
) -> Result<BatchOutcome, ClientError> {
    if selected.is_empty() {
        return Err(ClientError::NotPermitted {
            action: action.label(),
        });
    }

    let requests = selected.iter().map(|item| {
        let body = item_body(item, rows);
        async move {
            ItemOutcome {
                item: item.clone(),
                result: api.post_action(action.path(), body).await,
            }
        }
    });
    let items = join_all(requests).await;

    let outcome = BatchOutcome { action, items };
    let failed = outcome.failed().count();
    if failed > 0 {
        tracing::warn!(
            path = action.path(),
            total = outcome.items.len(),
            failed,
            "Batch action partially failed"
        );
    } else {
        tracing::info!(path = action.path(), total = outcome.items.len(), "Batch action completed");
    }

    Ok(outcome)
}

fn item_body(item: &SelectionId, rows: &[Row]) -> Value {
    let row = rows
        .iter()
        .find(|row| SelectionId::from_row(row, ITEM_ID_KEYS).as_ref() == Some(item));

    let item_id = row
        .and_then(|r| ITEM_ID_KEYS.iter().find_map(|k| r.get(*k)))
        .cloned()
        .unwrap_or_else(|| Value::String(item.to_string()));

    json!({
        "itemId": item_id,
        "workCenter": row.and_then(|r| r.get("workCenter")),
        "quantity": row.and_then(|r| r.get("quantity")),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shopfloor_core::types::record_set;

    use super::*;

    #[test]
    fn item_body_copies_row_fields() {
        let rows = record_set(json!([
            { "id": 1, "workCenter": "WC01", "quantity": 300 },
            { "id": 2, "workCenter": "WC02" }
        ]));

        assert_eq!(
            item_body(&SelectionId::from(1), &rows),
            json!({ "itemId": 1, "workCenter": "WC01", "quantity": 300 })
        );
        assert_eq!(
            item_body(&SelectionId::from(2), &rows),
            json!({ "itemId": 2, "workCenter": "WC02", "quantity": null })
        );
    }

    #[test]
    fn unknown_item_is_sent_by_id_only() {
        assert_eq!(
            item_body(&SelectionId::from("X9"), &[]),
            json!({ "itemId": "X9", "workCenter": null, "quantity": null })
        );
    }
}
