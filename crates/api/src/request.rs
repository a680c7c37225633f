//! Request bodies of the action endpoints.
//!
//! Identifiers may arrive as JSON strings or numbers. Only the presence
//! and shape of the identifying fields is checked here; everything else is
//! the remote procedure's business.

use serde::Deserialize;
use serde_json::Value;
use shopfloor_core::error::CoreError;
use shopfloor_core::params::ParamValue;
use shopfloor_core::procedures::worker_list_param;
use shopfloor_core::types::SelectionId;

/// Body of the legacy production actions (`/production/*`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionActionRequest {
    pub item_id: Option<Value>,
    pub work_center: Option<Value>,
    pub quantity: Option<Value>,
}

impl ProductionActionRequest {
    pub fn item_id(&self) -> Result<ParamValue, CoreError> {
        required_id("itemId", self.item_id.as_ref())
    }

    pub fn work_center(&self) -> Result<ParamValue, CoreError> {
        ParamValue::from_optional_json("workCenter", self.work_center.as_ref())
    }

    pub fn quantity(&self) -> Result<ParamValue, CoreError> {
        ParamValue::from_optional_json("quantity", self.quantity.as_ref())
    }
}

/// Body of `/work/start`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartWorkRequest {
    pub process_work_id: Option<Value>,
    #[serde(default)]
    pub workers: Vec<Value>,
}

impl StartWorkRequest {
    pub fn process_work_id(&self) -> Result<ParamValue, CoreError> {
        required_id("processWorkId", self.process_work_id.as_ref())
    }

    /// The worker ids serialized into the single `Workers` parameter.
    pub fn workers(&self) -> Result<ParamValue, CoreError> {
        if self.workers.is_empty() {
            return Err(CoreError::Validation(
                "workers must contain at least one worker id".into(),
            ));
        }

        let ids = self
            .workers
            .iter()
            .map(|w| {
                SelectionId::from_json(w).ok_or_else(|| {
                    CoreError::Validation(format!("invalid worker id: {w}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(worker_list_param(&ids))
    }
}

/// Body of `/work/end` and `/work/resolve`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkTargetRequest {
    pub process_work_id: Option<Value>,
}

impl WorkTargetRequest {
    pub fn process_work_id(&self) -> Result<ParamValue, CoreError> {
        required_id("processWorkId", self.process_work_id.as_ref())
    }
}

/// A required identifier: a non-blank string or a number, bound with its
/// JSON type.
fn required_id(field: &str, value: Option<&Value>) -> Result<ParamValue, CoreError> {
    match value {
        Some(v) if SelectionId::from_json(v).is_some() => ParamValue::from_json(field, v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}
