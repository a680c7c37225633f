//! Catalogue of the remote procedures exposed through the gateway.
//!
//! Each [`Procedure`] fixes a procedure name and its parameter list.
//! Arguments are bound by parameter name, in the order declared here.
//! The procedures themselves live in the external database and are
//! treated as an opaque RPC surface.

use crate::error::CoreError;
use crate::params::{ParamValue, ProcedureCall};
use crate::types::SelectionId;

/// Default value of the `Filter` parameter of the production list.
pub const FILTER_ALL: &str = "ALL";

/// Separator used when a list of worker ids is passed as one parameter.
pub const WORKER_LIST_SEPARATOR: &str = ",";

/// A named remote procedure with a fixed parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Procedure {
    pub name: &'static str,
    pub params: &'static [&'static str],
}

impl Procedure {
    const fn new(name: &'static str, params: &'static [&'static str]) -> Self {
        Self { name, params }
    }

    /// Bind `values` positionally to this procedure's parameter names.
    ///
    /// The number of values must match the declared parameter count.
    pub fn bind(&self, values: Vec<ParamValue>) -> Result<ProcedureCall, CoreError> {
        if values.len() != self.params.len() {
            return Err(CoreError::Internal(format!(
                "{} expects {} parameters, got {}",
                self.name,
                self.params.len(),
                values.len()
            )));
        }

        Ok(ProcedureCall {
            procedure: self.name,
            args: self.params.iter().copied().zip(values).collect(),
        })
    }

    /// Bind a procedure that takes no parameters.
    pub fn call(&self) -> Result<ProcedureCall, CoreError> {
        self.bind(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// Lookup lists
// ---------------------------------------------------------------------------

pub const WORK_CENTER_LIST: Procedure = Procedure::new("sp_GetWorkCenterList", &[]);
pub const PLANT_LIST: Procedure = Procedure::new("sp_GetPlantList", &[]);
pub const MODEL_LIST: Procedure = Procedure::new("sp_GetModelList", &[]);
pub const FILTER_WORK_CENTER_LIST: Procedure =
    Procedure::new("sp_GetFilterWorkCenterList", &[]);
pub const PROCESS_LIST: Procedure = Procedure::new("sp_GetProcessList", &[]);
pub const WORKER_LIST: Procedure = Procedure::new("sp_GetWorkerList", &[]);

// ---------------------------------------------------------------------------
// Scoped lists
// ---------------------------------------------------------------------------

pub const PRODUCTION_LIST: Procedure =
    Procedure::new("sp_GetProductionList", &["WorkCenter", "Filter"]);
pub const WORK_AREA_LIST: Procedure = Procedure::new("sp_GetWorkAreaList", &["Plant"]);
pub const PRODUCTION_PLAN_LIST: Procedure = Procedure::new(
    "sp_GetProductionPlanList",
    &["WorkArea", "Model", "StartDate", "EndDate"],
);
pub const PROCESS_WORK_LIST: Procedure = Procedure::new("sp_GetProcessWorkList", &["PlanId"]);
pub const PROCESS_FLOW_LIST: Procedure = Procedure::new("sp_GetProcessFlowList", &["PlanId"]);
pub const WORK_PROGRESS_LIST: Procedure =
    Procedure::new("sp_GetWorkProgressList", &["WorkId"]);

// ---------------------------------------------------------------------------
// Status panels
// ---------------------------------------------------------------------------

pub const BENCH_STATUS: Procedure = Procedure::new("sp_GetBenchStatus", &[]);
pub const EXCEPTION_STATUS: Procedure = Procedure::new("sp_GetExceptionStatus", &[]);

/// Returns two result sets: work-area/plan projection, then workers.
pub const INITIAL_LOAD: Procedure =
    Procedure::new("sp_GetInitialLoad", &["FactUnit", "DeptSeq", "PlantCode"]);

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

pub const START_PRODUCTION: Procedure =
    Procedure::new("sp_StartProduction", &["ItemId", "WorkCenter"]);
pub const COMPLETE_PRODUCTION: Procedure =
    Procedure::new("sp_CompleteProduction", &["ItemId", "Quantity"]);
pub const RESOLVE_PRODUCTION: Procedure =
    Procedure::new("sp_ResolveProduction", &["ItemId", "WorkCenter"]);
pub const CHECK_MATERIAL: Procedure =
    Procedure::new("sp_CheckMaterial", &["ItemId", "WorkCenter"]);

pub const START_WORK: Procedure = Procedure::new("sp_StartWork", &["ProcessWorkId", "Workers"]);
pub const END_WORK: Procedure = Procedure::new("sp_EndWork", &["ProcessWorkId"]);
pub const RESOLVE_WORK: Procedure = Procedure::new("sp_ResolveWork", &["ProcessWorkId"]);

/// Serialize a set of worker ids into the single `Workers` parameter.
pub fn worker_list_param<'a>(workers: impl IntoIterator<Item = &'a SelectionId>) -> ParamValue {
    let joined = workers
        .into_iter()
        .map(SelectionId::as_str)
        .collect::<Vec<_>>()
        .join(WORKER_LIST_SEPARATOR);
    ParamValue::Text(joined)
}
