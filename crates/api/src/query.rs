//! Query parameter types for list endpoints.
//!
//! All parameters are optional and forwarded verbatim; the remote
//! procedures decide what an absent value means.

use serde::Deserialize;

/// `/production/list?workCenter=&filter=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionListParams {
    pub work_center: Option<String>,
    pub filter: Option<String>,
}

/// `/work-area/list?plant=`
#[derive(Debug, Default, Deserialize)]
pub struct WorkAreaParams {
    pub plant: Option<String>,
}

/// `/production-plan/list?workArea=&model=&startDate=&endDate=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPlanParams {
    pub work_area: Option<String>,
    pub model: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// `/process-work/list?planId=` and `/process-flow/list?planId=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanParams {
    pub plan_id: Option<String>,
}

/// `/work-progress/list?workId=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkProgressParams {
    pub work_id: Option<String>,
}

/// `/initial-load?factUnit=&deptSeq=&plantCode=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialLoadParams {
    pub fact_unit: Option<String>,
    pub dept_seq: Option<String>,
    pub plant_code: Option<String>,
}
