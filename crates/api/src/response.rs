//! Response envelope types for gateway handlers.
//!
//! Every successful response carries `success: true`. List endpoints
//! return the primary result set as `data`, which is always an array.
//! Errors use the envelope produced by [`crate::error::AppError`].

use serde::Serialize;
use shopfloor_core::types::RecordSet;

/// `{ "success": true, "data": [...] }`
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: RecordSet,
}

impl ListResponse {
    pub fn ok(data: RecordSet) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "message": "...", "data": [...] }`
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: RecordSet,
}

impl ActionResponse {
    pub fn ok(message: &'static str, data: RecordSet) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}

/// `{ "success": true, "dataBlock1": [...], "dataBlock2": [...] }`
#[derive(Debug, Serialize)]
pub struct InitialLoadResponse {
    pub success: bool,
    /// Work-area / production-plan projection.
    #[serde(rename = "dataBlock1")]
    pub data_block1: RecordSet,
    /// Worker projection.
    #[serde(rename = "dataBlock2")]
    pub data_block2: RecordSet,
}

impl InitialLoadResponse {
    /// Split result sets in call order; missing sets become empty.
    pub fn from_sets(sets: Vec<RecordSet>) -> Self {
        let mut sets = sets.into_iter();
        Self {
            success: true,
            data_block1: sets.next().unwrap_or_default(),
            data_block2: sets.next().unwrap_or_default(),
        }
    }
}
