//! Fixed placeholder datasets shown when a read request fails.
//!
//! Only read paths fall back; actions never do.

use serde_json::json;

use crate::types::{record_set, RecordSet};

pub fn work_areas() -> RecordSet {
    record_set(json!([
        { "code": "WA01", "name": "CP_DP 메인조립" },
        { "code": "WA02", "name": "CP_DP 사상화" },
        { "code": "WA03", "name": "CP_DP 사상내열" }
    ]))
}

pub fn production_plans() -> RecordSet {
    record_set(json!([
        {
            "id": 1, "model": "CP619Z1", "machine": "1호기", "planDate": "2026-01-18",
            "quantity": 1340, "processProgress": "2/5", "status": "running"
        },
        {
            "id": 2, "model": "CP865921M8AB", "machine": "2호기", "planDate": "2026-01-18",
            "quantity": 1393, "processProgress": "0/4", "status": "waiting"
        }
    ]))
}

pub fn process_works() -> RecordSet {
    record_set(json!([
        { "id": 11, "code": "CPBP90066", "name": "메인조립", "sequence": 1, "status": "completed" },
        { "id": 12, "code": "CP865921", "name": "사상", "sequence": 2, "status": "running" },
        { "id": 13, "code": "CP823921", "name": "내열검사", "sequence": 3, "status": "waiting" }
    ]))
}

pub fn workers() -> RecordSet {
    record_set(json!([
        { "id": "E001", "empNo": "E001", "name": "김철수" },
        { "id": "E002", "empNo": "E002", "name": "이영희" },
        { "id": "E003", "empNo": "E003", "name": "박민수" }
    ]))
}

pub fn work_progress() -> RecordSet {
    record_set(json!([
        {
            "id": 101, "workId": 12, "processName": "사상", "worker": "김철수",
            "startTime": "2026-01-18 09:00", "elapsed": "01:20", "quantity": 320,
            "status": "running"
        }
    ]))
}

/// Legacy production list.
pub fn production_items() -> RecordSet {
    record_set(json!([
        { "id": 1, "modelName": "CP619Z1", "processCode": "CPBP90066", "unit": "EA", "quantity": 1340, "status": "normal", "workCenter": "WC001", "startTime": "2026-01-18 09:00" },
        { "id": 2, "modelName": "CP865921M8AB", "processCode": "CP865921", "unit": "EA", "quantity": 1393, "status": "normal", "workCenter": "WC001", "startTime": "2026-01-18 09:15" },
        { "id": 3, "modelName": "CP823921M6AB", "processCode": "CP823921", "unit": "EA", "quantity": 1244, "status": "warning", "workCenter": "WC002", "startTime": "2026-01-18 09:30" },
        { "id": 4, "modelName": "CP996921M6AB", "processCode": "CP965A27", "unit": "EA", "quantity": 1680, "status": "normal", "workCenter": "WC001", "startTime": "2026-01-18 10:00" },
        { "id": 5, "modelName": "CP962921M6AB", "processCode": "CP662CN", "unit": "EA", "quantity": 923, "status": "normal", "workCenter": "WC003", "startTime": "2026-01-18 10:15" },
        { "id": 6, "modelName": "CP963921QABGN", "processCode": "CP962CN", "unit": "EA", "quantity": 1320, "status": "error", "workCenter": "WC002", "startTime": "2026-01-18 10:30" }
    ]))
}

pub fn bench_status() -> RecordSet {
    record_set(json!([
        { "name": "CP_DP 메인조립", "count": 5 },
        { "name": "CP_DP 사상화", "count": 3 }
    ]))
}

pub fn exception_status() -> RecordSet {
    record_set(json!([
        { "name": "CP_DP 4 5 6차", "count": 2 },
        { "name": "CP_DP 사상내열", "count": 1 }
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_sets_are_non_empty() {
        for set in [
            work_areas(),
            production_plans(),
            process_works(),
            workers(),
            work_progress(),
            production_items(),
            bench_status(),
            exception_status(),
        ] {
            assert!(!set.is_empty());
        }
    }
}
