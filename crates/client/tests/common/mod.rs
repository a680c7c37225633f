#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use shopfloor_client::{ActionOutcome, ClientError, FloorApi};
use shopfloor_core::types::{record_set, RecordSet};

/// One request seen by [`RecordingApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Get {
        path: String,
        query: Vec<(String, String)>,
    },
    Post {
        path: String,
        body: Value,
    },
}

/// In-memory [`FloorApi`] that records every request.
///
/// Lists answer with configured rows (empty by default). A path marked as
/// failing answers with a gateway error; an action whose `itemId` is marked
/// as failing does the same.
#[derive(Default)]
pub struct RecordingApi {
    requests: Mutex<Vec<Recorded>>,
    lists: Mutex<HashMap<String, RecordSet>>,
    failing_paths: Mutex<HashSet<String>>,
    failing_items: Mutex<HashSet<String>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returns(&self, path: &str, rows: Value) {
        self.lists
            .lock()
            .unwrap()
            .insert(path.to_string(), record_set(rows));
    }

    pub fn fail_path(&self, path: &str) {
        self.failing_paths.lock().unwrap().insert(path.to_string());
    }

    pub fn fail_item(&self, item: &str) {
        self.failing_items.lock().unwrap().insert(item.to_string());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Bodies posted to `path`, in order.
    pub fn posts_to(&self, path: &str) -> Vec<Value> {
        self.requests()
            .into_iter()
            .filter_map(|r| match r {
                Recorded::Post { path: p, body } if p == path => Some(body),
                _ => None,
            })
            .collect()
    }

    /// Queries sent to `path`, in order.
    pub fn gets_to(&self, path: &str) -> Vec<Vec<(String, String)>> {
        self.requests()
            .into_iter()
            .filter_map(|r| match r {
                Recorded::Get { path: p, query } if p == path => Some(query),
                _ => None,
            })
            .collect()
    }

    fn gateway_error(message: &str) -> ClientError {
        ClientError::Api {
            status: 500,
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl FloorApi for RecordingApi {
    async fn get_list(&self, path: &str, query: &[(&str, &str)]) -> Result<RecordSet, ClientError> {
        self.requests.lock().unwrap().push(Recorded::Get {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        if self.failing_paths.lock().unwrap().contains(path) {
            return Err(Self::gateway_error("list failed"));
        }
        Ok(self
            .lists
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_default())
    }

    async fn post_action(&self, path: &str, body: Value) -> Result<ActionOutcome, ClientError> {
        self.requests.lock().unwrap().push(Recorded::Post {
            path: path.to_string(),
            body: body.clone(),
        });

        if self.failing_paths.lock().unwrap().contains(path) {
            return Err(Self::gateway_error("action refused"));
        }
        let item = match body.get("itemId") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        if self.failing_items.lock().unwrap().contains(&item) {
            return Err(Self::gateway_error(&format!("item {item} failed")));
        }

        Ok(ActionOutcome {
            message: "ok".to_string(),
            data: Vec::new(),
        })
    }
}

pub fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
