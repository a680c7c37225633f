//! Status vocabulary shared by production plans, process works, work
//! progress and the legacy production list.
//!
//! Status transitions are owned by the remote database; this module only
//! maps the raw values to display labels. Unknown values are kept as-is.

use serde::{Deserialize, Serialize};

pub const STATUS_RUNNING: &str = "running";
pub const STATUS_WAITING: &str = "waiting";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_ERROR: &str = "error";

/// Legacy production list values.
pub const STATUS_NORMAL: &str = "normal";
pub const STATUS_WARNING: &str = "warning";

/// Status of a plan, process work or progress record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Running,
    Waiting,
    Completed,
    Error,
    Normal,
    Warning,
    /// Any value this system does not recognize.
    Other(String),
}

impl Status {
    pub fn parse(raw: &str) -> Self {
        match raw {
            STATUS_RUNNING => Self::Running,
            STATUS_WAITING => Self::Waiting,
            STATUS_COMPLETED => Self::Completed,
            STATUS_ERROR => Self::Error,
            STATUS_NORMAL => Self::Normal,
            STATUS_WARNING => Self::Warning,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => STATUS_RUNNING,
            Self::Waiting => STATUS_WAITING,
            Self::Completed => STATUS_COMPLETED,
            Self::Error => STATUS_ERROR,
            Self::Normal => STATUS_NORMAL,
            Self::Warning => STATUS_WARNING,
            Self::Other(raw) => raw,
        }
    }

    /// Display label shown on the dashboard.
    pub fn label(&self) -> &str {
        match self {
            Self::Running => "진행중",
            Self::Waiting => "대기",
            Self::Completed => "완료",
            Self::Error => "오류",
            Self::Normal => "정상",
            Self::Warning => "경고",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        value.as_str().to_string()
    }
}
