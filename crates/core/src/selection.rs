//! Cascading selection state for the dashboard.
//!
//! The chain work area → production plan → process work is single-select
//! at every level; selecting a level clears everything below it. Workers
//! form an independent multi-selection. The enabled action buttons are
//! derived from the combination of both.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::SelectionId;

/// A level of the cascading selection chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    WorkArea,
    Plan,
    ProcessWork,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorkArea => "work area",
            Self::Plan => "production plan",
            Self::ProcessWork => "process work",
        }
    }

    /// Levels whose selection and data depend on this one.
    pub fn descendants(&self) -> &'static [Level] {
        match self {
            Self::WorkArea => &[Level::Plan, Level::ProcessWork],
            Self::Plan => &[Level::ProcessWork],
            Self::ProcessWork => &[],
        }
    }

    fn parent(&self) -> Option<Level> {
        match self {
            Self::WorkArea => None,
            Self::Plan => Some(Level::WorkArea),
            Self::ProcessWork => Some(Level::Plan),
        }
    }
}

/// Position in the selection chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    NoWorkArea,
    WorkAreaSelected {
        work_area: SelectionId,
    },
    PlanSelected {
        work_area: SelectionId,
        plan: SelectionId,
    },
    ProcessWorkSelected {
        work_area: SelectionId,
        plan: SelectionId,
        process_work: SelectionId,
    },
}

/// Which action buttons are currently permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enablement {
    pub can_start: bool,
    pub can_end: bool,
    pub can_resolve: bool,
}

/// The dashboard's complete selection: the cascading chain plus the
/// independent worker set.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    stage: Stage,
    workers: BTreeSet<SelectionId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn work_area(&self) -> Option<&SelectionId> {
        match &self.stage {
            Stage::NoWorkArea => None,
            Stage::WorkAreaSelected { work_area }
            | Stage::PlanSelected { work_area, .. }
            | Stage::ProcessWorkSelected { work_area, .. } => Some(work_area),
        }
    }

    pub fn plan(&self) -> Option<&SelectionId> {
        match &self.stage {
            Stage::PlanSelected { plan, .. } | Stage::ProcessWorkSelected { plan, .. } => {
                Some(plan)
            }
            _ => None,
        }
    }

    pub fn process_work(&self) -> Option<&SelectionId> {
        match &self.stage {
            Stage::ProcessWorkSelected { process_work, .. } => Some(process_work),
            _ => None,
        }
    }

    /// Currently selected id at `level`, if any.
    pub fn selected(&self, level: Level) -> Option<&SelectionId> {
        match level {
            Level::WorkArea => self.work_area(),
            Level::Plan => self.plan(),
            Level::ProcessWork => self.process_work(),
        }
    }

    pub fn workers(&self) -> &BTreeSet<SelectionId> {
        &self.workers
    }

    /// Select `id` at `level`.
    ///
    /// Every level below `level` is cleared. Returns those levels so the
    /// caller can drop their view data. The worker set is never touched.
    pub fn select(&mut self, level: Level, id: SelectionId) -> Result<&'static [Level], CoreError> {
        let next = match level {
            Level::WorkArea => Stage::WorkAreaSelected { work_area: id },
            Level::Plan => {
                let work_area = self.require_parent(level)?.clone();
                Stage::PlanSelected {
                    work_area,
                    plan: id,
                }
            }
            Level::ProcessWork => {
                let plan = self.require_parent(level)?.clone();
                let work_area = self
                    .work_area()
                    .cloned()
                    .ok_or_else(|| missing_parent(level, Level::WorkArea))?;
                Stage::ProcessWorkSelected {
                    work_area,
                    plan,
                    process_work: id,
                }
            }
        };

        self.stage = next;
        Ok(level.descendants())
    }

    /// Add or remove a worker. Returns whether the worker is now selected.
    pub fn toggle_worker(&mut self, id: SelectionId) -> bool {
        if self.workers.remove(&id) {
            false
        } else {
            self.workers.insert(id);
            true
        }
    }

    /// Back to no selection at all, workers included.
    pub fn reset(&mut self) {
        self.stage = Stage::NoWorkArea;
        self.workers.clear();
    }

    pub fn enablement(&self) -> Enablement {
        let work_selected = matches!(self.stage, Stage::ProcessWorkSelected { .. });
        Enablement {
            can_start: work_selected && !self.workers.is_empty(),
            can_end: work_selected,
            can_resolve: work_selected,
        }
    }

    fn require_parent(&self, level: Level) -> Result<&SelectionId, CoreError> {
        let parent = level
            .parent()
            .ok_or_else(|| CoreError::Internal(format!("{} has no parent", level.as_str())))?;
        self.selected(parent)
            .ok_or_else(|| missing_parent(level, parent))
    }
}

fn missing_parent(level: Level, parent: Level) -> CoreError {
    CoreError::MissingParent {
        level: level.as_str(),
        parent: parent.as_str(),
    }
}
