use std::fmt;
use std::path::Path;

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use lightning_core::StoreError;
use lightning_core::fs::{read_json, write_json_pretty};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TrackerError;

/// Local ISO-8601 timestamp with microseconds, as stored in the log
pub fn timestamp(now: &DateTime<Local>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl Status {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "not_started" => Some(Status::NotStarted),
            "in_progress" => Some(Status::InProgress),
            "completed" => Some(Status::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "not_started",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk project log shared by the plan generator and the progress tracker.
/// Phase and step maps keep file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImplementationLog {
    #[serde(default)]
    pub phases: IndexMap<String, Phase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_step: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<IndexMap<String, Step>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blockers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files_modified: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub metrics: IndexMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Phase {
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(id)
    }

    /// Completed steps over all steps, 0.0 when the phase has none
    pub fn completion_ratio(&self) -> f64 {
        let Some(steps) = &self.steps else {
            return 0.0;
        };
        if steps.is_empty() {
            return 0.0;
        }

        let completed = steps
            .values()
            .filter(|step| step.status == Status::Completed)
            .count();
        completed as f64 / steps.len() as f64
    }

    fn all_steps_completed(&self) -> bool {
        self.steps
            .as_ref()
            .is_some_and(|steps| steps.values().all(|step| step.status == Status::Completed))
    }
}

/// Requested change to a single step
#[derive(Debug, Clone, Copy)]
pub struct StepUpdate<'a> {
    pub status: Status,
    pub files_modified: &'a [String],
    pub notes: Option<&'a str>,
}

impl ImplementationLog {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        read_json(path)
    }

    /// Stamp `last_update` and write the whole log back
    pub fn save(&mut self, path: &Path, now: &DateTime<Local>) -> Result<(), StoreError> {
        self.last_update = Some(timestamp(now));
        write_json_pretty(path, self)?;
        Ok(())
    }

    /// Apply a step update and roll the phase status forward.
    /// Returns the phase status after the update.
    pub fn update_step(
        &mut self,
        phase_id: &str,
        step_id: &str,
        update: StepUpdate<'_>,
        now: &DateTime<Local>,
    ) -> Result<Status, TrackerError> {
        let phase = self
            .phases
            .get_mut(phase_id)
            .ok_or_else(|| TrackerError::UnknownPhase(phase_id.to_string()))?;
        let stamp = timestamp(now);

        let step = phase
            .steps
            .get_or_insert_with(IndexMap::new)
            .entry(step_id.to_string())
            .or_default();

        step.status = update.status;
        step.last_update = Some(stamp.clone());
        if !update.files_modified.is_empty() {
            step.files_modified = update.files_modified.to_vec();
        }
        if let Some(notes) = update.notes.filter(|n| !n.is_empty()) {
            step.notes = Some(notes.to_string());
        }

        if update.status == Status::InProgress {
            phase.current_step = Some(step_id.to_string());
            if phase.status == Status::NotStarted {
                phase.status = Status::InProgress;
                phase.start_date = Some(stamp.clone());
            }
        }

        if phase.all_steps_completed() {
            if phase.status != Status::Completed {
                phase.status = Status::Completed;
                phase.completion_date = Some(stamp);
            }
        } else if phase.status == Status::Completed {
            phase.status = Status::InProgress;
            phase.completion_date = None;
        }

        Ok(phase.status)
    }
}
