use std::path::PathBuf;

use chrono::Local;
use indexmap::IndexMap;
use lightning_config::Config;
use lightning_core::fs::write_atomic;
use serde::Serialize;
use serde_json::Value;

use crate::error::TrackerError;
use crate::log::{ImplementationLog, Status, StepUpdate};
use crate::report::{self, HandoffNotes};

/// Phase order used when nothing is in progress
pub const CANONICAL_PHASES: [&str; 6] = [
    "phase1", "phase2", "phase3", "phase4", "phase5", "phase6",
];

const METRICS_PHASE: &str = "phase1";
const METRICS_STEP: &str = "4.1";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentPhase {
    pub id: String,
    pub name: String,
    pub current_step: String,
    /// Percent of this phase's steps completed
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InProgressItem {
    pub phase: String,
    pub step: String,
    pub name: String,
    pub blockers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Blocker {
    pub phase: String,
    pub step: String,
    pub blockers: Vec<String>,
}

/// Every derived view of the log at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectStatus {
    pub overall_progress: f64,
    pub current_phase: Option<CurrentPhase>,
    pub completed_phases: Vec<String>,
    pub in_progress: Vec<InProgressItem>,
    pub blockers: Vec<Blocker>,
    pub next_actions: Vec<String>,
    pub performance_metrics: IndexMap<String, Value>,
}

impl ProjectStatus {
    pub fn from_log(log: &ImplementationLog) -> Self {
        Self {
            overall_progress: overall_progress(log),
            current_phase: current_phase(log),
            completed_phases: completed_phases(log),
            in_progress: in_progress_items(log),
            blockers: blockers(log),
            next_actions: next_actions(log),
            performance_metrics: performance_metrics(log),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Completed phases plus the fraction of the first in-progress phase that
/// has steps, over all phases, as a percentage
pub fn overall_progress(log: &ImplementationLog) -> f64 {
    if log.phases.is_empty() {
        return 0.0;
    }

    let completed = log
        .phases
        .values()
        .filter(|phase| phase.status == Status::Completed)
        .count();

    let partial = log
        .phases
        .values()
        .find(|phase| phase.status == Status::InProgress && phase.steps.is_some())
        .map(|phase| phase.completion_ratio())
        .unwrap_or(0.0);

    round2((completed as f64 + partial) / log.phases.len() as f64 * 100.0)
}

pub fn current_phase(log: &ImplementationLog) -> Option<CurrentPhase> {
    log.phases
        .iter()
        .find(|(_, phase)| phase.status == Status::InProgress)
        .map(|(id, phase)| CurrentPhase {
            id: id.clone(),
            name: phase.display_name(id).to_string(),
            current_step: phase
                .current_step
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            progress: round2(phase.completion_ratio() * 100.0),
        })
}

pub fn completed_phases(log: &ImplementationLog) -> Vec<String> {
    log.phases
        .iter()
        .filter(|(_, phase)| phase.status == Status::Completed)
        .map(|(id, _)| id.clone())
        .collect()
}

pub fn in_progress_items(log: &ImplementationLog) -> Vec<InProgressItem> {
    let mut items = Vec::new();

    for (phase_id, phase) in &log.phases {
        if phase.status != Status::InProgress {
            continue;
        }
        let Some(steps) = &phase.steps else {
            continue;
        };

        for (step_id, step) in steps {
            if step.status == Status::InProgress {
                items.push(InProgressItem {
                    phase: phase_id.clone(),
                    step: step_id.clone(),
                    name: step.name.clone().unwrap_or_else(|| "Unknown".to_string()),
                    blockers: step.blockers.clone(),
                });
            }
        }
    }

    items
}

/// Steps with a non-empty blocker list, whatever their phase status
pub fn blockers(log: &ImplementationLog) -> Vec<Blocker> {
    log.phases
        .iter()
        .filter_map(|(phase_id, phase)| phase.steps.as_ref().map(|steps| (phase_id, steps)))
        .flat_map(|(phase_id, steps)| {
            steps
                .iter()
                .filter(|(_, step)| !step.blockers.is_empty())
                .map(move |(step_id, step)| Blocker {
                    phase: phase_id.clone(),
                    step: step_id.clone(),
                    blockers: step.blockers.clone(),
                })
        })
        .collect()
}

pub fn next_actions(log: &ImplementationLog) -> Vec<String> {
    let current = log
        .phases
        .iter()
        .find(|(_, phase)| phase.status == Status::InProgress);

    if let Some((phase_id, phase)) = current {
        let Some(steps) = &phase.steps else {
            return Vec::new();
        };

        // plain text order, so "2.10" sorts before "2.2"
        let mut ordered: Vec<_> = steps.iter().collect();
        ordered.sort_by(|(a, _), (b, _)| a.cmp(b));

        return ordered
            .into_iter()
            .find(|(_, step)| step.status != Status::Completed)
            .map(|(step_id, step)| {
                format!(
                    "Complete {} - Step {}: {}",
                    phase_id,
                    step_id,
                    step.name.as_deref().unwrap_or("Unknown")
                )
            })
            .into_iter()
            .collect();
    }

    CANONICAL_PHASES
        .iter()
        .find_map(|id| {
            log.phases
                .get(*id)
                .filter(|phase| phase.status == Status::NotStarted)
                .map(|phase| format!("Start {}: {}", id, phase.display_name(id)))
        })
        .into_iter()
        .collect()
}

/// Metrics recorded on phase1 step 4.1, once phase1 is completed
pub fn performance_metrics(log: &ImplementationLog) -> IndexMap<String, Value> {
    log.phases
        .get(METRICS_PHASE)
        .filter(|phase| phase.status == Status::Completed)
        .and_then(|phase| phase.steps.as_ref())
        .and_then(|steps| steps.get(METRICS_STEP))
        .map(|step| step.metrics.clone())
        .unwrap_or_default()
}

/// Reads and mutates the implementation log on disk, one whole-file pass
/// per call
pub struct ProgressTracker {
    project_name: String,
    log_path: PathBuf,
    handoff_dir: PathBuf,
}

impl ProgressTracker {
    pub fn new(
        project_name: impl Into<String>,
        log_path: impl Into<PathBuf>,
        handoff_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            log_path: log_path.into(),
            handoff_dir: handoff_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.project_name.clone(),
            config.tracker.log_path(config.root()),
            config.tracker.handoff_dir(config.root()),
        )
    }

    pub fn load(&self) -> Result<ImplementationLog, TrackerError> {
        Ok(ImplementationLog::load(&self.log_path)?)
    }

    pub fn status(&self) -> Result<ProjectStatus, TrackerError> {
        Ok(ProjectStatus::from_log(&self.load()?))
    }

    /// Update one step and persist the log. An unknown phase leaves the
    /// file untouched.
    pub fn update_step_status(
        &self,
        phase_id: &str,
        step_id: &str,
        status: Status,
        files_modified: &[String],
        notes: Option<&str>,
    ) -> Result<Status, TrackerError> {
        let mut log = self.load()?;
        let now = Local::now();

        let update = StepUpdate {
            status,
            files_modified,
            notes,
        };
        let phase_status = log.update_step(phase_id, step_id, update, &now)?;

        log.save(&self.log_path, &now)?;
        tracing::info!("Updated {} - {} to {}", phase_id, step_id, status);

        Ok(phase_status)
    }

    pub fn generate_status_report(&self) -> Result<String, TrackerError> {
        let status = self.status()?;
        Ok(report::render_status_report(
            &self.project_name,
            &status,
            &Local::now(),
        ))
    }

    /// Write a handoff document and return its path
    pub fn create_handoff(&self, notes: &HandoffNotes) -> Result<PathBuf, TrackerError> {
        let status = self.status()?;
        let now = Local::now();

        let path = self
            .handoff_dir
            .join(format!("handoff_{}.md", now.format("%Y%m%d_%H%M")));
        let markdown = report::render_handoff(notes, &status, &now);
        write_atomic(&path, markdown.as_bytes())?;

        tracing::info!("Handoff written to {}", path.display());
        Ok(path)
    }
}
