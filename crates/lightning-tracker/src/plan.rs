use std::fmt::Write;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use lightning_config::Config;
use lightning_core::fs::{write_atomic, write_json_pretty};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::log::{ImplementationLog, timestamp};

mod catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanId {
    Phase2,
    Phase3,
    Phase4,
    Phase5,
    Phase6,
}

impl PlanId {
    pub const ALL: [PlanId; 5] = [
        PlanId::Phase2,
        PlanId::Phase3,
        PlanId::Phase4,
        PlanId::Phase5,
        PlanId::Phase6,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Phase2 => "phase2",
            PlanId::Phase3 => "phase3",
            PlanId::Phase4 => "phase4",
            PlanId::Phase5 => "phase5",
            PlanId::Phase6 => "phase6",
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            PlanId::Phase2 => 2,
            PlanId::Phase3 => 3,
            PlanId::Phase4 => 4,
            PlanId::Phase5 => 5,
            PlanId::Phase6 => 6,
        }
    }

    /// The hand-written plan for this phase
    pub fn plan(&self) -> PhasePlan {
        catalog::plan_for(*self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhasePlan {
    pub phase: u8,
    pub name: String,
    pub duration: String,
    pub prerequisites: Vec<String>,
    pub steps: Vec<PlanStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_to_create: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_to_modify: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<Vec<String>>,
    pub verification: Vec<String>,
}

/// Hours in a duration such as "3 hours" or "1 hour"
pub fn parse_hours(duration: &str) -> Option<u32> {
    let mut parts = duration.split_whitespace();
    let hours = parts.next()?.parse().ok()?;
    match (parts.next(), parts.next()) {
        (Some("hour" | "hours"), None) => Some(hours),
        _ => None,
    }
}

impl PhasePlan {
    /// Sum of step durations; any step not stated in hours is an error
    pub fn total_hours(&self) -> Result<u32, PlanError> {
        self.steps.iter().try_fold(0, |total, step| {
            parse_hours(&step.duration)
                .map(|hours| total + hours)
                .ok_or_else(|| PlanError::InvalidDuration {
                    step: step.id.clone(),
                    duration: step.duration.clone(),
                })
        })
    }

    pub fn to_markdown(&self, total_hours: u32, generated: &DateTime<Local>) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "# {} - Phase {} Implementation Plan\n",
            self.name, self.phase
        );
        let _ = writeln!(out, "**Duration**: {}\n", self.duration);

        out.push_str("## Prerequisites\n");
        for prereq in &self.prerequisites {
            let _ = writeln!(out, "- {prereq}");
        }
        out.push_str("\n## Implementation Steps\n\n");

        for step in &self.steps {
            let _ = writeln!(out, "### Step {}: {}", step.id, step.name);
            let _ = writeln!(out, "**Duration**: {}\n", step.duration);
            let _ = writeln!(out, "**Description**: {}\n", step.description);

            for (label, files) in [
                ("Files to create", &step.files_to_create),
                ("Files to modify", &step.files_to_modify),
            ] {
                if let Some(files) = files {
                    let _ = writeln!(out, "**{label}**:");
                    for file in files {
                        let _ = writeln!(out, "- `{file}`");
                    }
                    out.push('\n');
                }
            }

            out.push_str("**Verification**:\n");
            for item in &step.verification {
                let _ = writeln!(out, "- [ ] {item}");
            }
            out.push_str("\n---\n\n");
        }

        out.push_str("## Summary\n");
        let _ = writeln!(out, "- Total steps: {}", self.steps.len());
        let _ = writeln!(out, "- Estimated time: {total_hours} hours");
        let _ = writeln!(out, "- Generated: {}", timestamp(generated));

        out
    }
}

/// Writes static phase plans next to the implementation log
pub struct PlanGenerator {
    log_path: PathBuf,
    docs_dir: PathBuf,
}

impl PlanGenerator {
    pub fn new(log_path: impl Into<PathBuf>, docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            docs_dir: docs_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.tracker.log_path(config.root()),
            config.tracker.docs_dir(config.root()),
        )
    }

    pub fn json_path(&self, id: PlanId) -> PathBuf {
        self.docs_dir.join(format!("{}_plan.json", id.as_str()))
    }

    pub fn markdown_path(&self, id: PlanId) -> PathBuf {
        self.docs_dir.join(format!("{}_plan.md", id.as_str()))
    }

    /// Write `<phase>_plan.json` and `<phase>_plan.md` for a phase name.
    /// The log must be readable even though the plan does not depend on it.
    pub fn generate(&self, name: &str) -> Result<PhasePlan, PlanError> {
        let id =
            PlanId::from_str(name).ok_or_else(|| PlanError::UnknownPhase(name.to_string()))?;

        let log = ImplementationLog::load(&self.log_path)?;
        tracing::debug!("Implementation log has {} phases", log.phases.len());

        let plan = id.plan();
        let total_hours = plan.total_hours()?;

        let json_path = self.json_path(id);
        write_json_pretty(&json_path, &plan)?;

        let markdown_path = self.markdown_path(id);
        let markdown = plan.to_markdown(total_hours, &Local::now());
        write_atomic(&markdown_path, markdown.as_bytes())?;

        tracing::info!(
            "Generated plan for {} ({} steps, {} hours): {}",
            plan.name,
            plan.steps.len(),
            total_hours,
            markdown_path.display()
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_must_be_an_integer_count_of_hours() {
        assert_eq!(parse_hours("3 hours"), Some(3));
        assert_eq!(parse_hours("1 hour"), Some(1));
        assert_eq!(parse_hours("8 weeks"), None);
        assert_eq!(parse_hours("2.5 hours"), None);
        assert_eq!(parse_hours("hours"), None);
        assert_eq!(parse_hours("3 hours total"), None);
    }

    #[test]
    fn plan_ids_round_trip() {
        for id in PlanId::ALL {
            assert_eq!(PlanId::from_str(id.as_str()), Some(id));
        }
        assert_eq!(PlanId::from_str("phase1"), None);
        assert_eq!(PlanId::from_str("phase7"), None);
    }

    #[test]
    fn catalog_matches_phase_numbers() {
        for id in PlanId::ALL {
            let plan = id.plan();
            assert_eq!(plan.phase, id.number());
            assert!(!plan.steps.is_empty());
            assert!(plan.total_hours().is_ok());
        }
        assert_eq!(PlanId::Phase2.plan().steps.len(), 15);
    }

    #[test]
    fn phase2_totals_forty_six_hours() {
        assert_eq!(PlanId::Phase2.plan().total_hours().unwrap(), 46);
    }

    #[test]
    fn invalid_duration_names_the_step() {
        let mut plan = PlanId::Phase3.plan();
        plan.steps[0].duration = "half a day".to_string();

        let err = plan.total_hours().unwrap_err();
        assert!(matches!(
            err,
            PlanError::InvalidDuration { ref step, .. } if step == "3.1"
        ));
    }

    #[test]
    fn markdown_has_checkboxes_and_summary() {
        let plan = PlanId::Phase4.plan();
        let markdown = plan.to_markdown(8, &Local::now());

        assert!(markdown.starts_with("# Platform Maturity - Phase 4 Implementation Plan\n\n"));
        assert!(markdown.contains("**Duration**: 8 weeks"));
        assert!(markdown.contains("- Phase 3 completed\n"));
        assert!(markdown.contains("### Step 4.1: Plugin Architecture\n"));
        assert!(markdown.contains("**Files to create**:\n- `src/plugins/plugin-api.ts`\n"));
        assert!(!markdown.contains("**Files to modify**"));
        assert!(markdown.contains("- [ ] Plugin loading works\n"));
        assert!(markdown.contains("- Total steps: 1\n- Estimated time: 8 hours\n"));
    }
}
