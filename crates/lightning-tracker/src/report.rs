use std::fmt::Write;

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::progress::ProjectStatus;

/// Free-form session notes supplied by whoever hands the work over
#[derive(Debug, Clone, Default)]
pub struct HandoffNotes {
    pub completed: Vec<String>,
    pub current_work: String,
    pub next_actions: Vec<String>,
    pub issues: Vec<String>,
}

/// At least one decimal place: 25.0, 20.83
fn percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn render_status_report(
    project_name: &str,
    status: &ProjectStatus,
    generated: &DateTime<Local>,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {project_name} - Implementation Status Report");
    let _ = writeln!(out, "Generated: {}\n", generated.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(
        out,
        "## Overall Progress: {}%\n",
        percent(status.overall_progress)
    );

    out.push_str("## Completed Phases\n");
    for phase in &status.completed_phases {
        let _ = writeln!(out, "- ✅ {phase}");
    }
    out.push('\n');

    if let Some(phase) = &status.current_phase {
        out.push_str("## Current Phase\n");
        let _ = writeln!(
            out,
            "- **{}** ({}% complete)",
            phase.name,
            percent(phase.progress)
        );
        let _ = writeln!(out, "- Current step: {}", phase.current_step);
        out.push('\n');
    }

    if !status.in_progress.is_empty() {
        out.push_str("## In Progress\n");
        for item in &status.in_progress {
            let _ = writeln!(out, "- {} - {}: {}", item.phase, item.step, item.name);
        }
        out.push('\n');
    }

    if !status.blockers.is_empty() {
        out.push_str("## Current Blockers\n");
        for blocker in &status.blockers {
            let _ = writeln!(out, "- {} - {}:", blocker.phase, blocker.step);
            for reason in &blocker.blockers {
                let _ = writeln!(out, "  - {reason}");
            }
        }
        out.push('\n');
    }

    if !status.next_actions.is_empty() {
        out.push_str("## Recommended Next Actions\n");
        for action in &status.next_actions {
            let _ = writeln!(out, "1. {action}");
        }
        out.push('\n');
    }

    if !status.performance_metrics.is_empty() {
        out.push_str("## Current Performance Metrics\n");
        for (metric, value) in &status.performance_metrics {
            let _ = writeln!(out, "- **{}**: {}", metric, display_value(value));
        }
        out.push('\n');
    }

    out
}

pub fn render_handoff(
    notes: &HandoffNotes,
    status: &ProjectStatus,
    generated: &DateTime<Local>,
) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "# Implementation Handoff - {}\n",
        generated.format("%Y-%m-%d %H:%M")
    );

    out.push_str("## Completed in This Session\n");
    for item in &notes.completed {
        let _ = writeln!(out, "- {item}");
    }
    out.push('\n');

    out.push_str("## Current State\n");
    let _ = writeln!(out, "{}\n", notes.current_work);

    out.push_str("## Next Actions\n");
    for (i, action) in notes.next_actions.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, action);
    }
    out.push('\n');

    if !notes.issues.is_empty() {
        out.push_str("## Known Issues/Blockers\n");
        for issue in &notes.issues {
            let _ = writeln!(out, "- {issue}");
        }
        out.push('\n');
    }

    if !status.performance_metrics.is_empty() {
        out.push_str("## Performance Metrics\n");
        for (metric, value) in &status.performance_metrics {
            let _ = writeln!(out, "- {}: {}", metric, display_value(value));
        }
        out.push('\n');
    }

    out.push_str("## Overall Progress\n");
    let _ = writeln!(
        out,
        "- Project completion: {}%",
        percent(status.overall_progress)
    );
    if let Some(phase) = &status.current_phase {
        let _ = writeln!(
            out,
            "- Current phase: {} ({}% complete)",
            phase.name,
            percent(phase.progress)
        );
    }

    out
}
