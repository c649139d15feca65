use std::fs;

use serde_json::json;

use crate::error::PlanError;
use crate::plan::{PhasePlan, PlanGenerator};

fn generator(dir: &std::path::Path, with_log: bool) -> PlanGenerator {
    let docs = dir.join("docs");
    fs::create_dir_all(&docs).unwrap();
    let log_path = docs.join("implementation_log.json");
    if with_log {
        fs::write(&log_path, json!({ "phases": {} }).to_string()).unwrap();
    }
    PlanGenerator::new(log_path, docs)
}

#[test]
fn phase2_writes_json_and_markdown() {
    let dir = tempfile::tempdir().unwrap();
    let generator = generator(dir.path(), true);

    let plan = generator.generate("phase2").unwrap();

    assert_eq!(plan.name, "Enhanced Dictionary Features");
    assert_eq!(plan.steps.len(), 15);
    assert_eq!(plan.steps[14].id, "2.15");

    let json = fs::read_to_string(dir.path().join("docs/phase2_plan.json")).unwrap();
    let written: PhasePlan = serde_json::from_str(&json).unwrap();
    assert_eq!(written, plan);
    assert!(json.contains("\n  \"phase\": 2,"));

    let markdown = fs::read_to_string(dir.path().join("docs/phase2_plan.md")).unwrap();
    assert!(markdown.starts_with("# Enhanced Dictionary Features - Phase 2 Implementation Plan"));
    assert!(markdown.contains("- Total steps: 15\n- Estimated time: 46 hours\n"));
    assert!(markdown.contains("- [ ] Ready for Phase 3\n"));
}

#[test]
fn unknown_phase_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let generator = generator(dir.path(), true);

    let err = generator.generate("phase1").unwrap_err();

    assert!(matches!(err, PlanError::UnknownPhase(ref name) if name == "phase1"));
    assert_eq!(err.to_string(), "Unknown phase: phase1");
    assert!(!dir.path().join("docs/phase1_plan.json").exists());
}

#[test]
fn missing_log_is_a_hard_error() {
    let dir = tempfile::tempdir().unwrap();
    let generator = generator(dir.path(), false);

    let err = generator.generate("phase3").unwrap_err();

    assert!(matches!(err, PlanError::Store(_)));
    assert!(!dir.path().join("docs/phase3_plan.md").exists());
}
