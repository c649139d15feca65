use anyhow::Context;
use lightning_config::Config;
use lightning_dictionary::{Converter, XlsxLoader, summarize, validate_output, write_outputs};
use lightning_lang_english::enricher::verify_sample;
use lightning_lang_english::{Enricher, RandomChance};
use lightning_tracker::{HandoffNotes, PlanGenerator, ProgressTracker, Status};

pub fn convert(config: &Config) -> anyhow::Result<()> {
    let settings = &config.dictionary;
    let spreadsheet = settings.spreadsheet_path(config.root());

    tracing::info!(
        "Converting {} (sheet {:?}, up to {} words)",
        spreadsheet.display(),
        settings.sheet_name,
        settings.max_words
    );
    let rows = XlsxLoader::load(&spreadsheet, &settings.sheet_name)
        .with_context(|| format!("Failed to read {}", spreadsheet.display()))?;

    let conversion = Converter::new(settings.max_words, settings.spreadsheet.clone()).convert(rows);
    if conversion.report.errors > 0 {
        tracing::warn!("{} rows skipped", conversion.report.errors);
    }

    let pretty = settings.pretty_path(config.root());
    let minified = settings.minified_path(config.root());
    write_outputs(&conversion.document, &pretty, &minified)
        .context("Failed to write dictionary files")?;

    summarize(&conversion.document);
    validate_output(&pretty).context("Written dictionary failed validation")?;
    Ok(())
}

pub fn enrich(config: &Config) -> anyhow::Result<()> {
    let input = config.dictionary.pretty_path(config.root());
    let output = config.enhanced_path();
    let sample_size = config.enrichment.sample_size;

    let result = match config.enrichment.seed {
        Some(seed) => {
            tracing::debug!("Seeding enrichment with {}", seed);
            Enricher::new(RandomChance::seeded(seed)).enrich_file(&input, &output, sample_size)
        }
        None => {
            Enricher::new(RandomChance::from_thread()).enrich_file(&input, &output, sample_size)
        }
    };
    let document = result.with_context(|| format!("Failed to enrich {}", input.display()))?;

    verify_sample(&document);
    Ok(())
}

pub fn plan(config: &Config, phase: &str) -> anyhow::Result<()> {
    let plan = PlanGenerator::from_config(config).generate(phase)?;
    println!("Generated plan for {}", plan.name);
    Ok(())
}

pub fn status(config: &Config, json: bool) -> anyhow::Result<()> {
    let tracker = ProgressTracker::from_config(config);

    if json {
        let status = tracker.status()?;
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", tracker.generate_status_report()?);
    }
    Ok(())
}

pub fn update_step(
    config: &Config,
    phase: &str,
    step: &str,
    status: Status,
    files: &[String],
    notes: Option<&str>,
) -> anyhow::Result<()> {
    let phase_status = ProgressTracker::from_config(config)
        .update_step_status(phase, step, status, files, notes)?;

    println!("Updated {phase} - {step} to {status} (phase is {phase_status})");
    Ok(())
}

pub fn handoff(config: &Config, notes: &HandoffNotes) -> anyhow::Result<()> {
    let path = ProgressTracker::from_config(config).create_handoff(notes)?;
    println!("Handoff document created: {}", path.display());
    Ok(())
}
