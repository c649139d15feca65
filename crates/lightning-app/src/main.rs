//! `lightning`: dictionary data preparation and implementation tracking

mod commands;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lightning_tracker::{HandoffNotes, Status};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lightning")]
#[command(about = "Lightning Dictionary data preparation and progress tracking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root directory (defaults to LIGHTNING_ROOT, then the current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Enable debug logging for the lightning crates
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the word frequency spreadsheet into dictionary JSON
    Convert {
        /// Maximum number of distinct words to keep
        #[arg(long)]
        max_words: Option<usize>,
    },

    /// Add synonyms, antonyms, examples and usage notes to the dictionary
    Enrich {
        /// Only enrich the first N words
        #[arg(long)]
        sample: Option<usize>,

        /// Seed the random draws for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write the implementation plan for a phase (phase2 to phase6)
    Plan { phase: String },

    /// Print the implementation status report
    Status {
        /// Print the derived status as JSON instead of Markdown
        #[arg(long)]
        json: bool,
    },

    /// Set the status of one step in the implementation log
    UpdateStep {
        phase: String,
        step: String,
        #[arg(value_parser = parse_status)]
        status: Status,

        /// File touched by this step (repeatable)
        #[arg(long = "file")]
        files: Vec<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Write a handoff document for the next session
    Handoff {
        /// Item completed this session (repeatable)
        #[arg(long, required = true)]
        completed: Vec<String>,

        /// Where the work currently stands
        #[arg(long)]
        current: String,

        /// Next action to take (repeatable)
        #[arg(long = "next", required = true)]
        next: Vec<String>,

        /// Known issue or blocker (repeatable)
        #[arg(long = "issue")]
        issues: Vec<String>,
    },
}

fn parse_status(s: &str) -> Result<Status, String> {
    Status::from_str(s)
        .ok_or_else(|| format!("expected not_started, in_progress or completed, got {s:?}"))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lightning=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = settings::resolve_root(cli.root)?;
    let mut config = settings::load_config(&root)?;

    match cli.command {
        Commands::Convert { max_words } => {
            if let Some(max_words) = max_words {
                config.dictionary.max_words = max_words;
            }
            commands::convert(&config)
        }
        Commands::Enrich { sample, seed } => {
            if sample.is_some() {
                config.enrichment.sample_size = sample;
            }
            if seed.is_some() {
                config.enrichment.seed = seed;
            }
            commands::enrich(&config)
        }
        Commands::Plan { phase } => commands::plan(&config, &phase),
        Commands::Status { json } => commands::status(&config, json),
        Commands::UpdateStep {
            phase,
            step,
            status,
            files,
            notes,
        } => commands::update_step(&config, &phase, &step, status, &files, notes.as_deref()),
        Commands::Handoff {
            completed,
            current,
            next,
            issues,
        } => {
            let notes = HandoffNotes {
                completed,
                current_work: current,
                next_actions: next,
                issues,
            };
            commands::handoff(&config, &notes)
        }
    }
}
