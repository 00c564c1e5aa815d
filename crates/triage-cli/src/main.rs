//! Neutral Minds - Triage Command Line

mod display;
mod interactive;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use display::Display;
use interactive::InteractiveSession;
use triage_engine::{TriageEngine, TriageReport};
use triage_kb::{KnowledgeBaseConfig, RuleCatalog};

#[derive(Parser)]
#[command(name = "neutral-minds")]
#[command(about = "Rule-based medical triage expert system", version)]
struct Cli {
    /// Knowledge base file (defaults to the embedded one)
    #[arg(long, env = "TRIAGE_KB_PATH", global = true)]
    kb: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive symptom menu (default)
    Interactive,
    /// List the symptom vocabulary
    Symptoms,
    /// Assess a list of symptom identifiers once
    Assess {
        /// Symptom identifiers, e.g. chest_pain shortness_of_breath
        symptoms: Vec<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Display::new().print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "neutral_minds=debug,triage_engine=debug,triage_kb=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let kb = KnowledgeBaseConfig { path: cli.kb };
    let catalog = Arc::new(
        kb.load()
            .context("Failed to load triage knowledge base")?,
    );
    info!(
        "Knowledge base ready: {} symptoms, {} rules",
        catalog.symptom_count(),
        catalog.rule_count()
    );

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => cmd_interactive(catalog),
        Commands::Symptoms => {
            Display::new().print_symptom_list(catalog.all_symptoms());
            Ok(())
        }
        Commands::Assess { symptoms, json } => cmd_assess(catalog, symptoms, json),
    }
}

fn cmd_interactive(catalog: Arc<RuleCatalog>) -> Result<()> {
    let display = Display::new();
    display.print_banner();
    display.print_disclaimer();

    let engine = TriageEngine::new(catalog);
    let stdin = io::stdin();
    InteractiveSession::new(engine, stdin.lock())
        .run()
        .context("Interactive session failed")
}

fn cmd_assess(catalog: Arc<RuleCatalog>, symptoms: Vec<String>, json: bool) -> Result<()> {
    let mut engine = TriageEngine::new(catalog);
    for symptom in &symptoms {
        engine.add_symptom(symptom)?;
    }
    let result = engine.evaluate();

    if json {
        let report = TriageReport::new(&result, symptoms);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let display = Display::new();
        display.print_result(&result);
        display.print_disclaimer();
    }

    Ok(())
}
