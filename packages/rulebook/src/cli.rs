//! Command-line interface for the rulebook.

use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::builder::{build_from_files, BuildOutcome};
use crate::config::{DEFAULT_CATEGORIES_PATH, DEFAULT_SECTIONS_PATH};
use crate::error::Result;
use crate::output::{save_json, write_json};

/// Rulebook - Restructure SRD rule documents into a hierarchical tree.
#[derive(Parser)]
#[command(name = "rulebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Input files shared by all commands.
#[derive(Args, Debug)]
pub struct Inputs {
    /// Categories JSON file
    #[arg(short, long, default_value = DEFAULT_CATEGORIES_PATH)]
    pub categories: PathBuf,

    /// Sections JSON file
    #[arg(short, long, default_value = DEFAULT_SECTIONS_PATH)]
    pub sections: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the rule tree and write it as JSON.
    Build {
        #[command(flatten)]
        inputs: Inputs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build and verify the rule tree without writing it.
    Check {
        #[command(flatten)]
        inputs: Inputs,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { inputs, output } => build_command(&inputs, output.as_deref()),
        Commands::Check { inputs } => check_command(&inputs),
    }
}

/// Build with a spinner on stderr, clearing it whatever the result.
fn build_with_progress(inputs: &Inputs) -> Result<BuildOutcome> {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Building rule tree...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let outcome = build_from_files(&inputs.categories, &inputs.sections);
    pb.finish_and_clear();
    outcome
}

/// Print the build summary to stderr.
fn print_summary(outcome: &BuildOutcome) {
    eprintln!("  Nodes: {}", style(outcome.repository.len()).green());
    eprintln!(
        "  Split: {} nodes in {} passes ({} created)",
        outcome.report.nodes_split, outcome.report.passes, outcome.report.nodes_created
    );
}

/// Execute the build command.
fn build_command(inputs: &Inputs, output: Option<&Path>) -> Result<()> {
    eprintln!(
        "{} {} + {}",
        style("Building").bold(),
        style(inputs.categories.display()).cyan(),
        style(inputs.sections.display()).cyan()
    );

    let outcome = build_with_progress(inputs)?;
    print_summary(&outcome);

    match output {
        Some(path) => {
            save_json(outcome.repository.all(), path)?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => write_json(outcome.repository.all(), io::stdout().lock())?,
    }

    Ok(())
}

/// Execute the check command.
fn check_command(inputs: &Inputs) -> Result<()> {
    let outcome = build_with_progress(inputs)?;
    print_summary(&outcome);
    eprintln!("{}", style("Rule tree is valid").green().bold());
    Ok(())
}
