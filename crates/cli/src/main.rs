//! polybench - reconcile benchmark logs and regenerate report tables

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use polybench_core::{
  MeasurementStore, builtin_sections, parse_criterion_file, parse_table_file, render_comparison, update_document,
};

mod logging;

use logging::init_logging;

#[derive(Parser)]
#[command(name = "polybench")]
#[command(about = "Reconcile two benchmark logs and regenerate comparison tables")]
#[command(version)]
#[command(after_help = "\
QUICK START:
  polybench compare ref.log cand.txt            # Print comparison tables
  polybench update ref.log cand.txt README.md   # Rewrite tables in README.md

Missing benchmark logs degrade to placeholder columns; a missing target
document in update mode is an error.")]
struct Cli {
  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print comparison tables for the two benchmark logs
  Compare {
    /// Reference benchmark log (criterion-style)
    reference: PathBuf,

    /// Candidate benchmark report (tabular)
    candidate: PathBuf,
  },

  /// Rewrite the anchored benchmark tables inside a document
  Update {
    /// Reference benchmark log (criterion-style)
    reference: PathBuf,

    /// Candidate benchmark report (tabular)
    candidate: PathBuf,

    /// Document whose tables are regenerated in place
    doc: PathBuf,
  },
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  init_logging(cli.verbose);

  match cli.command {
    Commands::Compare { reference, candidate } => cmd_compare(reference, candidate),
    Commands::Update {
      reference,
      candidate,
      doc,
    } => cmd_update(reference, candidate, doc),
  }
}

/// Parse both logs into one store. Missing files already warned about by
/// the parsers; an empty side simply renders as placeholders.
fn load_store(reference: &Path, candidate: &Path) -> MeasurementStore {
  let reference = parse_criterion_file(reference);
  let candidate = parse_table_file(candidate);
  MeasurementStore::new(reference, candidate)
}

fn cmd_compare(reference: PathBuf, candidate: PathBuf) -> anyhow::Result<()> {
  let store = load_store(&reference, &candidate);
  print!("{}", render_comparison(&store));
  Ok(())
}

fn cmd_update(reference: PathBuf, candidate: PathBuf, doc: PathBuf) -> anyhow::Result<()> {
  let store = load_store(&reference, &candidate);
  update_document(&doc, &store, &builtin_sections())?;
  Ok(())
}
