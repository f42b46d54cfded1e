//! Benchmark log reconciliation and report regeneration.
//!
//! This crate reads two independently produced benchmark logs, reconciles
//! them into one keyed measurement model, and renders per-category
//! comparison tables that can be printed or spliced back into the anchored
//! sections of an existing document.
//!
//! ## Key Concepts
//!
//! - **Measurements**: `(category, size) -> seconds`, normalized from harness units
//! - **Reference / Candidate**: the baseline log and the log under comparison
//! - **Reconciliation**: union of both sides' keys; one-sided values render as placeholders
//! - **Rewriting**: anchored tables in a target document are regenerated in place

pub mod criterion_log;
pub mod render;
pub mod rewrite;
pub mod store;
pub mod tabular_report;
pub mod units;

pub use criterion_log::{parse_criterion_file, parse_criterion_log};
pub use render::{SectionSpec, builtin_sections, render_comparison, section_table};
pub use rewrite::{Rewrite, rewrite_document, update_document};
pub use store::{MeasurementKey, MeasurementStore, Measurements};
pub use tabular_report::{parse_table_file, parse_table_report};
pub use units::TimeUnit;

use thiserror::Error;

/// Errors surfaced by document updates. Log parsing never fails; a missing
/// or malformed input degrades to fewer measurements instead.
#[derive(Debug, Error)]
pub enum PolybenchError {
  #[error("target document not found: {}", .0.display())]
  DocumentMissing(std::path::PathBuf),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PolybenchError>;
