//! Parser for pipe-delimited tabular benchmark reports.
//!
//! The report interleaves section banners and fixed-width tables:
//!
//! ```text
//! === Grid Benchmark ===
//! Size       | Time (s)        | Polys
//! ----------------------------------------
//! 5          | 0.001116        | 25
//! ```
//!
//! Data rows are attributed to the most recent banner's category. Rows
//! seen before any banner, header rows, rules, and rows that fail numeric
//! parsing are all skipped.

use std::path::Path;

use tracing::{debug, warn};

use crate::store::{MeasurementKey, Measurements};

/// Scanner state: outside any section, or inside a named category section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Section {
  #[default]
  None,
  Category(String),
}

/// Category named by a section banner line, if any.
fn banner_category(line: &str) -> Option<&'static str> {
  if line.contains("=== Grid Benchmark ===") {
    Some("grid")
  } else if line.contains("=== Random Benchmark ===") {
    Some("random")
  } else {
    None
  }
}

/// Extract `(category, size) -> seconds` from a tabular report.
pub fn parse_table_report(text: &str) -> Measurements {
  let mut results = Measurements::new();
  let mut section = Section::None;

  for raw in text.lines() {
    let line = raw.trim();

    if let Some(category) = banner_category(line) {
      section = Section::Category(category.to_string());
      continue;
    }
    if line.starts_with("Size") || line.starts_with("Count") || line.starts_with('-') {
      continue;
    }

    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() < 2 {
      continue;
    }
    let (Ok(size), Ok(seconds)) = (fields[0].parse::<u64>(), fields[1].parse::<f64>()) else {
      continue;
    };
    if let Section::Category(ref category) = section {
      results.insert(MeasurementKey::new(category, size), seconds);
    }
  }

  debug!("parsed {} measurements from tabular report", results.len());
  results
}

/// Read and parse a tabular report file.
///
/// A missing or unreadable file contributes zero measurements and logs a
/// warning; it is never an error.
pub fn parse_table_file(path: &Path) -> Measurements {
  match std::fs::read_to_string(path) {
    Ok(text) => parse_table_report(&text),
    Err(e) => {
      warn!("could not read candidate report {}: {}", path.display(), e);
      Measurements::new()
    }
  }
}
