//! Parser for criterion-style benchmark logs.
//!
//! The interesting lines look like
//!
//! ```text
//! polygonize/grid/5       time:   [993.44 µs 1.0099 ms 1.0274 ms]
//! ```
//!
//! where the bracketed triple is the low/mid/high estimate. Only the mid
//! estimate is kept as the point estimate. Everything that does not match
//! the grammar is skipped, so warmup chatter and change reports in the
//! same log are harmless.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::store::{MeasurementKey, Measurements};
use crate::units::TimeUnit;

/// Matches `name/category/size   time:   [low unit mid unit high unit]`,
/// capturing the category, the size, and the mid estimate.
static TIMING_LINE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[\w-]+/([^/\s]+)/(\d+)\s+time:\s+\[\s*[\d.]+\s+[^\s\]]+\s+([\d.]+)\s+([^\s\]]+)\s+[\d.]+\s+[^\s\]]+\s*\]")
    .unwrap()
});

/// Extract `(category, size) -> seconds` from criterion-style log text.
///
/// Regions that do not match the timing grammar are skipped silently; a
/// recognized line with an unrecognized unit token is skipped with a
/// warning instead of recording a value in the wrong scale.
pub fn parse_criterion_log(text: &str) -> Measurements {
  let mut results = Measurements::new();

  for caps in TIMING_LINE.captures_iter(text) {
    let category = &caps[1];
    let Ok(size) = caps[2].parse::<u64>() else { continue };
    let Ok(value) = caps[3].parse::<f64>() else { continue };

    let token = &caps[4];
    let Some(unit) = TimeUnit::parse(token) else {
      warn!(
        "unrecognized time unit {:?} for {}/{}, skipping measurement",
        token, category, size
      );
      continue;
    };

    results.insert(MeasurementKey::new(category, size), unit.to_seconds(value));
  }

  debug!("parsed {} measurements from criterion-style log", results.len());
  results
}

/// Read and parse a criterion-style log file.
///
/// A missing or unreadable file contributes zero measurements and logs a
/// warning; it is never an error.
pub fn parse_criterion_file(path: &Path) -> Measurements {
  match std::fs::read_to_string(path) {
    Ok(text) => parse_criterion_log(&text),
    Err(e) => {
      warn!("could not read reference log {}: {}", path.display(), e);
      Measurements::new()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mid_estimate_is_kept() {
    let text = "polygonize/grid/5       time:   [993.44 µs 1.0099 ms 1.0274 ms]\n";
    let results = parse_criterion_log(text);

    assert_eq!(results.len(), 1);
    let value = results[&MeasurementKey::new("grid", 5)];
    assert!(
      (value - 0.0010099).abs() < 1e-12,
      "expected the mid estimate 1.0099 ms as 0.0010099 s, got {}",
      value
    );
  }

  #[test]
  fn test_full_log_with_surrounding_chatter() {
    let text = "\
Benchmarking polygonize/grid/5
Benchmarking polygonize/grid/5: Warming up for 3.0000 s
Benchmarking polygonize/grid/5: Collecting 100 samples in estimated 5.0273 s (4950 iterations)
Benchmarking polygonize/grid/5: Analyzing
polygonize/grid/5       time:   [993.44 µs 1.0099 ms 1.0274 ms]
                        change: [-1.2345% +0.5678% +2.3456%] (p = 0.54 > 0.05)

polygonize/random/50    time:   [4.1200 ms 4.2500 ms 4.3900 ms]
polygonize/grid/100     time:   [1.0150 s 1.0300 s 1.0480 s]
";
    let results = parse_criterion_log(text);

    assert_eq!(results.len(), 3, "results: {:?}", results);
    assert!((results[&MeasurementKey::new("grid", 5)] - 0.0010099).abs() < 1e-12);
    assert!((results[&MeasurementKey::new("random", 50)] - 0.00425).abs() < 1e-12);
    assert!((results[&MeasurementKey::new("grid", 100)] - 1.03).abs() < 1e-12);
  }

  #[test]
  fn test_non_matching_text_yields_nothing() {
    let results = parse_criterion_log("no timings in here\njust prose\n");
    assert!(results.is_empty());
  }

  #[test]
  fn test_unrecognized_unit_is_skipped() {
    let text = "polygonize/grid/5       time:   [1.0 parsecs 2.0 parsecs 3.0 parsecs]\n";
    let results = parse_criterion_log(text);
    assert!(results.is_empty(), "results: {:?}", results);
  }

  #[test]
  fn test_later_match_overwrites_earlier_key() {
    let text = "\
polygonize/grid/5       time:   [0.9000 ms 1.0000 ms 1.1000 ms]
polygonize/grid/5       time:   [1.9000 ms 2.0000 ms 2.1000 ms]
";
    let results = parse_criterion_log(text);

    assert_eq!(results.len(), 1);
    assert!((results[&MeasurementKey::new("grid", 5)] - 0.002).abs() < 1e-12);
  }

  #[test]
  fn test_missing_file_returns_empty() {
    let dir = tempfile::TempDir::new().unwrap();
    let results = parse_criterion_file(&dir.path().join("absent.log"));
    assert!(results.is_empty());
  }

  #[test]
  fn test_file_matches_text_parse() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("bench.log");
    let text = "polygonize/random/200   time:   [8.1000 ms 8.2000 ms 8.4000 ms]\n";
    std::fs::write(&path, text).unwrap();

    assert_eq!(parse_criterion_file(&path), parse_criterion_log(text));
  }
}
