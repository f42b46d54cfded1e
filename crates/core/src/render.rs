//! Markdown comparison-table rendering.

use crate::store::MeasurementStore;

/// Display and anchoring parameters for one rewritable document section.
#[derive(Debug, Clone)]
pub struct SectionSpec {
  /// Measurement category rendered by this section.
  pub category: String,
  /// Unique heading substring locating the section in a target document.
  pub anchor: String,
  /// Label of the size column, e.g. `Size` or `Count`.
  pub size_label: String,
}

impl SectionSpec {
  pub fn new(category: impl Into<String>, anchor: impl Into<String>, size_label: impl Into<String>) -> Self {
    Self {
      category: category.into(),
      anchor: anchor.into(),
      size_label: size_label.into(),
    }
  }

  /// Markdown heading emitted above the regenerated table. It contains the
  /// anchor substring, which keeps repeated rewrites idempotent.
  pub fn heading(&self) -> String {
    format!("### {}", self.anchor)
  }
}

/// The two document sections recognized out of the box.
pub fn builtin_sections() -> Vec<SectionSpec> {
  vec![
    SectionSpec::new("grid", "Grid Benchmark Results", "Size"),
    SectionSpec::new("random", "Random Benchmark Results", "Count"),
  ]
}

/// Render the replacement table for one document section: heading, blank
/// line, header row, separator row, and one data row per size.
pub fn section_table(store: &MeasurementStore, spec: &SectionSpec) -> Vec<String> {
  let mut lines = vec![spec.heading(), String::new()];
  lines.extend(table_lines(store, &spec.category, &spec.size_label));
  lines
}

/// Render the full comparison for stdout, one table per category in sorted
/// category order.
pub fn render_comparison(store: &MeasurementStore) -> String {
  let mut out = String::new();

  out.push_str("# Benchmark Comparison\n\n");
  for category in store.categories() {
    out.push_str(&format!("## Category: {}\n", category));
    for line in table_lines(store, &category, "Input Size") {
      out.push_str(&line);
      out.push('\n');
    }
    out.push('\n');
  }

  out
}

fn table_lines(store: &MeasurementStore, category: &str, size_label: &str) -> Vec<String> {
  let mut lines = vec![
    format!("| {} | Reference Time (s) | Candidate Time (s) | Speedup (ref/cand) |", size_label),
    "|---|---|---|---|".to_string(),
  ];

  for size in store.sizes(category) {
    let reference = store.reference_seconds(category, size);
    let candidate = store.candidate_seconds(category, size);
    lines.push(format!(
      "| {} | {} | {} | {} |",
      size,
      format_seconds(reference),
      format_seconds(candidate),
      format_ratio(reference, candidate),
    ));
  }

  lines
}

fn format_seconds(value: Option<f64>) -> String {
  value.map(|v| format!("{:.6}", v)).unwrap_or_else(|| "-".to_string())
}

/// Speedup of the candidate relative to the reference; values above 1 mean
/// the candidate ran faster. Undefined when either side is absent or zero.
fn format_ratio(reference: Option<f64>, candidate: Option<f64>) -> String {
  match (reference, candidate) {
    (Some(r), Some(c)) if r != 0.0 && c != 0.0 => format!("{:.2}x", r / c),
    _ => "-".to_string(),
  }
}
