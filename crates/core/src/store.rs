//! Keyed measurement storage shared by both log parsers.

use std::collections::{BTreeMap, BTreeSet};

/// Identifies one benchmark case: a category label plus its input size.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MeasurementKey {
  /// Input topology class, e.g. `grid` or `random`.
  pub category: String,
  /// Integer sizing parameter of the benchmark input.
  pub size: u64,
}

impl MeasurementKey {
  pub fn new(category: impl Into<String>, size: u64) -> Self {
    Self {
      category: category.into(),
      size,
    }
  }
}

/// Seconds keyed by `(category, size)`, as produced by one parser.
pub type Measurements = BTreeMap<MeasurementKey, f64>;

/// Reconciled measurements from the reference and candidate sources.
///
/// The two sides share one key space but are independent: a key present on
/// only one side is valid and renders with a placeholder for the other.
#[derive(Debug, Clone, Default)]
pub struct MeasurementStore {
  reference: Measurements,
  candidate: Measurements,
}

impl MeasurementStore {
  pub fn new(reference: Measurements, candidate: Measurements) -> Self {
    Self { reference, candidate }
  }

  /// Sorted union of the categories seen by either source.
  pub fn categories(&self) -> Vec<String> {
    let set: BTreeSet<&str> = self
      .reference
      .keys()
      .chain(self.candidate.keys())
      .map(|k| k.category.as_str())
      .collect();
    set.into_iter().map(String::from).collect()
  }

  /// Ascending union of the sizes seen by either source for `category`.
  pub fn sizes(&self, category: &str) -> Vec<u64> {
    let set: BTreeSet<u64> = self
      .reference
      .keys()
      .chain(self.candidate.keys())
      .filter(|k| k.category == category)
      .map(|k| k.size)
      .collect();
    set.into_iter().collect()
  }

  /// Reference-side seconds for one case, if measured.
  pub fn reference_seconds(&self, category: &str, size: u64) -> Option<f64> {
    self.reference.get(&MeasurementKey::new(category, size)).copied()
  }

  /// Candidate-side seconds for one case, if measured.
  pub fn candidate_seconds(&self, category: &str, size: u64) -> Option<f64> {
    self.candidate.get(&MeasurementKey::new(category, size)).copied()
  }

  /// True when neither source contributed any measurements.
  pub fn is_empty(&self) -> bool {
    self.reference.is_empty() && self.candidate.is_empty()
  }
}
