//! Time unit normalization for raw benchmark values.

/// A time unit token as emitted by benchmark harnesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
  Nanos,
  Micros,
  Millis,
  Seconds,
}

impl TimeUnit {
  /// Parse a unit token. Accepts both the `µs` and `us` spellings since
  /// redirected logs sometimes lose the micro sign.
  ///
  /// Returns `None` for anything else; an unrecognized unit makes the
  /// enclosing measurement malformed rather than silently passing the raw
  /// value through.
  pub fn parse(token: &str) -> Option<Self> {
    match token {
      "ns" => Some(Self::Nanos),
      "\u{00b5}s" | "us" => Some(Self::Micros),
      "ms" => Some(Self::Millis),
      "s" => Some(Self::Seconds),
      _ => None,
    }
  }

  /// Convert a raw value in this unit to seconds.
  pub fn to_seconds(self, value: f64) -> f64 {
    match self {
      Self::Nanos => value / 1_000_000_000.0,
      Self::Micros => value / 1_000_000.0,
      Self::Millis => value / 1_000.0,
      Self::Seconds => value,
    }
  }
}
