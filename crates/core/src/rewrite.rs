//! In-place regeneration of anchored tables inside an existing document.
//!
//! The rewriter has no document parser. It scans line by line, and when a
//! line contains a known anchor substring it emits a freshly rendered
//! table and consumes the old one: the anchor line, any blank lines under
//! it, one header row, one separator row, and every contiguous row that
//! still contains a pipe. Copying resumes at the first non-table line, so
//! everything outside the consumed spans survives byte for byte. Line
//! endings follow the input: a document containing CRLF is rejoined with
//! CRLF throughout, otherwise LF.

use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::render::{SectionSpec, section_table};
use crate::store::MeasurementStore;
use crate::{PolybenchError, Result};

/// Result of rewriting a document in memory.
#[derive(Debug)]
pub struct Rewrite {
  /// The rewritten document text.
  pub text: String,
  /// How many anchored sections were found and regenerated.
  pub replaced: usize,
}

/// Replace each anchored table in `original` with a freshly rendered one.
///
/// An anchor that never appears leaves that section untouched; a document
/// that ends mid-table terminates the consume loop cleanly.
pub fn rewrite_document(original: &str, store: &MeasurementStore, sections: &[SectionSpec]) -> Rewrite {
  let lines: Vec<&str> = original.lines().collect();
  let mut out: Vec<String> = Vec::with_capacity(lines.len());
  let mut replaced = 0;

  let mut i = 0;
  while i < lines.len() {
    let Some(spec) = sections.iter().find(|s| lines[i].contains(&s.anchor)) else {
      out.push(lines[i].to_string());
      i += 1;
      continue;
    };

    out.extend(section_table(store, spec));
    replaced += 1;

    // Consume the anchor line and the old table under it.
    i += 1;
    while i < lines.len() && lines[i].trim().is_empty() {
      i += 1;
    }
    if i < lines.len() && lines[i].contains('|') {
      i += 1; // header row
    }
    if i < lines.len() && lines[i].contains("---") {
      i += 1; // separator row
    }
    while i < lines.len() && lines[i].contains('|') {
      i += 1; // data rows
    }
  }

  let eol = if original.contains("\r\n") { "\r\n" } else { "\n" };
  let mut text = out.join(eol);
  if original.ends_with('\n') {
    text.push_str(eol);
  }

  Rewrite { text, replaced }
}

/// Rewrite the anchored tables of the document at `path` in place.
///
/// The new content goes to a temporary file beside the target and is
/// renamed over it; the target is never truncated mid-write and keeps its
/// permission bits. A missing target document is an error.
pub fn update_document(path: &Path, store: &MeasurementStore, sections: &[SectionSpec]) -> Result<()> {
  let original = match std::fs::read_to_string(path) {
    Ok(text) => text,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
      return Err(PolybenchError::DocumentMissing(path.to_path_buf()));
    }
    Err(e) => return Err(e.into()),
  };
  let permissions = std::fs::metadata(path)?.permissions();

  let rewrite = rewrite_document(&original, store, sections);
  if rewrite.replaced == 0 {
    warn!("no recognized section anchors in {}", path.display());
  }

  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  let mut tmp = NamedTempFile::new_in(dir)?;
  tmp.write_all(rewrite.text.as_bytes())?;
  // Temp files start with a restrictive mode; the rename must not change
  // the target's.
  tmp.as_file().set_permissions(permissions)?;
  tmp.persist(path).map_err(|e| e.error)?;

  info!("regenerated {} section(s) in {}", rewrite.replaced, path.display());
  Ok(())
}
