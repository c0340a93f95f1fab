//! Finding the "Unreleased" header and stamping a release header after it
//!
//! Takes the changelog portion of a README from this:
//!
//! ```text
//! ## Unreleased
//!    - changed this
//! ## 1.9.10 - 2024-03-02
//! ```
//!
//! to this (releasing 1.9.11):
//!
//! ```text
//! ## Unreleased
//!
//! ## 1.9.11 - 2024-04-18
//!    - changed this
//! ## 1.9.10 - 2024-03-02
//! ```
//!
//! The new header is built from the unreleased one, so it keeps whatever
//! heading markup (`##`, `**`, ...) the README uses at that level.

use crate::release::readme::ReadmeFormat;
use chrono::NaiveDate;
use tracing::debug;

const UNRELEASED: &str = "unreleased";

/// The line selected as the unreleased-section header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreleasedHeader {
  /// Zero-based line index
  pub line_number: usize,
  /// Line text, without any trailing `\r`
  pub text: String,
  /// Byte offset just past `text` in the document
  pub end: usize,
  /// Line was terminated by `\r\n`
  pub crlf: bool,
}

impl UnreleasedHeader {
  fn line_ending(&self) -> &'static str {
    if self.crlf { "\r\n" } else { "\n" }
  }
}

/// Scan `contents` for the unreleased header
///
/// A line qualifies when its lower-cased text contains `" unreleased"`. Every
/// line is scanned and the LAST qualifying line wins.
pub fn find_unreleased_header(contents: &str) -> Option<UnreleasedHeader> {
  let marker = format!(" {}", UNRELEASED);
  let mut found = None;
  let mut offset = 0;

  for (line_number, raw) in contents.split('\n').enumerate() {
    let (text, crlf) = match raw.strip_suffix('\r') {
      Some(text) => (text, true),
      None => (raw, false),
    };

    if text.to_lowercase().contains(&marker) {
      found = Some(UnreleasedHeader {
        line_number,
        text: text.to_string(),
        end: offset + text.len(),
        crlf,
      });
    }

    offset += raw.len() + 1;
  }

  found
}

/// Build the release header from the unreleased header line
///
/// The whole line is lower-cased and `unreleased` becomes `<version> - <date>`.
pub fn synthesize_header(unreleased: &str, version: &str, date: NaiveDate) -> String {
  let stamp = format!("{} - {}", version, date.format("%Y-%m-%d"));
  unreleased.to_lowercase().replace(UNRELEASED, &stamp)
}

/// True if `" <version>"` already appears anywhere in `contents`
pub fn contains_version(contents: &str, version: &str) -> bool {
  contents.contains(&format!(" {}", version))
}

/// Result of running the updater over a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
  /// No unreleased header; document untouched
  HeaderNotFound,
  /// Version already in the document; document untouched
  AlreadyPresent,
  /// New header inserted
  Inserted {
    /// The synthesized release header line
    header: String,
    /// Full rewritten document
    contents: String,
  },
}

/// Pure README transformation: inserts a release header after the unreleased one
#[derive(Debug, Clone)]
pub struct ReleaseHeaderUpdater<'a> {
  version: &'a str,
  format: ReadmeFormat,
  today: NaiveDate,
}

impl<'a> ReleaseHeaderUpdater<'a> {
  pub fn new(version: &'a str, format: ReadmeFormat, today: NaiveDate) -> Self {
    Self { version, format, today }
  }

  /// Run the pipeline: header scan, duplicate-version guard, then insertion
  pub fn apply(&self, contents: &str) -> UpdateOutcome {
    let Some(unreleased) = find_unreleased_header(contents) else {
      debug!("no unreleased header found");
      return UpdateOutcome::HeaderNotFound;
    };
    debug!(line = unreleased.line_number + 1, header = %unreleased.text, "found unreleased header");

    if contains_version(contents, self.version) {
      debug!(version = %self.version, "version already present");
      return UpdateOutcome::AlreadyPresent;
    }

    let header = synthesize_header(&unreleased.text, self.version, self.today);
    let separator = self.format.separator(unreleased.line_ending());

    let mut updated = String::with_capacity(contents.len() + separator.len() + header.len());
    updated.push_str(&contents[..unreleased.end]);
    updated.push_str(&separator);
    updated.push_str(&header);
    updated.push_str(&contents[unreleased.end..]);

    UpdateOutcome::Inserted {
      header,
      contents: updated,
    }
  }
}
