//! # Storage layer
//!
//! The [`EntryStore`] trait abstracts the phonebook's persistence so the
//! command layer can run against different backends:
//!
//! - [`fs::FileStore`]: production storage, one JSON record per line in a
//!   single flat file. A record's id is its 1-based line position, so the
//!   file order is the only ordering the store knows about.
//! - [`memory::InMemoryStore`]: the same line semantics without a
//!   filesystem, for fast isolated tests.
//!
//! Both backends share the positional contract: ids are assigned as
//! count + 1 on append and never reassigned, lookups are by 0-based line
//! position, and a malformed line aborts the operation with
//! [`TelbookError::Corrupt`] instead of being skipped — skipping would
//! shift every position after it and desynchronize the ids.
//!
//! No backend holds a persistent handle; every operation is a fresh pass
//! over the data. Concurrent writers can race the count-then-append id
//! assignment; the store does not guard against that.

use crate::error::{Result, TelbookError};
use crate::model::Entry;
use crate::schema::{EntryFilter, EntryPatch, NewEntry};

pub mod fs;
pub mod memory;

/// Abstract interface for phonebook storage.
pub trait EntryStore {
    /// Number of stored records.
    fn count(&self) -> Result<usize>;

    /// Validate the candidate, assign it id = count + 1 and append it.
    /// Either fully appends or leaves the store untouched.
    fn append(&mut self, candidate: NewEntry) -> Result<Entry>;

    /// Record at the given 0-based position. Out of range is
    /// [`TelbookError::NotFound`], never a silent exhaustion.
    fn entry_at(&self, position: usize) -> Result<Entry>;

    /// Apply the patch to the record at `position` and rewrite that line
    /// in place, addressed by index rather than by textual match so two
    /// identically serialized records can never be confused.
    fn edit(&mut self, position: usize, patch: &EntryPatch) -> Result<Entry>;

    /// All records matching the filter, in file order.
    fn find(&self, filter: &EntryFilter) -> Result<Vec<Entry>>;

    /// Raw lines in batches of up to `page_size`. Each call performs a
    /// fresh read pass; the returned iterator is finite and not
    /// restartable.
    fn pages(&self, page_size: usize) -> Result<Pages>;
}

pub(crate) fn parse_line(line: &str, position: usize) -> Result<Entry> {
    serde_json::from_str(line).map_err(|source| TelbookError::Corrupt {
        line: position + 1,
        source,
    })
}

pub(crate) fn find_in_lines(lines: &[String], filter: &EntryFilter) -> Result<Vec<Entry>> {
    let mut matches = Vec::new();
    for (position, line) in lines.iter().enumerate() {
        let entry = parse_line(line, position)?;
        if filter.matches(&entry) {
            matches.push(entry);
        }
    }
    Ok(matches)
}

/// Iterator over successive batches of raw lines. The final batch may be
/// shorter than the page size; an empty store yields exactly one empty
/// batch so callers can tell "no records" apart from "nothing yielded".
pub struct Pages {
    lines: Vec<String>,
    page_size: usize,
    offset: usize,
    yielded: bool,
}

impl Pages {
    pub(crate) fn new(lines: Vec<String>, page_size: usize) -> Self {
        Self {
            lines,
            page_size: page_size.max(1),
            offset: 0,
            yielded: false,
        }
    }
}

impl Iterator for Pages {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Vec<String>> {
        if self.offset >= self.lines.len() {
            if self.yielded {
                return None;
            }
            self.yielded = true;
            return Some(Vec::new());
        }
        self.yielded = true;
        let end = (self.offset + self.page_size).min(self.lines.len());
        let batch = self.lines[self.offset..end].to_vec();
        self.offset = end;
        Some(batch)
    }
}
