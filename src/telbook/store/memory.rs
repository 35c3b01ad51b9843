use super::{find_in_lines, parse_line, EntryStore, Pages};
use crate::error::{Result, TelbookError};
use crate::model::Entry;
use crate::schema::{EntryFilter, EntryPatch, NewEntry};

/// In-memory store for tests. Holds the same serialized lines a
/// [`super::fs::FileStore`] would hold so positional ids, corruption
/// handling and pagination behave identically, minus the filesystem.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    lines: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject a raw line, bypassing validation. For corruption tests.
    #[cfg(test)]
    pub(crate) fn push_raw(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl EntryStore for InMemoryStore {
    fn count(&self) -> Result<usize> {
        Ok(self.lines.len())
    }

    fn append(&mut self, candidate: NewEntry) -> Result<Entry> {
        let id = self.lines.len() as u64 + 1;
        let entry = candidate
            .into_entry(id)
            .map_err(TelbookError::Validation)?;
        self.lines.push(serde_json::to_string(&entry)?);
        Ok(entry)
    }

    fn entry_at(&self, position: usize) -> Result<Entry> {
        match self.lines.get(position) {
            Some(line) => parse_line(line, position),
            None => Err(TelbookError::NotFound(position as u64 + 1)),
        }
    }

    fn edit(&mut self, position: usize, patch: &EntryPatch) -> Result<Entry> {
        let line = self
            .lines
            .get(position)
            .ok_or(TelbookError::NotFound(position as u64 + 1))?;

        let mut entry = parse_line(line, position)?;
        patch.apply(&mut entry);

        self.lines[position] = serde_json::to_string(&entry)?;
        Ok(entry)
    }

    fn find(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        find_in_lines(&self.lines, filter)
    }

    fn pages(&self, page_size: usize) -> Result<Pages> {
        Ok(Pages::new(self.lines.clone(), page_size))
    }
}

// --- Test fixtures ---


#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn append_assigns_positional_ids() {
        let mut store = StoreFixture::new().with_entries(2).store;
        let candidate = NewEntry {
            first_name: Some("Oleg".into()),
            last_name: Some("Olegov".into()),
            ..Default::default()
        };
        assert_eq!(store.append(candidate).unwrap().id, 3);
    }

    #[test]
    fn entry_at_mirrors_file_semantics() {
        let store = StoreFixture::new()
            .with_entry("Ivan", "Ivanov")
            .with_entry("Petr", "Petrov")
            .store;

        assert_eq!(store.entry_at(1).unwrap().first_name, "Petr");
        assert!(matches!(
            store.entry_at(2).unwrap_err(),
            TelbookError::NotFound(3)
        ));
    }

    #[test]
    fn corrupt_line_fails_fast() {
        let mut store = InMemoryStore::new();
        store.push_raw("{broken");
        assert!(matches!(
            store.entry_at(0).unwrap_err(),
            TelbookError::Corrupt { line: 1, .. }
        ));
    }
}
