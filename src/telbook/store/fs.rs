use super::{find_in_lines, parse_line, EntryStore, Pages};
use crate::error::{Result, TelbookError};
use crate::model::Entry;
use crate::schema::{EntryFilter, EntryPatch, NewEntry};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File-backed phonebook: one JSON record per line, newline-terminated,
/// no header or footer. Every operation opens the file afresh.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store at `path`, creating parent directories and an empty
    /// backing file if missing. No side effect when the file exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TelbookError::Io)?;
            }
        }
        if !path.exists() {
            fs::write(&path, "").map_err(TelbookError::Io)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(TelbookError::Io)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(TelbookError::Io)?;
        Ok(())
    }
}

impl EntryStore for FileStore {
    fn count(&self) -> Result<usize> {
        Ok(self.read_lines()?.len())
    }

    fn append(&mut self, candidate: NewEntry) -> Result<Entry> {
        let id = self.count()? as u64 + 1;
        let entry = candidate
            .into_entry(id)
            .map_err(TelbookError::Validation)?;

        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(TelbookError::Io)?;
        file.write_all(line.as_bytes()).map_err(TelbookError::Io)?;

        Ok(entry)
    }

    fn entry_at(&self, position: usize) -> Result<Entry> {
        let lines = self.read_lines()?;
        match lines.get(position) {
            Some(line) => parse_line(line, position),
            None => Err(TelbookError::NotFound(position as u64 + 1)),
        }
    }

    fn edit(&mut self, position: usize, patch: &EntryPatch) -> Result<Entry> {
        let mut lines = self.read_lines()?;
        let line = lines
            .get(position)
            .ok_or(TelbookError::NotFound(position as u64 + 1))?;

        let mut entry = parse_line(line, position)?;
        patch.apply(&mut entry);

        lines[position] = serde_json::to_string(&entry)?;
        self.write_lines(&lines)?;
        Ok(entry)
    }

    fn find(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        find_in_lines(&self.read_lines()?, filter)
    }

    fn pages(&self, page_size: usize) -> Result<Pages> {
        Ok(Pages::new(self.read_lines()?, page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn candidate(first: &str, last: &str) -> NewEntry {
        NewEntry {
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            ..Default::default()
        }
    }

    #[test]
    fn open_creates_missing_file_and_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("phonebook.jsonl");
        let store = FileStore::open(&path).unwrap();

        assert!(path.exists());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn open_leaves_existing_file_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("phonebook.jsonl");

        let mut store = FileStore::open(&path).unwrap();
        store.append(candidate("Ivan", "Ivanov")).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.count().unwrap(), 1);
    }

    #[test]
    fn append_assigns_sequential_ids_and_newline_terminates() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("pb.jsonl")).unwrap();

        let first = store.append(candidate("Ivan", "Ivanov")).unwrap();
        let second = store.append(candidate("Petr", "Petrov")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count().unwrap(), 2);

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.ends_with('\n'));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn invalid_candidate_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("pb.jsonl")).unwrap();

        let err = store.append(candidate("99", "Ivanov")).unwrap_err();
        assert!(matches!(err, TelbookError::Validation(_)));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn entry_at_out_of_range_is_not_found() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("pb.jsonl")).unwrap();
        store.append(candidate("Ivan", "Ivanov")).unwrap();

        assert_eq!(store.entry_at(0).unwrap().first_name, "Ivan");
        let err = store.entry_at(5).unwrap_err();
        assert!(matches!(err, TelbookError::NotFound(6)));
    }

    #[test]
    fn edit_rewrites_only_the_addressed_line() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("pb.jsonl")).unwrap();
        store.append(candidate("Ivan", "Ivanov")).unwrap();
        store.append(candidate("Petr", "Petrov")).unwrap();

        let patch = EntryPatch {
            first_name: Some("Edit".into()),
            ..Default::default()
        };
        let edited = store.edit(1, &patch).unwrap();
        assert_eq!(edited.first_name, "Edit");
        assert_eq!(edited.id, 2);

        assert_eq!(store.entry_at(0).unwrap().first_name, "Ivan");
        assert_eq!(store.entry_at(1).unwrap().first_name, "Edit");
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn edit_disambiguates_identical_records() {
        // Two records that serialize identically except for their id would
        // defeat a textual replace; index addressing must touch only the
        // requested position.
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("pb.jsonl")).unwrap();
        store.append(candidate("Ivan", "Ivanov")).unwrap();
        store.append(candidate("Ivan", "Ivanov")).unwrap();

        let patch = EntryPatch {
            last_name: Some("Petrov".into()),
            ..Default::default()
        };
        store.edit(0, &patch).unwrap();

        assert_eq!(store.entry_at(0).unwrap().last_name, "Petrov");
        assert_eq!(store.entry_at(1).unwrap().last_name, "Ivanov");
    }

    #[test]
    fn edit_out_of_range_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("pb.jsonl")).unwrap();
        store.append(candidate("Ivan", "Ivanov")).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let err = store.edit(3, &EntryPatch::default()).unwrap_err();
        assert!(matches!(err, TelbookError::NotFound(4)));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn corrupt_line_fails_fast() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pb.jsonl");
        let mut store = FileStore::open(&path).unwrap();
        store.append(candidate("Ivan", "Ivanov")).unwrap();
        fs::write(&path, "not json\n").unwrap();

        let err = store.entry_at(0).unwrap_err();
        assert!(matches!(err, TelbookError::Corrupt { line: 1, .. }));

        let err = store.find(&EntryFilter::default()).unwrap_err();
        assert!(matches!(err, TelbookError::Corrupt { line: 1, .. }));
    }

    #[test]
    fn find_scans_in_file_order() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("pb.jsonl")).unwrap();
        store.append(candidate("Ivan", "Ivanov")).unwrap();
        store.append(candidate("Petr", "Ivanov")).unwrap();

        let all = store.find(&EntryFilter::default()).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);
    }

    #[test]
    fn pages_reads_fresh_each_call() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("pb.jsonl")).unwrap();
        store.append(candidate("Ivan", "Ivanov")).unwrap();

        assert_eq!(store.pages(2).unwrap().count(), 1);
        store.append(candidate("Petr", "Petrov")).unwrap();
        store.append(candidate("Oleg", "Olegov")).unwrap();
        assert_eq!(store.pages(2).unwrap().count(), 2);
    }
}
