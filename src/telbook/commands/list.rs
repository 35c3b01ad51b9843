use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Entry;
use crate::store::{parse_line, EntryStore};

/// Collect the store's raw-line batches into pages of parsed entries.
/// A corrupt line aborts the whole listing.
pub fn run<S: EntryStore>(store: &S, page_size: usize) -> Result<CmdResult> {
    let page_size = page_size.max(1);
    let mut pages = Vec::new();

    for (page_no, batch) in store.pages(page_size)?.enumerate() {
        let mut entries = Vec::with_capacity(batch.len());
        for (offset, line) in batch.iter().enumerate() {
            entries.push(parse_line(line, page_no * page_size + offset)?);
        }
        pages.push(entries);
    }

    Ok(CmdResult::default().with_pages(pages))
}

/// True when the listing holds no entries at all.
pub fn is_empty(pages: &[Vec<Entry>]) -> bool {
    pages.iter().all(|page| page.is_empty())
}
