use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::schema::EntryFilter;
use crate::store::EntryStore;

pub fn run<S: EntryStore>(store: &S, filter: &EntryFilter) -> Result<CmdResult> {
    let entries = store.find(filter)?;

    let mut result = CmdResult::default();
    if entries.is_empty() {
        result.add_message(CmdMessage::info("No entries matched your query."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Found {} matching entries.",
            entries.len()
        )));
    }
    Ok(result.with_listed_entries(entries))
}
