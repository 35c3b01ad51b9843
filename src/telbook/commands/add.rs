use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::schema::NewEntry;
use crate::store::EntryStore;

pub fn run<S: EntryStore>(store: &mut S, candidate: NewEntry) -> Result<CmdResult> {
    let entry = store.append(candidate)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Entry added with id {}.",
        entry.id
    )));
    Ok(result.with_affected_entries(vec![entry]))
}
