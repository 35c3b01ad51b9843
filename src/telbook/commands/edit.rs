use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TelbookError};
use crate::schema::EntryPatch;
use crate::store::EntryStore;

/// Apply a patch to the entry with the given 1-based user-facing id.
pub fn run<S: EntryStore>(store: &mut S, id: u64, patch: &EntryPatch) -> Result<CmdResult> {
    if id == 0 {
        return Err(TelbookError::Store("id must be 1 or greater".into()));
    }

    let entry = store.edit((id - 1) as usize, patch)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Entry {id} updated.")));
    Ok(result.with_affected_entries(vec![entry]))
}
