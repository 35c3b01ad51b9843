//! # API facade
//!
//! [`TelbookApi`] is a thin facade over the command layer and the single
//! entry point for phonebook operations. It dispatches to the command
//! modules and returns structured [`CmdResult`] values; it never prints,
//! prompts or exits. Generic over [`EntryStore`] so the CLI runs it
//! against `FileStore` and tests run it against `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::schema::{EntryFilter, EntryPatch, NewEntry};
use crate::store::EntryStore;

pub struct TelbookApi<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> TelbookApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_entry(&mut self, candidate: NewEntry) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, candidate)
    }

    pub fn show_entries(&self, page_size: usize) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, page_size)
    }

    pub fn find_entries(&self, filter: &EntryFilter) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, filter)
    }

    pub fn edit_entry(&mut self, id: u64, patch: &EntryPatch) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, patch)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
