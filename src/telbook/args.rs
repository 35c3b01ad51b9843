use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "telbook")]
#[command(about = "A file-backed personal phonebook for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new entry (prompts for fields when no flags are given)
    #[command(name = "add_entry")]
    AddEntry {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        middle_name: Option<String>,

        #[arg(long)]
        organization: Option<String>,

        #[arg(long)]
        office_phone: Option<String>,

        #[arg(long)]
        personal_phone: Option<String>,
    },

    /// List entries page by page
    #[command(name = "show_entries")]
    ShowEntries,

    /// Search entries by exact field values
    #[command(name = "find_entry")]
    FindEntry {
        /// JSON filter, e.g. {"first_name": "Ivan"} (prompts when omitted)
        query: Option<String>,
    },

    /// Update an entry by id
    #[command(name = "edit_entry")]
    EditEntry {
        /// Id of the entry to edit (prompts when omitted)
        id: Option<u64>,

        /// JSON patch; empty or null fields are left unchanged
        patch: Option<String>,
    },
}
