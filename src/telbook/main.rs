use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;
use telbook::api::TelbookApi;
use telbook::commands::list;
use telbook::config::TelbookConfig;
use telbook::error::{Result, TelbookError};
use telbook::schema::{EntryFilter, EntryPatch, NewEntry};
use telbook::store::fs::FileStore;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_command_list, print_entries, print_entry, print_messages};
use cli::prompt;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // An unrecognized command lists the available ones and exits
            // cleanly rather than failing.
            if err.kind() == clap::error::ErrorKind::InvalidSubcommand {
                println!("Unknown command.");
                print_command_list();
                return;
            }
            err.exit();
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TelbookApi<FileStore>,
    page_size: usize,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::AddEntry {
            first_name,
            last_name,
            middle_name,
            organization,
            office_phone,
            personal_phone,
        }) => {
            let flags = [
                &first_name,
                &last_name,
                &middle_name,
                &organization,
                &office_phone,
                &personal_phone,
            ];
            let candidate = if flags.iter().all(|f| f.is_none()) {
                prompt::prompt_new_entry().map_err(TelbookError::Io)?
            } else {
                NewEntry {
                    id: None,
                    first_name,
                    last_name,
                    middle_name,
                    organization,
                    office_phone,
                    personal_phone,
                }
            };
            handle_add(&mut ctx, candidate)
        }
        Some(Commands::ShowEntries) => handle_show(&ctx),
        Some(Commands::FindEntry { query }) => handle_find(&ctx, query),
        Some(Commands::EditEntry { id, patch }) => handle_edit(&mut ctx, id, patch),
        None => {
            print_command_list();
            Ok(())
        }
    }
}

fn init_context() -> Result<AppContext> {
    let proj_dirs = ProjectDirs::from("com", "telbook", "telbook")
        .ok_or_else(|| TelbookError::Store("could not determine a data directory".to_string()))?;
    let data_dir = proj_dirs.data_dir().to_path_buf();

    let config = TelbookConfig::load(&data_dir).unwrap_or_default();

    let path = env::var_os("TELBOOK_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| config.resolved_path(&data_dir));
    let page_size = env::var("TELBOOK_PAGE_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(config.page_size);

    let store = FileStore::open(path)?;
    Ok(AppContext {
        api: TelbookApi::new(store),
        page_size,
    })
}

fn handle_add(ctx: &mut AppContext, candidate: NewEntry) -> Result<()> {
    let result = ctx.api.add_entry(candidate)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.show_entries(ctx.page_size)?;

    if list::is_empty(&result.pages) {
        println!("No entries.");
        return Ok(());
    }

    for (i, page) in result.pages.iter().enumerate() {
        if i > 0 {
            prompt::wait_for_enter().map_err(TelbookError::Io)?;
        }
        print_entries(page);
    }
    Ok(())
}

fn handle_find(ctx: &AppContext, query: Option<String>) -> Result<()> {
    let raw = match query {
        Some(raw) => raw,
        None => prompt::prompt_line(concat!(
            "Enter search criteria as JSON, e.g. {\"id\": 1, \"first_name\": \"Ivan\", ",
            "\"office_phone\": \"+71234567890\"}\n",
            "Any subset of fields works: ",
        ))
        .map_err(TelbookError::Io)?,
    };

    let filter: EntryFilter = serde_json::from_str(&raw)?;
    let result = ctx.api.find_entries(&filter)?;

    print_messages(&result.messages);
    print_entries(&result.listed_entries);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: Option<u64>, patch: Option<String>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => {
            let raw = prompt::prompt_line("Enter the id of the entry to edit: ")
                .map_err(TelbookError::Io)?;
            raw.parse()
                .map_err(|_| TelbookError::Store(format!("{raw:?} is not a valid id")))?
        }
    };

    let raw_patch = match patch {
        Some(raw) => raw,
        None => prompt::prompt_line("Enter the new field values as JSON: ")
            .map_err(TelbookError::Io)?,
    };

    let patch: EntryPatch = serde_json::from_str(&raw_patch)?;
    let result = ctx.api.edit_entry(id, &patch)?;

    print_messages(&result.messages);
    if let Some(entry) = result.affected_entries.first() {
        print_entry(entry);
    }
    Ok(())
}
