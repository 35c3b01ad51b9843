use std::io::{self, BufRead, Write};
use telbook::schema::NewEntry;

/// Prompt for one line; empty input means "leave unset".
pub fn prompt_optional(label: &str) -> io::Result<Option<String>> {
    let line = prompt_line(label)?;
    if line.is_empty() {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

pub fn prompt_line(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn wait_for_enter() -> io::Result<()> {
    let _ = prompt_line("Press Enter to show the next page...")?;
    Ok(())
}

/// Field-by-field interactive prompt for a new entry, mirroring the
/// non-interactive --flags of add_entry.
pub fn prompt_new_entry() -> io::Result<NewEntry> {
    Ok(NewEntry {
        id: None,
        first_name: prompt_optional("First name: ")?,
        last_name: prompt_optional("Last name: ")?,
        middle_name: prompt_optional("Middle name: ")?,
        organization: prompt_optional("Organization: ")?,
        office_phone: prompt_optional("Office phone: ")?,
        personal_phone: prompt_optional("Personal phone: ")?,
    })
}
