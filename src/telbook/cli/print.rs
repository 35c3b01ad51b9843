use colored::Colorize;
use telbook::api::{CmdMessage, MessageLevel};
use telbook::model::Entry;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_entry(entry: &Entry) {
    println!("{} {}", "ID:".dimmed(), entry.id);
    println!("{} {}", "First name:".dimmed(), entry.first_name);
    println!("{} {}", "Last name:".dimmed(), entry.last_name);
    println!("{} {}", "Middle name:".dimmed(), opt(&entry.middle_name));
    println!("{} {}", "Organization:".dimmed(), opt(&entry.organization));
    println!("{} {}", "Office phone:".dimmed(), opt(&entry.office_phone));
    println!(
        "{} {}",
        "Personal phone:".dimmed(),
        opt(&entry.personal_phone)
    );
}

pub fn print_entries(entries: &[Entry]) {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_entry(entry);
    }
}

pub fn print_command_list() {
    println!("Available commands:");
    println!("  add_entry     Add a new entry");
    println!("  show_entries  List entries page by page");
    println!("  find_entry    Search entries by exact field values");
    println!("  edit_entry    Update an entry by id");
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}
