use colored::Colorize;
use promptpaste::api::{CmdMessage, MessageLevel};
use promptpaste::model::EntrySummary;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", format_message(message));
    }
}

pub(super) fn print_entries(entries: &[EntrySummary]) {
    print!("{}", format_entries(entries));
}

fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.normal().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
    }
}

fn format_entries(entries: &[EntrySummary]) -> String {
    if entries.is_empty() {
        return format!("{}\n", "No entries saved yet.".dimmed());
    }

    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("{}\n", format!("> {}", entry.name).cyan()));
        out.push_str(&format!(
            "  {}\n",
            format!("(lines: {}, chars: {})", entry.line_count, entry.char_count).green()
        ));
        if !entry.preview.is_empty() {
            out.push_str(&format!("  {}\n", entry.preview.yellow()));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, preview: &str) -> EntrySummary {
        EntrySummary {
            name: name.to_string(),
            line_count: 2,
            char_count: 10,
            preview: preview.to_string(),
        }
    }

    #[test]
    fn entries_render_name_counts_and_preview() {
        colored::control::set_override(false);
        let out = format_entries(&[summary("a.md", "first"), summary("b.md", "")]);
        assert_eq!(
            out,
            "> a.md\n  (lines: 2, chars: 10)\n  first\n\n> b.md\n  (lines: 2, chars: 10)\n\n"
        );
    }

    #[test]
    fn empty_listing_says_so() {
        colored::control::set_override(false);
        assert_eq!(format_entries(&[]), "No entries saved yet.\n");
    }
}
