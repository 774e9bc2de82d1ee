use colored::Colorize;
use one_liner::api::{CmdMessage, MessageLevel};
use std::path::Path;

const FRAME_WIDTH: usize = 50;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_names(names: &[String]) {
    if names.is_empty() {
        println!("{}", "No aliases registered.".dimmed());
        return;
    }
    for name in names {
        println!("{}", name);
    }
}

pub(super) fn print_definition(line: &str) {
    println!("\n\t{}\n", line);
}

pub(super) fn print_script(script: &[u8]) {
    let frame = "*".repeat(FRAME_WIDTH);
    println!("{}", frame.dimmed());
    let text = String::from_utf8_lossy(script);
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
    println!("{}", frame.dimmed());
}

pub(super) fn print_source_reminder(alias_file: &Path) {
    println!("\nExecute the following in shell for changes to take effect:");
    println!("\t$ {}\n", format!("source {}", alias_file.display()).bold());
}
