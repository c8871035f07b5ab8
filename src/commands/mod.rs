pub mod bank;
pub mod grocery;
pub mod init;
pub mod prompt;
pub mod recipe;
pub mod render;

use colored::*;

/// Exit status for a command that reported its own failure.
pub const EXIT_FAILURE: i32 = 1;

pub(crate) fn print_error(message: &str) {
    println!("{}", message.red());
}

pub(crate) fn print_success(message: &str) {
    println!("{}", message.green());
}

/// Print a rendered table in the list colors.
pub(crate) fn print_table(title: &str, lines: &[String]) {
    println!("{}", format!("\n{title}:\n").blue().bold());
    let mut lines = lines.iter();
    if let Some(header) = lines.next() {
        println!("{}", header.blue().bold());
    }
    let rule = lines.next().cloned().unwrap_or_default();
    println!("{}", rule.blue());
    for line in lines {
        println!("{}", line.blue());
    }
    println!("{}", format!("{rule}\n").blue());
}
