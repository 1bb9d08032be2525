use std::fmt::Display;

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

pub fn message(severity: Severity, category: &str, message: impl Display) {
    let severity = match severity {
        Severity::Info => "INFO".blue(),
        Severity::Warning => "WARN".yellow(),
        Severity::Error => "ERROR".red(),
    }
    .bold();
    println!("[{}][{}]:{}", severity, category.dimmed(), message);
}

pub fn info(category: &str, text: impl Display) {
    message(Severity::Info, category, text);
}

pub fn warn(category: &str, text: impl Display) {
    message(Severity::Warning, category, text);
}

pub fn error(category: &str, text: impl Display) {
    message(Severity::Error, category, text);
}
