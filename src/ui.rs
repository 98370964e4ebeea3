//! Diagnostics for humans. Everything here goes to stderr; stdout carries
//! only the credential document.

use colored::*;

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), msg.yellow());
}

pub fn print_hint(msg: &str) {
    eprintln!("  {} {}", "•".cyan(), msg);
}
