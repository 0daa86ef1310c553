//! Console output helpers for consistent CLI formatting

use console::style;

/// Display a section header
pub fn section(title: &str) {
    println!();
    println!("{}", style(title).bold());
}

/// Display a success step
pub fn step_ok(message: &str) {
    println!("  {} {}", style("[OK]").green(), message);
}

/// Display a success step with detail
pub fn step_ok_detail(message: &str, detail: &str) {
    println!("  {} {} ({})", style("[OK]").green(), message, detail);
}

/// Display an error step with detail
pub fn step_error_detail(message: &str, detail: &str) {
    println!("  {} {}: {}", style("[FAIL]").red(), message, detail);
}

/// Display an aligned key/value line
pub fn key_value(key: &str, value: &str) {
    println!("  {:<16} {}", style(key).dim(), value);
}
