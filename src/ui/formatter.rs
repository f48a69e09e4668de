//! Pure formatting functions for UI output.
//!
//! Line builders return plain `String`s with `console` styling applied, so
//! they can be tested; the `display_*` functions print them.

use console::style;

use crate::boundary::BoundaryWarning;

/// `[info] <label>? <value>` in yellow.
pub fn info_line(label: &str, value: &str) -> String {
    format!(
        "{} {}? {}",
        style("[info]").yellow(),
        style(label).yellow(),
        style(value).yellow()
    )
}

/// `[error] <message>` in red, followed by the detail when there is one.
pub fn error_line(message: &str, detail: Option<&str>) -> String {
    let headline = style(format!("[error] {}", message)).red();
    match detail {
        Some(detail) if !detail.is_empty() => format!("{} {}", headline, detail),
        _ => headline.to_string(),
    }
}

/// `[warn] <warning>` in yellow.
pub fn warning_line(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("[warn]").yellow().bold(), warning)
}

/// Print an info line to stdout.
pub fn display_info(label: &str, value: &str) {
    println!("{}", info_line(label, value));
}

/// Print an error line to stderr.
pub fn display_error(message: &str, detail: Option<&str>) {
    eprintln!("{}", error_line(message, detail));
}

/// Print a boundary warning to stderr.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", warning_line(warning));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}
