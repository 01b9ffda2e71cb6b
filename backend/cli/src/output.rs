//! Terminal output helpers.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

/// `label: value` line with the label dimmed when color is on.
pub fn field(label: &str, value: &str, color: bool) -> String {
    if color {
        format!("{DIM}{label:>10}:{RESET} {value}")
    } else {
        format!("{label:>10}: {value}")
    }
}

pub fn heading(text: &str, color: bool) -> String {
    if color {
        format!("{BOLD}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Print a formatted ERROR note to stderr.
pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}error:{RESET} {msg}");
    } else {
        eprintln!("error: {msg}");
    }
}
