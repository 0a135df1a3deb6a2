//! ANSI color helpers for CLI output.

/// Format text in green.
pub fn green(s: &str) -> String {
    format!("\x1b[32m{}\x1b[0m", s)
}

/// Format text in red.
pub fn red(s: &str) -> String {
    format!("\x1b[31m{}\x1b[0m", s)
}

/// Format text in gray.
pub fn gray(s: &str) -> String {
    format!("\x1b[90m{}\x1b[0m", s)
}

/// Apply `paint` only when color output is enabled.
pub fn paint_if(enabled: bool, s: &str, paint: fn(&str) -> String) -> String {
    if enabled {
        paint(s)
    } else {
        s.to_string()
    }
}
