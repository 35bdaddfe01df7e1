/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Checked-off ratio color:
/// \>= 80% → green
/// \>= 50% → yellow
/// otherwise → red (grey when there are no periods yet)
pub fn color_for_ratio(success: usize, total: usize) -> &'static str {
    if total == 0 {
        return GREY;
    }
    let ratio = success as f64 / total as f64;
    if ratio >= 0.8 {
        GREEN
    } else if ratio >= 0.5 {
        YELLOW
    } else {
        RED
    }
}

/// `label` wrapped in the color of its checked-off ratio.
pub fn color_for_percentage(success: usize, total: usize, label: &str) -> String {
    format!("{}{label}{RESET}", color_for_ratio(success, total))
}
