use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for long-running export jobs
pub fn spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    bar
}

/// Print a success message with green checkmark
pub fn success(message: &str) {
    println!("{} {}", "✓".bright_green().bold(), message.bright_green());
}

/// Print a warning message with yellow warning icon
pub fn warning(message: &str) {
    println!("{} {}", "⚠".bright_yellow().bold(), message.yellow());
}

/// Print an error message with red X
pub fn error(message: &str) {
    println!("{} {}", "✗".red().bold(), message.red());
}

/// Print an info message with blue info icon
pub fn info(message: &str) {
    println!("{} {}", "ℹ".bright_blue().bold(), message);
}

/// Print a step/process message
pub fn step(step: usize, total: usize, message: &str) {
    println!(
        "{} {}",
        format!("[{}/{}]", step, total).bright_cyan().bold(),
        message
    );
}

/// Format duration in human-readable format
pub fn format_duration(duration_ms: u64) -> String {
    let seconds = duration_ms / 1000;
    let ms = duration_ms % 1000;

    if seconds >= 60 {
        let minutes = seconds / 60;
        let remaining_seconds = seconds % 60;
        format!("{}m {}s", minutes, remaining_seconds)
    } else if seconds > 0 {
        format!("{}.{:03}s", seconds, ms)
    } else {
        format!("{}ms", ms)
    }
}
