//! Command-line presentation helpers

pub mod path_mapping;

use crate::error::ConversionError;
use console::style;

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable form
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Create a progress bar for batch file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            if Self::should_use_color() {
                println!("{} {}", style("✓").green(), message);
            } else {
                println!("✓ {}", message);
            }
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        if Self::should_use_color() {
            eprintln!("{} {}", style("✗").red(), message);
        } else {
            eprintln!("✗ {}", message);
        }
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Terminal width in columns, with a conservative fallback
    pub fn terminal_width() -> usize {
        terminal_size::terminal_size()
            .map(|(width, _)| width.0 as usize)
            .unwrap_or(80)
    }

    /// Render the first `rows` data rows of a CSV document (plus header),
    /// each line clamped to `width` characters.
    pub fn render_preview(csv: &str, rows: usize, width: usize) -> String {
        csv.lines()
            .take(rows + 1)
            .map(|line| clamp_line(line, width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn clamp_line(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }
    let truncated: String = line.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", truncated)
}

/// Print a conversion error with a user-friendly message and, where it
/// helps, a usage tip.
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    match error {
        ConversionError::ParseError(_) => {
            eprintln!("\nTip: use --validate-only to check JSON syntax before conversion");
        }
        ConversionError::Conversion { kind, .. } => {
            if matches!(
                kind,
                crate::error::ConversionErrorKind::JsonTooLarge { .. }
                    | crate::error::ConversionErrorKind::MemoryLimitExceeded { .. }
            ) {
                eprintln!("\nTip: use --memory-limit to raise the size allowance");
            }
        }
        ConversionError::Other(_) => {}
    }
}
