//! Terminal display
//!
//! ANSI clear-and-home plus the observation screen layout. Formatting is
//! pure so it can be asserted on; printing is a thin wrapper.

use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use std::io::{self, Write as _};
use std::path::Path;
use std::time::Duration;

const RULE_WIDTH: usize = 60;

/// Clear the terminal and home the cursor
pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}

/// Startup banner, printed once before the first cycle
#[must_use]
pub fn format_banner(archive_dir: Option<&Path>) -> String {
    let mut text = String::new();
    text.push_str("=== Helioscope ===\n");
    text.push_str("Displaying live solar observations from multiple sources\n");
    if let Some(dir) = archive_dir {
        let _ = writeln!(text, "Original photos will be saved to: {}/", dir.display());
    }
    text.push_str("Press Ctrl+C to exit\n\n");
    text
}

/// The full observation screen for one cycle
#[must_use]
pub fn format_observation(
    source: &str,
    saved_path: Option<&Path>,
    frame: &str,
    updated: DateTime<Utc>,
    refresh: Duration,
    archive_dir: Option<&Path>,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut text = String::new();
    text.push_str("=== HELIOSCOPE - LIVE SOLAR OBSERVATION ===\n");
    let _ = writeln!(text, "Source: {source}");
    if let Some(name) = saved_path.and_then(Path::file_name) {
        let _ = writeln!(text, "Photo saved: {}", name.to_string_lossy());
    }
    let _ = writeln!(text, "{rule}");
    let _ = writeln!(text, "{frame}");
    let _ = writeln!(text, "{rule}");
    let _ = writeln!(text, "Updated: {}", updated.format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(text, "Next refresh in {} seconds", refresh.as_secs());
    if let Some(dir) = archive_dir {
        let _ = writeln!(text, "Photos saved in: {}/", dir.display());
    }
    text.push_str("Press Ctrl+C to exit\n");
    text
}

/// Shutdown message, printed on interrupt
#[must_use]
pub fn format_shutdown(archive_dir: Option<&Path>) -> String {
    let mut text = String::from("\nShutting down telescope...\n");
    if let Some(dir) = archive_dir {
        let _ = writeln!(text, "Your solar photos are saved in: {}/", dir.display());
    }
    text
}

/// Clear the screen and show one observation
pub fn show_observation(
    source: &str,
    saved_path: Option<&Path>,
    frame: &str,
    refresh: Duration,
    archive_dir: Option<&Path>,
) {
    clear_screen();
    print!(
        "{}",
        format_observation(source, saved_path, frame, Utc::now(), refresh, archive_dir)
    );
    let _ = io::stdout().flush();
}
