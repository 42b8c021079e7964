// src/core/progress.rs
use indicatif::{ProgressBar, ProgressStyle};

/// A bar over `len` steps, or a hidden one when progress is off.
/// Drawing never affects what is computed.
pub fn bar(show: bool, len: usize, message: String) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░  "));
    }
    bar.set_message(message);
    bar
}
