//! # Output Formatting
//!
//! Status messages with colors and emojis for the interactive parts of the
//! tool. The report itself is written uncolored so it can be pasted into a
//! spreadsheet.

use owo_colors::{OwoColorize, Stream, Style};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply this mode as the global owo-colors override.
  ///
  /// Only output styled through `if_supports_color` honours the override, so
  /// every helper below goes through [`paint`].
  pub fn apply(self) {
    match self {
      ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
      ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
      // Let owo-colors detect the terminal
      ColorMode::Auto => {}
    }
  }
}

/// Style `text` for `stream`, or leave it plain when that stream should not
/// be colored.
pub fn paint(text: &str, stream: Stream, style: Style) -> String {
  text.if_supports_color(stream, |t| t.style(style)).to_string()
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

fn status_line(emoji: &str, default: &str, style: Style, stream: Stream, message: &str) -> String {
  let marker = get_emoji_or_default(emoji, default);
  format!("{} {message}", paint(&marker, stream, style))
}

/// Print a success message
pub fn print_success(message: &str) {
  println!(
    "{}",
    status_line("check_mark", "✓", Style::new().green().bold(), Stream::Stdout, message)
  );
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
  eprintln!(
    "{}",
    status_line("cross_mark", "✗", Style::new().red().bold(), Stream::Stderr, message)
  );
}

/// Print a warning message
pub fn print_warning(message: &str) {
  println!(
    "{}",
    status_line("warning", "⚠", Style::new().yellow().bold(), Stream::Stdout, message)
  );
}

/// Print an info message
pub fn print_info(message: &str) {
  println!(
    "{}",
    status_line("information", "ℹ", Style::new().blue().bold(), Stream::Stdout, message)
  );
}

/// Format a file path
pub fn format_path(path: &str) -> String {
  paint(path, Stream::Stdout, Style::new().bright_green())
}
