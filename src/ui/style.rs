//! Colored status lines for terminal output
//!
//! Success goes to stdout in green, failures to stderr in bright red. Color is
//! only emitted when the stream is a terminal and `NO_COLOR` is unset.

use anstyle::{AnsiColor, Color, Style};
use std::io::IsTerminal;

const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const FAILURE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightRed)));

fn color_enabled(is_terminal: bool) -> bool {
  is_terminal && std::env::var_os("NO_COLOR").is_none()
}

/// Wrap `text` in the escape codes for `style` (or leave it alone when color is off)
pub fn paint(text: &str, style: Style, color: bool) -> String {
  if color {
    format!("{}{}{}", style.render(), text, style.render_reset())
  } else {
    text.to_string()
  }
}

/// Print a green status line to stdout
pub fn print_success(msg: &str) {
  let color = color_enabled(std::io::stdout().is_terminal());
  println!("{}", paint(msg, SUCCESS, color));
}

/// Print a bright red status line to stderr
pub fn print_failure(msg: &str) {
  let color = color_enabled(std::io::stderr().is_terminal());
  eprintln!("{}", paint(msg, FAILURE, color));
}
