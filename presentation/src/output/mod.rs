//! Console output formatting

mod console;

pub use console::ConsoleFormatter;

/// Globally disable colored output (for --no-color).
pub fn disable_color() {
    colored::control::set_override(false);
}
