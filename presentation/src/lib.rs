//! Presentation layer for motordoc
//!
//! Everything that paints: the colored console formatter, the loading
//! spinner, the [`ConsolePresenter`] adapter for the render port, the clap
//! CLI definition, and the interactive shell.

pub mod cli;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod shell;

pub use cli::{Cli, Command};
pub use output::{ConsoleFormatter, disable_color};
pub use presenter::ConsolePresenter;
pub use progress::LoadingIndicator;
pub use shell::{ShellRepl, load_image};
