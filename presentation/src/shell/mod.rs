//! Interactive shell

mod repl;

pub use repl::{ShellRepl, load_image};
