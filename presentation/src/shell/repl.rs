//! REPL (Read-Eval-Print Loop) for interactive diagnosis sessions
//!
//! Plain input lines are problem descriptions sent for diagnosis; slash
//! commands drive identification and session inspection. The identified
//! vehicle persists across commands for the lifetime of the shell.

use crate::presenter::ConsolePresenter;
use motordoc_application::{DiagnosisSession, DiagnosticPresenter, ImageUpload};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive diagnosis shell
pub struct ShellRepl {
    session: DiagnosisSession,
    presenter: ConsolePresenter,
}

impl ShellRepl {
    pub fn new(session: DiagnosisSession, presenter: ConsolePresenter) -> Self {
        Self { session, presenter }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("motordoc").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    // Plain text is a problem description
                    self.session.diagnose_from_text(line, &self.presenter).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        motordoc - Diagnosis Session         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Identify your vehicle, then describe its problems.");
        println!();
        println!("Commands:");
        println!("  /identify <description>        - Identify vehicle from text");
        println!("  /identify-image <path>         - Identify vehicle from a photo");
        println!("  /diagnose-image <path> <desc>  - Diagnose from a photo");
        println!("  /vehicle                       - Show the current vehicle");
        println!("  /health                        - Check the API");
        println!("  /help                          - Show this help");
        println!("  /quit                          - Exit");
        println!();
        println!("Anything else is sent as a problem description.");
        println!();
    }

    /// Handle slash commands. Returns true if the shell should exit.
    async fn handle_command(&mut self, line: &str) -> bool {
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return true;
            }
            "/help" | "/h" | "/?" => {
                self.print_welcome();
            }
            "/identify" => {
                self.session.identify_from_text(rest, &self.presenter).await;
            }
            "/identify-image" => match load_image(rest) {
                Ok(image) => {
                    self.session
                        .identify_from_image(&image, &self.presenter)
                        .await;
                }
                Err(message) => self.presenter.prompt(&message),
            },
            "/diagnose-image" => {
                let (path, description) = match rest.split_once(char::is_whitespace) {
                    Some((path, description)) => (path, description.trim()),
                    None => (rest, ""),
                };
                match load_image(path) {
                    Ok(image) => {
                        self.session
                            .diagnose_from_image(description, &image, &self.presenter)
                            .await;
                    }
                    Err(message) => self.presenter.prompt(&message),
                }
            }
            "/vehicle" => match self.session.vehicle() {
                Some(vehicle) => self.presenter.show_vehicle(vehicle),
                None => println!("No vehicle identified yet."),
            },
            "/health" => {
                self.session.check_health(&self.presenter).await;
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }
}

/// Reads a user-selected image file into an upload payload.
pub fn load_image(path: &str) -> Result<ImageUpload, String> {
    if path.is_empty() {
        return Err("No image selected".to_string());
    }
    let bytes = std::fs::read(path).map_err(|e| format!("Could not read {}: {}", path, e))?;
    let file_name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    Ok(ImageUpload::new(file_name, bytes))
}
