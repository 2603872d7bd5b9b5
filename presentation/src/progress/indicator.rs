//! Spinner shown while a request is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Console loading indicator backed by an indicatif spinner.
///
/// `start` and `stop` bracket each in-flight request; `stop` on an idle
/// indicator is a no-op, so release on every exit path is safe.
pub struct LoadingIndicator {
    spinner: Mutex<Option<ProgressBar>>,
    enabled: bool,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            enabled: true,
        }
    }

    /// A silent indicator for --quiet mode.
    pub fn disabled() -> Self {
        Self {
            spinner: Mutex::new(None),
            enabled: false,
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    pub fn start(&self, message: &str) {
        if !self.enabled {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(pb);
    }

    pub fn stop(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}
