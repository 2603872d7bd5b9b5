//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{ApiConfig, FileConfig};
pub use loader::ConfigLoader;
