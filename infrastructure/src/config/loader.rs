//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`MOTORDOC_API__BASE_URL`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./motordoc.toml`
    /// 4. Global: `~/.config/motordoc/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        let project_path = PathBuf::from("motordoc.toml");
        if project_path.exists() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("MOTORDOC_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("motordoc").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://garage.local:9000\"").unwrap();

        let config = ConfigLoader::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.api.base_url, "http://garage.local:9000");
    }

    #[test]
    fn test_missing_explicit_file_still_yields_defaults() {
        let config = ConfigLoader::load(Some(&PathBuf::from("/nonexistent/motordoc.toml")));
        // figment treats a missing Toml file as an empty source
        assert!(config.is_ok());
        assert_eq!(
            config.unwrap().api.base_url,
            ConfigLoader::load_defaults().api.base_url
        );
    }
}
