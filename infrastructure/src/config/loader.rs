//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "quiz";
const PROJECT_FILES: [&str; 2] = ["quiz.toml", ".quiz.toml"];
const ENV_PREFIX: &str = "QUIZ_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `QUIZ_*` environment variables (`QUIZ_TOPICS__MIN_LENGTH=4`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./quiz.toml` or `./.quiz.toml`
    /// 4. Global config: `$XDG_CONFIG_HOME/quiz/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|path| path.exists());
        let project = Self::project_config_path();
        Self::load_from(global.as_deref(), project.as_deref(), config_path.map(PathBuf::as_path))
    }

    /// Merge the given files over the defaults, then the environment.
    ///
    /// Figment treats a missing file as empty.
    pub fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for (source, path) in [("global", global), ("project", project), ("explicit", explicit)] {
            if let Some(path) = path {
                debug!(source, path = %path.display(), "merging config file");
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/quiz/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        for line in Self::config_sources(config_path) {
            println!("  {}", line);
        }
    }

    /// One line per config source, highest priority first.
    pub fn config_sources(config_path: Option<&PathBuf>) -> Vec<String> {
        let mut lines = vec![format!("[  ENV] {}* environment variables", ENV_PREFIX)];

        if let Some(path) = config_path {
            let status = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("[{}] Explicit: {}", status, path.display()));
        }

        if let Some(path) = Self::project_config_path() {
            lines.push(format!("[FOUND] Project: {}", path.display()));
        } else {
            lines.push("[     ] Project: ./quiz.toml or ./.quiz.toml".to_string());
        }

        if let Some(path) = Self::global_config_path() {
            let status = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("[{}] Global:  {}", status, path.display()));
        }

        lines.push("[     ] Default: built-in defaults".to_string());
        lines
    }
}
