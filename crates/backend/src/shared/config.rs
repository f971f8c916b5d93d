use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Load the demo installations and installers on startup
    #[serde(default = "default_true")]
    pub seed_mock_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub directory: String,
    #[serde(default = "default_log_file")]
    pub file_name: String,
}

fn default_true() -> bool {
    true
}

fn default_log_file() -> String {
    "backend.log".into()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[store]
seed_mock_data = true

[logging]
directory = "logs"
file_name = "backend.log"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Logging is not initialized yet at this point, so messages go to stdout.
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                println!("Loading config from: {}", config_path.display());
                return load_config_from(&config_path);
            } else {
                println!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    println!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the log directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_log_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.logging.directory);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    // Fallback: relative to current directory
    PathBuf::from(&config.logging.directory)
}
