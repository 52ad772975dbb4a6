// Configuration file loading and creation

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("ascii-pong");
    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config, io::Error> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> Result<Config, io::Error> {
    if !config_path.exists() {
        create_default_config(config_path)?;
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(config_path)?;
    match toml::from_str(&contents) {
        Ok(config) => {
            info!(path = %config_path.display(), "loaded config");
            Ok(config)
        }
        Err(e) => {
            warn!(
                path = %config_path.display(),
                error = %e,
                "failed to parse config, using defaults"
            );
            Ok(Config::default())
        }
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    // Add helpful header comments
    let commented_toml = format!(
        "# ASCII Pong Configuration File\n\
         # Edit this file to customize the game\n\
         # After editing, restart the game for changes to take effect\n\
         #\n\
         # Key binding format: \"Up\", \"Down\", \"Left\", \"Right\",\n\
         #   \"Enter\", \"Esc\", \"Space\", or single characters like \"W\", \"S\", \"Q\"\n\
         #\n\
         # ai.follow_reaction_rate: 0.0 (never moves) to 1.0 (never misses a step)\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    info!(path = %path.display(), "created default config file");
    Ok(())
}
