//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Serialize, de::DeserializeOwned};

use directories::ProjectDirs;

/// Get or create the application's configuration directory
pub fn config_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("io", "vti", "vti-hub")
        .ok_or_else(|| anyhow::anyhow!("Could not determine project directories"))?;

    let dir = project_dirs.config_dir();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    Ok(dir.to_path_buf())
}

/// Load a TOML config file, falling back to defaults when absent
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = config_dir()?.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Save a TOML config file
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    let path = config_dir()?.join(filename);
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config: AppConfig =
            load_config("vti-hub-test-no-such-config.toml").expect("load defaults");
        assert_eq!(
            config.ticket.quick_add_tags,
            AppConfig::default().ticket.quick_add_tags
        );
    }
}
