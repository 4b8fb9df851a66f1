use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// Overrides the problem store location; `./problems` when unset.
    #[serde(default)]
    pub problems_dir: Option<PathBuf>,
}

pub fn get_config_path() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("drillbit").join("config.json")
}

pub fn load_config() -> UserConfig {
    let path = get_config_path();
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => UserConfig::default(),
    }
}

pub fn save_config(config: &UserConfig) -> Result<(), std::io::Error> {
    let path = get_config_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)
}

/// Effective store directory: explicit override, else `./problems`.
pub fn problems_dir(config: &UserConfig) -> PathBuf {
    config
        .problems_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("problems"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_dir() {
        assert_eq!(problems_dir(&UserConfig::default()), PathBuf::from("problems"));
    }

    #[test]
    fn test_override_wins() {
        let config = UserConfig {
            problems_dir: Some(PathBuf::from("/srv/drills")),
        };
        assert_eq!(problems_dir(&config), PathBuf::from("/srv/drills"));
    }
}
