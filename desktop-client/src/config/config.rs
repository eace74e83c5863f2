use std::path::{Path, PathBuf};

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::SnakeSettings;
use serde::{Deserialize, Serialize};

use super::LeaderboardConfig;

const CONFIG_FILE_NAME: &str = "snake_arcade_config.yaml";

pub fn resolve_beside_executable(file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(path);
    }
    path.to_path_buf()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    let path = resolve_beside_executable(CONFIG_FILE_NAME);
    ConfigManager::from_yaml_file(&path.to_string_lossy())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: SnakeSettings,
    pub leaderboard: LeaderboardConfig,
    #[serde(default)]
    pub last_player_name: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.leaderboard.validate()?;
        Ok(())
    }
}
