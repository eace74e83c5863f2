use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LeaderboardConfig {
    /// Relative paths are resolved next to the executable.
    pub file: String,
    pub top_limit: usize,
}

impl Validate for LeaderboardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.file.trim().is_empty() {
            return Err("leaderboard file must not be empty".to_string());
        }
        if self.top_limit == 0 || self.top_limit > 100 {
            return Err("top_limit must be between 1 and 100".to_string());
        }
        Ok(())
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            file: "snake_leaderboard.yaml".to_string(),
            top_limit: 10,
        }
    }
}
