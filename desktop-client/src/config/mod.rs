mod config;
mod leaderboard_config;

pub use config::{Config, get_config_manager, resolve_beside_executable};
pub use leaderboard_config::LeaderboardConfig;
