#[derive(Debug)]
pub enum LeaderboardError {
    Io(std::io::Error),
    Yaml(serde_yaml_ng::Error),
    Unavailable(String),
}

impl std::fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaderboardError::Io(e) => write!(f, "Leaderboard IO error: {}", e),
            LeaderboardError::Yaml(e) => write!(f, "Leaderboard format error: {}", e),
            LeaderboardError::Unavailable(reason) => write!(f, "Leaderboard unavailable: {}", reason),
        }
    }
}

impl std::error::Error for LeaderboardError {}

impl From<std::io::Error> for LeaderboardError {
    fn from(e: std::io::Error) -> Self {
        LeaderboardError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for LeaderboardError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        LeaderboardError::Yaml(e)
    }
}
