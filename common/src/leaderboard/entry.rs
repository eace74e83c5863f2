use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    /// Milliseconds since the Unix epoch, UTC.
    pub timestamp: i64,
}

impl LeaderboardEntry {
    pub fn new(name: String, score: u32) -> Self {
        Self {
            name,
            score,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
