mod board;
mod entry;
mod error;
mod reporter;
mod store;

pub use board::{Leaderboard, Subscription, rank_entries};
pub use entry::LeaderboardEntry;
pub use error::LeaderboardError;
pub use reporter::ScoreReporter;
pub use store::{MemoryScoreStore, ScoreStore, YamlFileScoreStore};
