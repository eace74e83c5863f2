use common::games::snake::{GameSnapshot, Input};
use common::leaderboard::LeaderboardEntry;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub enum ClientCommand {
    Start,
    Input(Input),
    SubmitScore { name: String },
    SkipScore,
    Shutdown,
}

/// State written by the game task and read by the UI every frame.
pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    high_scores: Arc<Mutex<Vec<LeaderboardEntry>>>,
    pending_score: Arc<Mutex<Option<u32>>>,
    last_player_name: Arc<Mutex<Option<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SharedState {
    pub fn new(last_player_name: Option<String>) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            high_scores: Arc::new(Mutex::new(Vec::new())),
            pending_score: Arc::new(Mutex::new(None)),
            last_player_name: Arc::new(Mutex::new(last_player_name)),
        }
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *lock(&self.snapshot) = Some(snapshot);
    }

    pub fn get_snapshot(&self) -> Option<GameSnapshot> {
        lock(&self.snapshot).clone()
    }

    pub fn set_high_scores(&self, entries: Vec<LeaderboardEntry>) {
        *lock(&self.high_scores) = entries;
    }

    pub fn get_high_scores(&self) -> Vec<LeaderboardEntry> {
        lock(&self.high_scores).clone()
    }

    pub fn set_pending_score(&self, score: Option<u32>) {
        *lock(&self.pending_score) = score;
    }

    pub fn get_pending_score(&self) -> Option<u32> {
        *lock(&self.pending_score)
    }

    pub fn set_last_player_name(&self, name: String) {
        *lock(&self.last_player_name) = Some(name);
    }

    pub fn get_last_player_name(&self) -> Option<String> {
        lock(&self.last_player_name).clone()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            high_scores: Arc::clone(&self.high_scores),
            pending_score: Arc::clone(&self.pending_score),
            last_player_name: Arc::clone(&self.last_player_name),
        }
    }
}
