use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::{log, log_warn};
use super::{LeaderboardEntry, LeaderboardError, ScoreStore};

/// Highest score first; equal scores keep the earlier entry on top.
pub fn rank_entries(entries: &[LeaderboardEntry], limit: usize) -> Vec<LeaderboardEntry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.timestamp.cmp(&b.timestamp)));
    ranked.truncate(limit);
    ranked
}

/// Shared high-score table backed by a [`ScoreStore`].
///
/// All entries are mirrored in a watch channel so subscribers see every
/// accepted submission. Store failures are logged and leave the table as it
/// was; they never reach the game.
pub struct Leaderboard<S: ScoreStore> {
    store: Arc<S>,
    entries: Arc<watch::Sender<Vec<LeaderboardEntry>>>,
}

impl<S: ScoreStore> Clone for Leaderboard<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<S: ScoreStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        let initial = match store.load() {
            Ok(entries) => entries,
            Err(e) => {
                log_warn!("Leaderboard unavailable, starting empty: {}", e);
                Vec::new()
            }
        };
        let (sender, _) = watch::channel(initial);

        Self {
            store: Arc::new(store),
            entries: Arc::new(sender),
        }
    }

    pub fn top_scores(&self, limit: usize) -> Vec<LeaderboardEntry> {
        rank_entries(&self.entries.borrow(), limit)
    }

    pub fn submit(&self, name: String, score: u32) -> Result<LeaderboardEntry, LeaderboardError> {
        let entry = LeaderboardEntry::new(name, score);
        self.store.append(&entry)?;
        self.entries.send_modify(|entries| entries.push(entry.clone()));
        log!("Leaderboard accepted {} with {} points", entry.name, entry.score);
        Ok(entry)
    }

    /// Fire-and-forget submission. Inside a tokio runtime the write happens on
    /// the blocking pool; without one it runs inline.
    pub fn submit_score(&self, name: String, score: u32) {
        let board = self.clone();
        let write = move || {
            if let Err(e) = board.submit(name, score) {
                log_warn!("Failed to submit score: {}", e);
            }
        };

        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(write);
            }
            Err(_) => write(),
        }
    }

    /// Calls `on_update` with the current top `limit` entries and again after
    /// every accepted submission, until the returned [`Subscription`] is dropped.
    /// Must be called from within a tokio runtime.
    pub fn subscribe_top_scores<F>(&self, limit: usize, mut on_update: F) -> Subscription
    where
        F: FnMut(Vec<LeaderboardEntry>) + Send + 'static,
    {
        let mut receiver = self.entries.subscribe();

        let handle = tokio::spawn(async move {
            loop {
                let top = rank_entries(&receiver.borrow_and_update(), limit);
                on_update(top);
                if receiver.changed().await.is_err() {
                    break;
                }
            }
        });

        Subscription { handle }
    }
}

pub struct Subscription {
    handle: JoinHandle<()>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        self.handle.abort();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
