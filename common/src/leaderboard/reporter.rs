use crate::log;
use crate::games::snake::GameOverSummary;
use crate::name_filter::sanitize;
use super::{Leaderboard, ScoreStore};

/// Turns a finished session into at most one leaderboard submission.
pub struct ScoreReporter<S: ScoreStore> {
    leaderboard: Leaderboard<S>,
    pending: Option<GameOverSummary>,
    last_armed_session: Option<u64>,
}

impl<S: ScoreStore> ScoreReporter<S> {
    pub fn new(leaderboard: Leaderboard<S>) -> Self {
        Self {
            leaderboard,
            pending: None,
            last_armed_session: None,
        }
    }

    pub fn leaderboard(&self) -> &Leaderboard<S> {
        &self.leaderboard
    }

    /// Returns `false` when this session was already armed once.
    pub fn arm(&mut self, summary: GameOverSummary) -> bool {
        if self.last_armed_session == Some(summary.session_id) {
            return false;
        }
        self.last_armed_session = Some(summary.session_id);
        self.pending = Some(summary);
        true
    }

    pub fn pending_score(&self) -> Option<u32> {
        self.pending.map(|summary| summary.score)
    }

    /// Sends the pending score under the trimmed, sanitized `raw_name` and
    /// returns the name used. An empty name drops the score, as does a second
    /// call. A name of only spaces is still submitted, trimmed to nothing.
    pub fn submit(&mut self, raw_name: &str) -> Option<String> {
        let summary = self.pending.take()?;

        if raw_name.is_empty() {
            log!("Score {} of session {} not submitted: no name", summary.score, summary.session_id);
            return None;
        }

        let name = sanitize(raw_name.trim());
        self.leaderboard.submit_score(name.clone(), summary.score);
        Some(name)
    }

    pub fn discard(&mut self) {
        self.pending = None;
    }
}
