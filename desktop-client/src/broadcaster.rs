use common::games::GameBroadcaster;
use common::games::snake::{GameOverSummary, GameSnapshot};
use tokio::sync::mpsc;

use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
    game_over_tx: mpsc::UnboundedSender<GameOverSummary>,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState, game_over_tx: mpsc::UnboundedSender<GameOverSummary>) -> Self {
        Self {
            shared_state,
            game_over_tx,
        }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        self.shared_state.set_snapshot(snapshot);
    }

    async fn broadcast_game_over(&self, summary: GameOverSummary) {
        let _ = self.game_over_tx.send(summary);
    }
}
