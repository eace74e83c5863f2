use std::future::Future;

use crate::games::snake::{GameOverSummary, GameSnapshot};

/// Outbound side of a running session: whoever renders or records it.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}
