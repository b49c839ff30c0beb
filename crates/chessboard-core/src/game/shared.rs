use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::MoveError;
use crate::state::GameState;
use crate::types::Move;

use super::Game;

/// A `Game` shared between threads.
///
/// Moves are applied under a lock, so concurrent callers see each state
/// transition as a whole. Readers get owned snapshots.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> SharedGame {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Applies `mv` and returns the resulting state.
    pub fn apply_move(&self, mv: Move) -> Result<GameState, MoveError> {
        self.lock().apply_move(mv).cloned()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.lock().state().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Game> {
        // A panic while holding the lock means an invariant broke mid-update.
        self.inner.lock().unwrap_or_else(|e| {
            panic!("game lock poisoned: {e}");
        })
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
