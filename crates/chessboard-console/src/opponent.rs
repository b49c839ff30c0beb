use chessboard_core::{Color, GameState, Move, legal_moves};
use rand::seq::IndexedRandom;
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;

/// Computer side that plays a uniformly random legal move.
pub struct RandomOpponent {
    color: Color,
    seed: u64,
    rng: Xoshiro256PlusPlus,
}

impl RandomOpponent {
    /// Opponent for `color`. Without a seed one is drawn from the OS.
    pub fn new(color: Color, seed: Option<u64>) -> RandomOpponent {
        let seed = seed.unwrap_or_else(rand::random);
        log::info!("random opponent plays {color} with seed {seed}");
        RandomOpponent {
            color,
            seed,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A legal move for the side to move, or `None` if it is not this
    /// opponent's turn or no move exists.
    pub fn choose(&mut self, state: &GameState) -> Option<Move> {
        if state.turn() != self.color {
            return None;
        }
        let moves = legal_moves(state);
        moves.as_slice().choose(&mut self.rng).copied()
    }
}
