use crate::types::Square;
use crate::types::json::GameStateJson;

use super::GameState;

impl GameState {
    /// View-facing JSON shape of this state.
    pub fn to_json(&self) -> GameStateJson {
        let board = (0..8u8)
            .map(|row| {
                (0..8u8)
                    .map(|col| self.board.piece_at(Square::from_parts(row, col)))
                    .collect()
            })
            .collect();
        GameStateJson {
            board,
            current_player: self.turn.name().to_string(),
            status: self.status.as_str().to_string(),
            history: self.history.iter().map(|m| m.to_string()).collect(),
            winner: self.winner().map(|c| c.name().to_string()),
        }
    }
}

impl From<&GameState> for GameStateJson {
    fn from(state: &GameState) -> Self {
        state.to_json()
    }
}
