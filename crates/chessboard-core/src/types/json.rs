use serde::{Deserialize, Serialize};

use super::Piece;

/// Game state in the shape a browser view consumes.
///
/// `board[row][col]` with row 0 = White's back rank; each cell is `null` or
/// `{"type": "rook", "color": "white"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateJson {
    pub board: Vec<Vec<Option<Piece>>>,
    /// "white" | "black"
    #[serde(rename = "currentPlayer")]
    pub current_player: String,
    /// "in-progress" | "check" | "checkmate" | "stalemate"
    pub status: String,
    /// Applied moves in coordinate notation ("e2e4", "e7e8q")
    pub history: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}
