use chessboard_core::{
    Color, Game, GameState, GameStatus, Move, MoveError, Piece, PieceKind, Square, legal_moves,
    validate,
};

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn play(game: &mut Game, moves: &[&str]) {
    for m in moves {
        game.apply_move(mv(m))
            .unwrap_or_else(|e| panic!("{m} rejected: {e}"));
    }
}

#[test]
fn opening_pawn_push_is_accepted() {
    let mut game = Game::new();
    let state = game.apply_move(mv("e2e4")).unwrap();
    assert_eq!(state.turn(), Color::Black);
    assert_eq!(state.board().piece_at(sq("e2")), None);
    assert_eq!(
        state.board().piece_at(sq("e4")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(state.status(), GameStatus::InProgress);
}

#[test]
fn rook_blocked_by_own_pawn_is_illegal_pattern() {
    let mut game = Game::new();
    let err = game.apply_move(mv("a1a2")).unwrap_err();
    assert_eq!(err.kind(), "IllegalPattern");
    assert_eq!(game.state(), &GameState::new());
}

#[test]
fn black_cannot_move_first() {
    let mut game = Game::new();
    assert_eq!(
        game.apply_move(mv("e7e5")),
        Err(MoveError::NotYourPiece { square: sq("e7") })
    );
}

#[test]
fn out_of_bounds_coordinates_are_rejected() {
    assert_eq!(
        Move::from_coords((8, 0), (1, 0), None),
        Err(MoveError::OutOfBounds { row: 8, col: 0 })
    );
    assert_eq!(
        Move::from_coords((1, 4), (3, -1), None),
        Err(MoveError::OutOfBounds { row: 3, col: -1 })
    );
    let m = Move::from_coords((1, 4), (3, 4), None).unwrap();
    assert_eq!(m, mv("e2e4"));
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    let state = game.state();
    assert_eq!(state.status(), GameStatus::Checkmate);
    assert_eq!(state.winner(), Some(Color::Black));
    assert!(state.is_terminal());
    assert!(legal_moves(state).is_empty());
}

#[test]
fn stalemate_after_queen_move() {
    let mut game = Game::from_fen("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1").unwrap();
    play(&mut game, &["f1f7"]);
    assert_eq!(game.state().status(), GameStatus::Stalemate);
    assert_eq!(game.state().winner(), None);
    assert_eq!(
        game.apply_move(mv("h8g8")),
        Err(MoveError::GameOver {
            status: GameStatus::Stalemate
        })
    );
}

#[test]
fn check_is_reported() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "f7f6", "d1h5"]);
    assert_eq!(game.state().status(), GameStatus::Check);
    assert!(game.state().in_check());
}

#[test]
fn move_into_check_is_rejected() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "f7f6", "d1h5"]);
    // black must answer the check; a7a6 ignores it
    assert_eq!(
        game.apply_move(mv("a7a6")),
        Err(MoveError::SelfCheck {
            color: Color::Black
        })
    );
    play(&mut game, &["g7g6"]);
    assert_eq!(game.state().status(), GameStatus::InProgress);
}

#[test]
fn pinned_bishop_cannot_leave_the_file() {
    let mut game = Game::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    assert_eq!(
        game.apply_move(mv("e2d3")),
        Err(MoveError::SelfCheck {
            color: Color::White
        })
    );
}

#[test]
fn knight_onto_own_pawn_is_friendly_fire() {
    let mut game = Game::new();
    assert_eq!(
        game.apply_move(mv("b1d2")),
        Err(MoveError::FriendlyFire { to: sq("d2") })
    );
}

#[test]
fn castling_kingside_moves_both_pieces() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"]);
    let board = game.state().board();
    assert_eq!(
        board.piece_at(sq("g1")),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        board.piece_at(sq("f1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(board.piece_at(sq("h1")), None);
}

#[test]
fn castling_is_lost_after_king_moves() {
    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play(&mut game, &["e1f1", "a8b8", "f1e1", "b8a8"]);
    let err = game.apply_move(mv("e1g1")).unwrap_err();
    assert_eq!(err.kind(), "IllegalPattern");
    assert!(game.state().to_fen().contains(" w k - "));
}

#[test]
fn castling_rights_come_from_the_fen() {
    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
    assert_eq!(game.apply_move(mv("e1g1")).unwrap_err().kind(), "IllegalPattern");
    assert_eq!(game.apply_move(mv("e1c1")).unwrap_err().kind(), "IllegalPattern");

    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
    assert_eq!(game.apply_move(mv("e1c1")).unwrap_err().kind(), "IllegalPattern");
    play(&mut game, &["e1g1"]);
    assert_eq!(game.apply_move(mv("e8g8")).unwrap_err().kind(), "IllegalPattern");
    play(&mut game, &["e8c8"]);
    assert_eq!(
        game.state().board().piece_at(sq("d8")),
        Some(Piece::new(Color::Black, PieceKind::Rook))
    );
}

#[test]
fn queenside_castling_through_attacked_square_is_self_check() {
    // black rook on d8 covers d1
    let mut game = Game::from_fen("3rk3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
    assert_eq!(
        game.apply_move(mv("e1c1")),
        Err(MoveError::SelfCheck {
            color: Color::White
        })
    );

    let mut game = Game::from_fen("r3k3/8/8/8/8/8/8/3RK3 b q - 0 1").unwrap();
    assert_eq!(
        game.apply_move(mv("e8c8")),
        Err(MoveError::SelfCheck {
            color: Color::Black
        })
    );

    // b1 is passed by the rook only, so an attack there does not matter
    let mut game = Game::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
    play(&mut game, &["e1c1"]);
    assert_eq!(
        game.state().board().piece_at(sq("c1")),
        Some(Piece::new(Color::White, PieceKind::King))
    );
}

#[test]
fn castling_blocked_by_piece_is_illegal_pattern() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(mv("e1g1")).unwrap_err().kind(), "IllegalPattern");
}

#[test]
fn en_passant_capture() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "e5d6"]);
    let board = game.state().board();
    assert_eq!(board.piece_at(sq("d5")), None);
    assert_eq!(
        board.piece_at(sq("d6")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(board.piece_count(), 31);
}

#[test]
fn en_passant_expires_after_one_move() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"]);
    assert_eq!(game.apply_move(mv("e5d6")).unwrap_err().kind(), "IllegalPattern");
}

#[test]
fn en_passant_from_fen() {
    let mut game = Game::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
    play(&mut game, &["e5d6"]);
    assert_eq!(game.state().board().piece_at(sq("d5")), None);
    assert_eq!(game.state().to_fen(), "4k3/8/3P4/8/8/8/8/4K3 b - - 0 2");

    // same position without the field: no capture
    let mut game = Game::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 2").unwrap();
    assert_eq!(game.apply_move(mv("e5d6")).unwrap_err().kind(), "IllegalPattern");
}

#[test]
fn en_passant_that_exposes_king_on_its_row_is_self_check() {
    // both pawns leave row 5, opening it for the rook on h5
    let mut game = Game::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1").unwrap();
    assert_eq!(
        game.apply_move(mv("e5d6")),
        Err(MoveError::SelfCheck {
            color: Color::White
        })
    );
    assert!(!legal_moves(game.state()).contains(&mv("e5d6")));
    play(&mut game, &["e5e6"]);
}

#[test]
fn promotion_defaults_to_queen_and_accepts_choice() {
    let mut game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    play(&mut game, &["a7a8"]);
    assert_eq!(
        game.state().board().piece_at(sq("a8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );

    let mut game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    play(&mut game, &["a7a8r"]);
    assert_eq!(
        game.state().board().piece_at(sq("a8")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(game.state().history(), &[mv("a7a8r")]);
}

#[test]
fn starting_position_has_twenty_moves() {
    let state = GameState::new();
    let moves = legal_moves(&state);
    assert_eq!(moves.len(), 20);
    for m in &moves {
        assert_eq!(validate(&state, *m), Ok(*m));
    }
}

#[test]
fn json_reflects_game_progress() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    let json = serde_json::to_value(game.state().to_json()).unwrap();
    assert_eq!(json["status"], "checkmate");
    assert_eq!(json["winner"], "black");
    assert_eq!(json["currentPlayer"], "white");
    assert_eq!(json["history"][3], "d8h4");
    assert_eq!(
        json["board"][3][7],
        serde_json::json!({"type": "queen", "color": "black"})
    );
}
