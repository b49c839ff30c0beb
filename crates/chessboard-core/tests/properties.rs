use chessboard_core::{Game, GameState, Move, Square, legal_moves};
use proptest::prelude::*;

/// Plays up to `picks.len()` legal moves, choosing each by index, and hands
/// every (before, move, after) triple to `check`.
fn walk(picks: &[prop::sample::Index], mut check: impl FnMut(&GameState, Move, &GameState)) {
    let mut game = Game::new();
    for pick in picks {
        let moves = legal_moves(game.state());
        if moves.is_empty() {
            break;
        }
        let mv = moves[pick.index(moves.len())];
        let before = game.state().clone();
        let after = game.apply_move(mv).unwrap().clone();
        check(&before, mv, &after);
    }
}

fn arb_square() -> impl Strategy<Value = Square> {
    (0u8..8, 0u8..8).prop_map(|(r, c)| Square::new(r, c).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 48, .. ProptestConfig::default() })]

    #[test]
    fn prop_turn_alternates(picks in prop::collection::vec(any::<prop::sample::Index>(), 1..40)) {
        walk(&picks, |before, _, after| {
            assert_eq!(after.turn(), before.turn().opponent());
            assert_eq!(after.history().len(), before.history().len() + 1);
        });
    }

    #[test]
    fn prop_piece_count_changes_by_at_most_one(
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..40)
    ) {
        walk(&picks, |before, _, after| {
            let b = before.board().piece_count();
            let a = after.board().piece_count();
            assert!(a == b || a + 1 == b, "{b} -> {a}");
        });
    }

    #[test]
    fn prop_with_move_is_deterministic(
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..30)
    ) {
        walk(&picks, |before, mv, after| {
            assert_eq!(before.board().with_move(mv), before.board().with_move(mv));
            assert_eq!(&before.board().with_move(mv), after.board());
        });
    }

    #[test]
    fn prop_fen_survives_reload(picks in prop::collection::vec(any::<prop::sample::Index>(), 1..40)) {
        walk(&picks, |_, _, after| {
            let fen = after.to_fen();
            let reloaded = GameState::from_fen(&fen).unwrap_or_else(|e| panic!("{fen}: {e}"));
            assert_eq!(reloaded.to_fen(), fen);
            assert_eq!(reloaded.special_rights(), after.special_rights());
            assert_eq!(reloaded.status(), after.status());
        });
    }

    #[test]
    fn prop_rejected_move_is_noop(
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..20),
        from in arb_square(),
        to in arb_square(),
    ) {
        let mut game = Game::new();
        for pick in &picks {
            let moves = legal_moves(game.state());
            if moves.is_empty() {
                break;
            }
            game.apply_move(moves[pick.index(moves.len())]).unwrap();
        }
        let before = game.state().clone();
        let candidate = Move::new(from, to);
        if game.apply_move(candidate).is_ok() {
            prop_assert_ne!(game.state(), &before);
        } else {
            prop_assert_eq!(game.state(), &before);
        }
    }

    #[test]
    fn prop_random_squares_never_panic(from in arb_square(), to in arb_square()) {
        let mut game = Game::new();
        let accepted = game.apply_move(Move::new(from, to)).is_ok();
        prop_assert_eq!(accepted, legal_moves(&GameState::new()).contains(&Move::new(from, to)));
    }
}
