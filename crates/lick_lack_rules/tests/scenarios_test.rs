//! End-to-end rule scenarios without any I/O.

use lick_lack_rules::{
    Board, Cell, GameState, GameStatus, InputError, Mark, Move, Position, parse_move, rules,
};

#[test]
fn test_first_move_fills_only_target() {
    for mark in [Mark::W, Mark::L] {
        let state = GameState::new(mark);
        let next = state.apply(parse_move("0,0", &state).unwrap());

        assert_eq!(next.board().get(Position::TopLeft), Cell::Marked(mark));
        for pos in Position::ALL.iter().skip(1) {
            assert!(next.board().is_empty(*pos), "{pos} should stay empty");
        }
    }
}

#[test]
fn test_completing_top_row_wins() {
    for mark in [Mark::W, Mark::L] {
        let state = GameState::new(mark)
            .apply(Move::new(Position::TopLeft, mark))
            .apply(Move::new(Position::TopCenter, mark));
        assert_eq!(state.status(), GameStatus::InProgress);

        let mv = parse_move("2,0", &state).unwrap();
        assert_eq!(mv.position().to_index(), 2);

        let state = state.apply(mv);
        assert_eq!(state.status(), GameStatus::Won(mark));
    }
}

#[test]
fn test_full_board_without_line_draws() {
    // L W L / L W W / W L L
    #[rustfmt::skip]
    let marks = [
        Mark::L, Mark::W, Mark::L,
        Mark::L, Mark::W, Mark::W,
        Mark::W, Mark::L, Mark::L,
    ];
    let board = Position::ALL
        .iter()
        .zip(marks)
        .fold(Board::new(), |b, (&pos, mark)| b.apply(pos, mark));

    assert_eq!(rules::check_winner(&board), None);
    assert_eq!(rules::evaluate(&board), GameStatus::Draw);
}

#[test]
fn test_out_of_range_leaves_state_unchanged() {
    let state = GameState::new(Mark::W).apply(Move::new(Position::Center, Mark::L));
    let snapshot = state.clone();

    assert_eq!(parse_move("3,0", &state), Err(InputError::XOutOfRange));
    assert_eq!(parse_move("1,1", &state), Err(InputError::PositionTaken));
    assert_eq!(state, snapshot);
}

#[test]
fn test_history_records_moves_in_order() {
    let state = GameState::new(Mark::L)
        .apply(Move::new(Position::Center, Mark::W))
        .apply(Move::new(Position::BottomLeft, Mark::L));

    let positions: Vec<_> = state.history().iter().map(Move::position).collect();
    assert_eq!(positions, vec![Position::Center, Position::BottomLeft]);
}
