//! Unit tests for board representation, parsing, move generation,
//! application, and evaluation.


use super::{Board, BoardBuilder, Color, GridError, Move, Piece, Square, WIN_THRESHOLD};

const START_ROWS: [&str; 8] = [
    ".b.b.b.b",
    "b.b.b.b.",
    ".b.b.b.b",
    "........",
    "........",
    "r.r.r.r.",
    ".r.r.r.r",
    "r.r.r.r.",
];

fn board_from_rows(rows: &[&str; 8]) -> Board {
    Board::from_grid(&rows.join("\n")).expect("valid grid")
}

// ---------------------------------------------------------------------------
// Board construction and grid notation
// ---------------------------------------------------------------------------

#[test]
fn test_starting_position() {
    let board = Board::new();
    assert_eq!(board.piece_count(Color::Red), 12);
    assert_eq!(board.piece_count(Color::Black), 12);
    assert_eq!(board.side_to_move(), Color::Red);

    let moves = board.legal_moves();
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn test_from_grid_matches_new() {
    assert_eq!(board_from_rows(&START_ROWS), Board::new());
}

#[test]
fn test_grid_round_trip() {
    let board = Board::new();
    let text = board.to_grid();
    assert_eq!(text, format!("{}\n", START_ROWS.join("\n")));
    assert_eq!(Board::from_grid(&text).expect("round trip"), board);
}

#[test]
fn test_grid_tolerates_trailing_blank_lines() {
    let text = format!("{}\n\n\n", START_ROWS.join("\n"));
    assert_eq!(Board::from_grid(&text).expect("parsed"), Board::new());
}

#[test]
fn test_grid_wrong_row_count() {
    let text = START_ROWS[..7].join("\n");
    assert_eq!(
        Board::from_grid(&text),
        Err(GridError::WrongRowCount { found: 7 })
    );
}

#[test]
fn test_grid_wrong_row_length() {
    let mut rows = START_ROWS;
    rows[3] = ".......";
    assert_eq!(
        Board::from_grid(&rows.join("\n")),
        Err(GridError::WrongRowLength { row: 3, found: 7 })
    );
}

#[test]
fn test_grid_invalid_symbol() {
    let mut rows = START_ROWS;
    rows[4] = "...x....";
    assert_eq!(
        Board::from_grid(&rows.join("\n")),
        Err(GridError::InvalidSymbol {
            row: 4,
            column: 3,
            symbol: 'x'
        })
    );
}

#[test]
fn test_grid_rejects_light_square_piece() {
    let mut rows = START_ROWS;
    rows[0] = "r.......";
    assert_eq!(
        Board::from_grid(&rows.join("\n")),
        Err(GridError::LightSquarePiece {
            square: Square(7, 0)
        })
    );
}

#[test]
fn test_grid_rejects_man_on_promotion_rank() {
    let rows = [
        ".r......",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
    ];
    assert_eq!(
        Board::from_grid(&rows.join("\n")),
        Err(GridError::ManOnPromotionRank {
            square: Square(7, 1)
        })
    );
}

#[test]
fn test_builder_rejects_light_square() {
    let result = BoardBuilder::new()
        .piece(Square(3, 4), Color::Red, Piece::Man)
        .build();
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Squares and moves
// ---------------------------------------------------------------------------

#[test]
fn test_dark_index_round_trip() {
    for idx in 0..32 {
        let sq = Square::from_dark_index(idx);
        assert!(sq.is_dark());
        assert_eq!(sq.dark_index(), idx);
    }
}

#[test]
fn test_square_bounds() {
    assert_eq!(Square::new(3, 3), Some(Square(3, 3)));
    assert_eq!(Square::new(8, 0), None);
    assert_eq!(Square::new(0, 8), None);
    assert_eq!(Square(4, 4).offset(-2, 3), Some(Square(2, 7)));
    assert_eq!(Square(0, 0).offset(-1, -1), None);
}

#[test]
fn test_square_display() {
    assert_eq!(Square(0, 0).to_string(), "a1");
    assert_eq!(Square(7, 7).to_string(), "h8");
    assert_eq!(Square(2, 4).to_string(), "e3");
}

#[test]
fn test_move_display() {
    let step = Move::step(Square(2, 2), Square(3, 3));
    assert_eq!(step.to_string(), "c3-d4");

    let jump = Move::jump(
        vec![Square(1, 1), Square(3, 3), Square(5, 5)],
        vec![Square(2, 2), Square(4, 4)],
    );
    assert_eq!(jump.to_string(), "b2xd4xf6");
    assert_eq!(jump.from(), Square(1, 1));
    assert_eq!(jump.to(), Square(5, 5));
    assert_eq!(jump.capture_count(), 2);
}

// ---------------------------------------------------------------------------
// Move generation
// ---------------------------------------------------------------------------

#[test]
fn test_mandatory_capture_excludes_steps() {
    // A far-away red man has steps available, but the capture is forced.
    let board = BoardBuilder::new()
        .piece(Square(2, 2), Color::Red, Piece::Man)
        .piece(Square(3, 3), Color::Black, Piece::Man)
        .piece(Square(0, 0), Color::Red, Piece::Man)
        .build()
        .unwrap();

    let moves = board.legal_moves_for(Color::Red);
    assert_eq!(
        moves,
        vec![Move::jump(
            vec![Square(2, 2), Square(4, 4)],
            vec![Square(3, 3)]
        )]
    );
}

#[test]
fn test_two_jump_chain_is_one_move() {
    // A black man jumps one red man and immediately a second: one two-jump
    // chain, never two separate single jumps.
    let board = BoardBuilder::new()
        .piece(Square(5, 1), Color::Black, Piece::Man)
        .piece(Square(4, 2), Color::Red, Piece::Man)
        .piece(Square(2, 4), Color::Red, Piece::Man)
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    let moves = board.legal_moves_for(Color::Black);
    assert_eq!(
        moves,
        vec![Move::jump(
            vec![Square(5, 1), Square(3, 3), Square(1, 5)],
            vec![Square(4, 2), Square(2, 4)]
        )]
    );
}

#[test]
fn test_branching_chains_both_generated() {
    let board = BoardBuilder::new()
        .piece(Square(2, 2), Color::Red, Piece::Man)
        .piece(Square(3, 1), Color::Black, Piece::Man)
        .piece(Square(3, 3), Color::Black, Piece::Man)
        .build()
        .unwrap();

    let moves = board.legal_moves_for(Color::Red);
    assert_eq!(
        moves,
        vec![
            Move::jump(vec![Square(2, 2), Square(4, 0)], vec![Square(3, 1)]),
            Move::jump(vec![Square(2, 2), Square(4, 4)], vec![Square(3, 3)]),
        ]
    );
}

#[test]
fn test_man_cannot_capture_backward() {
    // The black man sits diagonally behind the red man; red men only move
    // and capture forward, so red keeps its two plain steps.
    let board = BoardBuilder::new()
        .piece(Square(3, 3), Color::Red, Piece::Man)
        .piece(Square(2, 2), Color::Black, Piece::Man)
        .build()
        .unwrap();

    let moves = board.legal_moves_for(Color::Red);
    assert!(moves.iter().all(|m| !m.is_capture()));
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_king_captures_backward() {
    let board = BoardBuilder::new()
        .piece(Square(3, 3), Color::Black, Piece::King)
        .piece(Square(2, 2), Color::Red, Piece::Man)
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    let moves = board.legal_moves_for(Color::Black);
    assert_eq!(
        moves,
        vec![Move::jump(
            vec![Square(3, 3), Square(1, 1)],
            vec![Square(2, 2)]
        )]
    );
}

#[test]
fn test_king_chain_blocked_by_revisited_square() {
    // Four black men around a circuit: the king may not land on its origin
    // square again, so both circular chains stop after three captures.
    let board = BoardBuilder::new()
        .piece(Square(2, 2), Color::Red, Piece::King)
        .piece(Square(3, 1), Color::Black, Piece::Man)
        .piece(Square(3, 3), Color::Black, Piece::Man)
        .piece(Square(5, 1), Color::Black, Piece::Man)
        .piece(Square(5, 3), Color::Black, Piece::Man)
        .build()
        .unwrap();

    let moves = board.legal_moves_for(Color::Red);
    assert_eq!(
        moves,
        vec![
            Move::jump(
                vec![Square(2, 2), Square(4, 0), Square(6, 2), Square(4, 4)],
                vec![Square(3, 1), Square(5, 1), Square(5, 3)]
            ),
            Move::jump(
                vec![Square(2, 2), Square(4, 4), Square(6, 2), Square(4, 0)],
                vec![Square(3, 3), Square(5, 3), Square(5, 1)]
            ),
        ]
    );
}

#[test]
fn test_chain_ends_on_promotion() {
    // The jump lands on rank 7, promoting the man; the chain stops even
    // though a king could continue over the second black man.
    let board = BoardBuilder::new()
        .piece(Square(5, 1), Color::Red, Piece::Man)
        .piece(Square(6, 2), Color::Black, Piece::Man)
        .piece(Square(6, 4), Color::Black, Piece::Man)
        .build()
        .unwrap();

    let moves = board.legal_moves_for(Color::Red);
    assert_eq!(
        moves,
        vec![Move::jump(
            vec![Square(5, 1), Square(7, 3)],
            vec![Square(6, 2)]
        )]
    );

    let next = board.apply(&moves[0]);
    assert_eq!(next.piece_at(Square(7, 3)), Some((Color::Red, Piece::King)));
    assert_eq!(next.piece_count(Color::Black), 1);
}

#[test]
fn test_trapped_side_has_no_moves() {
    // Black's only man is wedged against its promotion rank: both forward
    // steps are blocked and both jumps would land off the board.
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::Red, Piece::Man)
        .piece(Square(0, 2), Color::Red, Piece::Man)
        .piece(Square(1, 1), Color::Black, Piece::Man)
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    assert!(board.legal_moves_for(Color::Black).is_empty());
}

#[test]
fn test_legal_moves_deterministic() {
    let board = Board::new();
    assert_eq!(board.legal_moves(), board.legal_moves());
}

// ---------------------------------------------------------------------------
// Applying moves
// ---------------------------------------------------------------------------

#[test]
fn test_apply_step() {
    let board = Board::new();
    let mv = Move::step(Square(2, 2), Square(3, 3));
    let next = board.apply(&mv);

    assert_eq!(next.piece_at(Square(2, 2)), None);
    assert_eq!(next.piece_at(Square(3, 3)), Some((Color::Red, Piece::Man)));
    assert_eq!(next.side_to_move(), Color::Black);
    assert_eq!(next.hash(), next.calculate_hash());
    // The original board is untouched.
    assert_eq!(board.piece_at(Square(2, 2)), Some((Color::Red, Piece::Man)));
}

#[test]
fn test_apply_jump_removes_captures() {
    let board = BoardBuilder::new()
        .piece(Square(2, 2), Color::Red, Piece::Man)
        .piece(Square(3, 3), Color::Black, Piece::Man)
        .build()
        .unwrap();

    let moves = board.legal_moves();
    let next = board.apply(&moves[0]);
    assert_eq!(next.piece_count(Color::Black), 0);
    assert_eq!(next.piece_at(Square(4, 4)), Some((Color::Red, Piece::Man)));
    assert_eq!(next.hash(), next.calculate_hash());
}

#[test]
fn test_apply_step_promotion() {
    let board = BoardBuilder::new()
        .piece(Square(6, 2), Color::Red, Piece::Man)
        .build()
        .unwrap();

    let moves = board.legal_moves();
    assert_eq!(moves[0], Move::step(Square(6, 2), Square(7, 1)));
    let next = board.apply(&moves[0]);
    assert_eq!(next.piece_at(Square(7, 1)), Some((Color::Red, Piece::King)));
}

#[test]
fn test_side_to_move_distinguishes_positions() {
    let red = BoardBuilder::new()
        .piece(Square(2, 2), Color::Red, Piece::Man)
        .build()
        .unwrap();
    let black = BoardBuilder::new()
        .piece(Square(2, 2), Color::Red, Piece::Man)
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    assert_ne!(red, black);
    assert_ne!(red.hash(), black.hash());
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

#[test]
fn test_eval_starting_position_is_even() {
    let board = Board::new();
    assert_eq!(board.evaluate(Color::Red), 0);
    assert_eq!(board.evaluate(Color::Black), 0);
}

#[test]
fn test_eval_material_values() {
    let man = BoardBuilder::new()
        .piece(Square(2, 2), Color::Red, Piece::Man)
        .build()
        .unwrap();
    assert_eq!(man.evaluate(Color::Red), 100);
    assert_eq!(man.evaluate(Color::Black), -100);

    let king = BoardBuilder::new()
        .piece(Square(2, 2), Color::Red, Piece::King)
        .build()
        .unwrap();
    assert_eq!(king.evaluate(Color::Red), 200);
}

#[test]
fn test_eval_positional_bonuses() {
    let centered = BoardBuilder::new()
        .piece(Square(3, 3), Color::Red, Piece::Man)
        .build()
        .unwrap();
    assert_eq!(centered.evaluate(Color::Red), 150);

    let edged = BoardBuilder::new()
        .piece(Square(2, 0), Color::Red, Piece::Man)
        .build()
        .unwrap();
    assert_eq!(edged.evaluate(Color::Red), 115);
}

#[test]
fn test_eval_rotation_symmetry() {
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::Red, Piece::King)
        .piece(Square(2, 2), Color::Red, Piece::Man)
        .piece(Square(5, 1), Color::Black, Piece::Man)
        .piece(Square(7, 7), Color::Black, Piece::King)
        .build()
        .unwrap();

    let mirrored = rotate_and_swap(&board);
    assert_eq!(mirrored.evaluate(Color::Red), -board.evaluate(Color::Red));
    assert_eq!(mirrored.evaluate(Color::Black), -board.evaluate(Color::Black));
}

#[test]
fn test_heuristic_never_reaches_win_threshold() {
    // Twelve pieces with every bonus stays far below a terminal score.
    let bound = 12 * (200 + 50 + 15);
    assert!(bound < WIN_THRESHOLD);
}

/// Rotate the board 180 degrees and swap colors: the same game seen from
/// the other player's seat.
fn rotate_and_swap(board: &Board) -> Board {
    let mut builder = BoardBuilder::new().side_to_move(board.side_to_move().opponent());
    for rank in 0..8 {
        for file in 0..8 {
            if let Some((color, piece)) = board.piece_at(Square(rank, file)) {
                builder = builder.piece(
                    Square(7 - rank, 7 - file),
                    color.opponent(),
                    piece,
                );
            }
        }
    }
    builder.build().expect("rotation preserves validity")
}

// ---------------------------------------------------------------------------
// Serde round trips (feature-gated)
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_move_serde_round_trip() {
        let mv = Move::jump(
            vec![Square(2, 2), Square(4, 4)],
            vec![Square(3, 3)],
        );
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
    }

    #[test]
    fn test_piece_serde_round_trip() {
        let json = serde_json::to_string(&(Color::Red, Piece::King)).unwrap();
        let back: (Color, Piece) = serde_json::from_str(&json).unwrap();
        assert_eq!(back, (Color::Red, Piece::King));
    }
}
