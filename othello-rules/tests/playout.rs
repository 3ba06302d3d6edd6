//! Seeded random games, checking the board's invariants after every ply.

use othello_rules::{Board, BoardError, Color, Position, NUM_SPACES};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const GAMES: u64 = 100;

/// Play one random game to the end and return the final board.
fn random_playout<R: Rng>(rng: &mut R) -> Board {
    let mut board = Board::new();
    let mut color = Color::default();
    let mut passed = false;

    loop {
        let moves = board.valid_moves(color);
        assert_eq!(board.has_move(color), !moves.is_empty());
        assert!(moves.windows(2).all(|pair| pair[0] < pair[1]));

        let mv = match moves.choose(rng) {
            Some(&mv) => mv,
            None if passed => break,
            None => {
                passed = true;
                color = !color;
                continue;
            }
        };
        passed = false;

        check_rejected_moves(&mut board, color, rng);

        let mine = board.count(color);
        let theirs = board.count(!color);
        let flipped = board.place_piece(mv, color).unwrap();

        assert!(!flipped.is_empty());
        assert!(flipped.iter().all(|&pos| board.is_mine(pos, color)));
        assert_eq!(board.count(color), mine + flipped.len() + 1);
        assert_eq!(board.count(!color), theirs - flipped.len());

        let both_stuck = !board.has_move(Color::Black) && !board.has_move(Color::White);
        assert_eq!(board.is_over(), both_stuck);

        color = !color;
    }

    board
}

/// Random illegal moves must be refused without touching the board.
fn check_rejected_moves<R: Rng>(board: &mut Board, color: Color, rng: &mut R) {
    let before = *board;
    for _ in 0..4 {
        let pos = Position::new(rng.gen_range(-1..9), rng.gen_range(-1..9));
        if board.valid_move(pos, color) {
            continue;
        }

        let expected = if board.is_valid_pos(pos) {
            BoardError::InvalidMove { pos, color }
        } else {
            BoardError::PositionOutOfBounds { pos }
        };
        assert_eq!(board.place_piece(pos, color), Err(expected));
        assert_eq!(*board, before);
    }
}

#[test]
fn random_games_keep_invariants() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = random_playout(&mut rng);

        assert!(board.is_over());
        let black = board.count(Color::Black);
        let white = board.count(Color::White);
        assert_eq!(black + white + board.count_empty(), NUM_SPACES);

        let expected_winner = if black > white {
            Some(Color::Black)
        } else if white > black {
            Some(Color::White)
        } else {
            None
        };
        assert_eq!(board.winner(), expected_winner);
    }
}
