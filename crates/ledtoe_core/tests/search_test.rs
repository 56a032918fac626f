//! Search engine behaviour: determinism, optimality and never losing.

use std::collections::HashMap;

use ledtoe_core::search::{ALPHA_FLOOR, BETA_CEILING, maximize, minimize};
use ledtoe_core::{Board, Mark, Position, best_move, is_terminal, score, turn_of};

fn at(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

/// Plain minimax without pruning, memoized by board.
fn exact_value(board: Board, memo: &mut HashMap<Board, i32>) -> i32 {
    if let Some(value) = memo.get(&board) {
        return *value;
    }
    let value = if is_terminal(&board) {
        score(&board)
    } else {
        let mover = turn_of(&board);
        let children: Vec<Board> = board
            .empty_cells()
            .map(|pos| {
                let mut next = board;
                next.place(pos, mover).unwrap();
                next
            })
            .collect();
        let values = children.into_iter().map(|child| exact_value(child, memo));
        match mover {
            Mark::X => values.max().unwrap_or(0),
            Mark::O => values.min().unwrap_or(0),
        }
    };
    memo.insert(board, value);
    value
}

fn play(board: &mut Board, pos: Position) {
    let mover = turn_of(board);
    board.place(pos, mover).unwrap();
}

/// Engine plays `engine`; the opponent tries every legal reply. Returns final scores.
fn engine_against_everything(board: Board, engine: Mark, outcomes: &mut Vec<i32>) {
    if is_terminal(&board) {
        outcomes.push(score(&board));
        return;
    }
    if turn_of(&board) == engine {
        let mut next = board;
        play(&mut next, best_move(&board).expect("engine must move"));
        engine_against_everything(next, engine, outcomes);
    } else {
        for pos in board.empty_cells().collect::<Vec<_>>() {
            let mut next = board;
            play(&mut next, pos);
            engine_against_everything(next, engine, outcomes);
        }
    }
}

#[test]
fn test_empty_board_move_is_deterministic() {
    let first = best_move(&Board::new());
    assert_eq!(first, Some(at(0, 0)));
    for _ in 0..3 {
        assert_eq!(best_move(&Board::new()), first);
    }
}

#[test]
fn test_self_play_draws() {
    let mut board = Board::new();
    while !is_terminal(&board) {
        let pos = best_move(&board).expect("non-terminal board has a move");
        play(&mut board, pos);
    }
    assert_eq!(score(&board), 0, "self-play ended\n{}", board.display());
}

#[test]
fn test_engine_as_x_never_loses() {
    let mut outcomes = Vec::new();
    engine_against_everything(Board::new(), Mark::X, &mut outcomes);
    assert!(!outcomes.is_empty());
    assert!(outcomes.iter().all(|s| *s != -10));
}

#[test]
fn test_engine_as_o_never_loses() {
    let mut outcomes = Vec::new();
    engine_against_everything(Board::new(), Mark::O, &mut outcomes);
    assert!(!outcomes.is_empty());
    assert!(outcomes.iter().all(|s| *s != 10));
}

#[test]
fn test_chosen_move_is_optimal_from_the_opening() {
    let mut memo = HashMap::new();
    let root = Board::new();
    let mut boards = vec![root];
    // Every position after one or two plies.
    for pos in Position::ALL {
        let mut one = root;
        play(&mut one, pos);
        boards.push(one);
        for reply in one.empty_cells().collect::<Vec<_>>() {
            let mut two = one;
            play(&mut two, reply);
            boards.push(two);
        }
    }
    for board in boards {
        let expected = exact_value(board, &mut memo);
        let chosen = best_move(&board).unwrap();
        let mut after = board;
        play(&mut after, chosen);
        assert_eq!(
            exact_value(after, &mut memo),
            expected,
            "suboptimal {chosen} on\n{}",
            board.display()
        );
    }
}

#[test]
fn test_full_window_root_value_is_exact() {
    let mut memo = HashMap::new();
    let board = Board::from_rows(["X--", "-O-", "---"]);
    let expected = exact_value(board, &mut memo);
    let result = maximize(&board, ALPHA_FLOOR, BETA_CEILING);
    assert_eq!(result.score, expected);

    let board = Board::from_rows(["X--", "---", "---"]);
    let result = minimize(&board, ALPHA_FLOOR, BETA_CEILING);
    assert_eq!(result.score, exact_value(board, &mut memo));
}

#[test]
fn test_engine_opens_then_human_center() {
    let mut board = Board::new();
    let opening = best_move(&board).unwrap();
    assert_eq!(opening, at(0, 0));
    play(&mut board, opening);
    play(&mut board, at(1, 1));
    assert_eq!(turn_of(&board), Mark::X);
    assert!(!is_terminal(&board));
}
