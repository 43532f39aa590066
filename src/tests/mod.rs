use crate::prelude::*;

pub mod board_rules;


pub mod prop_tests;

fn board(rows: &[&str]) -> Board {
    Board::from_rows(rows).expect("valid test position")
}

fn legal_cells(board: &Board, who: Color) -> Vec<u8> {
    board
        .legal_actions(&board.action_space(who))
        .into_iter()
        .map(|a| a.cell)
        .collect()
}
