use std::fmt::Display;

use smallvec::SmallVec;

use crate::{
    board::{Board, PlaceError},
    types::color::Color,
};

/// Candidate or legal move list, inline up to the largest supported board.
pub type ActionList<A> = SmallVec<[A; 128]>;

/// Placement of one stone of color `who` at `cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub cell: u8,
    pub who: Color,
}

impl Place {
    #[inline]
    pub const fn new(cell: u8, who: Color) -> Self {
        Self { cell, who }
    }

    /// Applies this move to `board`. The board is modified only if the move is legal.
    #[inline]
    pub fn apply(self, board: &mut Board) -> Result<(), PlaceError> {
        board.place(self.cell, self.who)
    }

    /// One candidate per cell of `board`, all tagged with `who`.
    /// Candidates are not filtered for legality.
    pub fn space(board: &Board, who: Color) -> ActionList<Place> {
        (0..board.cell_count()).map(|cell| Place::new(cell, who)).collect()
    }

    /// Human readable form relative to a board size, such as `B@C3`.
    pub fn describe(self, size: u8) -> String {
        let (col, row) = (self.cell % size, self.cell / size);
        format!("{}@{}{}", self.who, (b'A' + col) as char, row + 1)
    }
}

impl Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.who, self.cell)
    }
}
