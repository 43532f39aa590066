use std::fmt::Display;

use crate::types::{by_color::ByColor, color::Color};

pub mod bitboard;
use bitboard::{bit, Bits, Geometry};

pub const MIN_SIZE: u8 = 2;
pub const MAX_SIZE: u8 = 11;
pub const STANDARD_SIZE: u8 = 9;

/// Indicates a board could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("unsupported board size {0}, expected {min}..={max}", min = MIN_SIZE, max = MAX_SIZE)]
    UnsupportedSize(usize),
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("invalid cell character {0:?}")]
    InvalidCell(char),
}

/// Indicates a placement is illegal. The board is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("cell {0} is outside the board")]
    OutOfBounds(u8),
    #[error("cell {0} is occupied")]
    Occupied(u8),
    #[error("placing at cell {0} leaves its own group without liberties")]
    Suicide(u8),
    #[error("placing at cell {0} captures an opponent group")]
    Capture(u8),
}

/// Square NoGo board. Placing a stone is legal when the cell is empty and
/// neither the placed stone's group nor any adjacent opponent group ends up
/// without liberties.
///
/// The board does not track whose turn it is: the caller decides the color
/// of every placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    geometry: Geometry,
    stones: ByColor<Bits>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn new(size: u8) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::UnsupportedSize(size as usize));
        }
        Ok(Self::empty(size))
    }

    /// Empty 9x9 board.
    pub fn standard() -> Self {
        Self::empty(STANDARD_SIZE)
    }

    fn empty(size: u8) -> Self {
        Self {
            geometry: Geometry::new(size),
            stones: Default::default(),
        }
    }

    /// Parses a position, one string per row. `X`/`B` is black, `O`/`W` is
    /// white, `.`/`+` is empty and spaces are ignored. The position is taken
    /// as given, groups without liberties are not rejected.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let size = rows.len();
        if !(MIN_SIZE as usize..=MAX_SIZE as usize).contains(&size) {
            return Err(BoardError::UnsupportedSize(size));
        }
        let mut board = Self::empty(size as u8);
        for (row, line) in rows.iter().enumerate() {
            let cells = line
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    'X' | 'x' | 'B' | 'b' => Ok(Some(Color::Black)),
                    'O' | 'o' | 'W' | 'w' => Ok(Some(Color::White)),
                    '.' | '+' => Ok(None),
                    c => Err(BoardError::InvalidCell(c)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            if cells.len() != size {
                return Err(BoardError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
            for (col, cell) in cells.into_iter().enumerate() {
                if let Some(color) = cell {
                    board.stones[color] |= bit((row * size + col) as u8);
                }
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.geometry.size
    }

    #[inline]
    pub fn cell_count(&self) -> u8 {
        self.size() * self.size()
    }

    #[inline]
    pub fn cell_at(&self, col: u8, row: u8) -> u8 {
        row * self.size() + col
    }

    /// `(col, row)` of a cell.
    #[inline]
    pub fn coordinate(&self, cell: u8) -> (u8, u8) {
        (cell % self.size(), cell / self.size())
    }

    #[inline]
    fn occupied(&self) -> Bits {
        self.stones.black | self.stones.white
    }

    pub fn get(&self, cell: u8) -> Option<Color> {
        let b = bit(cell);
        Color::ALL.into_iter().find(|&color| self.stones[color] & b != 0)
    }

    pub fn stone_count(&self) -> u32 {
        self.occupied().count_ones()
    }

    /// Number of liberties of the group containing `cell`, `None` if the cell is empty.
    pub fn liberties(&self, cell: u8) -> Option<u32> {
        let color = self.get(cell)?;
        let g = &self.geometry;
        let group = g.flood(bit(cell), self.stones[color]);
        Some((g.neighbors(group) & !self.occupied()).count_ones())
    }

    /// Places a stone of `who` at `cell`, or reports why it is illegal.
    pub fn place(&mut self, cell: u8, who: Color) -> Result<(), PlaceError> {
        if cell >= self.cell_count() {
            return Err(PlaceError::OutOfBounds(cell));
        }
        let b = bit(cell);
        if self.occupied() & b != 0 {
            return Err(PlaceError::Occupied(cell));
        }

        let g = &self.geometry;
        let own = self.stones[who] | b;
        let opp = self.stones[who.opposite()];
        let empty = g.full & !(own | opp);

        let group = g.flood(b, own);
        if g.neighbors(group) & empty == 0 {
            return Err(PlaceError::Suicide(cell));
        }

        let mut adjacent = g.neighbors(b) & opp;
        while adjacent != 0 {
            let seed = adjacent & adjacent.wrapping_neg();
            let opp_group = g.flood(seed, opp);
            if g.neighbors(opp_group) & empty == 0 {
                return Err(PlaceError::Capture(cell));
            }
            adjacent &= !opp_group;
        }

        self.stones[who] = own;
        Ok(())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        write!(f, "  ")?;
        for col in 0..size {
            write!(f, " {}", (b'A' + col) as char)?;
        }
        writeln!(f)?;
        for row in 0..size {
            write!(f, "{:2}", row + 1)?;
            for col in 0..size {
                let c = match self.get(self.cell_at(col, row)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
