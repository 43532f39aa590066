//! Bit-set helpers for boards of at most 128 cells.
//!
//! Cells are numbered row-major: `cell = row * size + col`, and cell `i` is
//! bit `i` of a `u128`.

pub type Bits = u128;

#[inline]
pub const fn bit(cell: u8) -> Bits {
    1u128 << cell
}

/// Precomputed masks for one board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub size: u8,
    pub full: Bits,
    not_first_col: Bits,
    not_last_col: Bits,
}

impl Geometry {
    pub fn new(size: u8) -> Self {
        let s = size as u32;
        let (mut first_col, mut last_col) = (0u128, 0u128);
        for row in 0..s {
            first_col |= 1u128 << (row * s);
            last_col |= 1u128 << (row * s + s - 1);
        }
        let full = (1u128 << (s * s)) - 1;
        Self {
            size,
            full,
            not_first_col: full & !first_col,
            not_last_col: full & !last_col,
        }
    }

    /// Cells orthogonally adjacent to any cell of `set`, excluding wrap-around.
    #[inline]
    pub fn neighbors(&self, set: Bits) -> Bits {
        let s = self.size as u32;
        let east = (set & self.not_last_col) << 1;
        let west = (set & self.not_first_col) >> 1;
        let south = set << s;
        let north = set >> s;
        (east | west | south | north) & self.full
    }

    /// Connected component of `seed` inside `within`.
    #[inline]
    pub fn flood(&self, seed: Bits, within: Bits) -> Bits {
        let mut group = seed & within;
        loop {
            let next = (group | self.neighbors(group)) & within;
            if next == group {
                return group;
            }
            group = next;
        }
    }
}
