use std::{fmt::Display, str::FromStr};

use enum_map::Enum;

/// Color of a stone, also used to identify the side to move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Enum)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    #[default]
    Black = 0,
    White = 1,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => f.write_str("B"),
            Color::White => f.write_str("W"),
        }
    }
}

impl FromStr for Color {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" | "b" => Ok(Self::Black),
            "white" | "w" => Ok(Self::White),
            _ => Err("expected black|white"),
        }
    }
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::White, Color::Black.opposite());
        assert_eq!(Color::Black, Color::White.opposite());
        assert_eq!(Color::Black, Color::Black.opposite().opposite());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Ok(Color::Black), "Black".parse::<Color>());
        assert_eq!(Ok(Color::White), "white".parse::<Color>());
        assert!("unknown".parse::<Color>().is_err());
    }
}
