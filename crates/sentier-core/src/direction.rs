use std::fmt;

/// One of the six directions an exit can point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// North (`N`).
    North,
    /// East (`E`).
    East,
    /// South (`S`).
    South,
    /// West (`O`, for *ouest*).
    West,
    /// Up (`U`).
    Up,
    /// Down (`D`).
    Down,
}

impl Direction {
    /// Every direction, in canonical order.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Parse a direction token.
    ///
    /// Case-insensitive. Accepts the single-letter codes, the English words,
    /// and the French words.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" | "nord" => Some(Self::North),
            "e" | "east" | "est" => Some(Self::East),
            "s" | "south" | "sud" => Some(Self::South),
            "o" | "w" | "west" | "ouest" => Some(Self::West),
            "u" | "up" | "haut" | "monter" => Some(Self::Up),
            "d" | "down" | "bas" | "descendre" => Some(Self::Down),
            _ => None,
        }
    }

    /// The canonical one-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "O",
            Self::Up => "U",
            Self::Down => "D",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
            Self::Up => 4,
            Self::Down => 5,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
