use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Acorns = 0,
    Leaves = 1,
    Hearts = 2,
    Bells = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Acorns, Suit::Leaves, Suit::Hearts, Suit::Bells];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Acorns),
            1 => Some(Suit::Leaves),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Bells),
            _ => None,
        }
    }

    /// Precedence among Obers (and among Unters): Acorns > Leaves > Hearts > Bells.
    pub const fn trump_strength(self) -> u8 {
        match self {
            Suit::Acorns => 3,
            Suit::Leaves => 2,
            Suit::Hearts => 1,
            Suit::Bells => 0,
        }
    }

    pub const fn is_hearts(self) -> bool {
        matches!(self, Suit::Hearts)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Suit::Acorns => "Acorns",
            Suit::Leaves => "Leaves",
            Suit::Hearts => "Hearts",
            Suit::Bells => "Bells",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
