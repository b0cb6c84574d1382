use core::fmt;
use serde::{Deserialize, Serialize};

/// Discriminants encode the plain (non-trump) trick order, so the derived
/// `Ord` is exactly Ace > Ten > King > Ober > Unter > Nine > Eight > Seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Seven = 0,
    Eight = 1,
    Nine = 2,
    Unter = 3,
    Ober = 4,
    King = 5,
    Ten = 6,
    Ace = 7,
}

impl Rank {
    pub const ORDERED: [Rank; 8] = [
        Rank::Ace,
        Rank::King,
        Rank::Ober,
        Rank::Unter,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
    ];

    /// Card points counted toward the 120-point round total.
    pub const fn points(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Ten => 10,
            Rank::King => 4,
            Rank::Ober => 3,
            Rank::Unter => 2,
            Rank::Nine | Rank::Eight | Rank::Seven => 0,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Unter => "U",
            Rank::Ober => "O",
            Rank::King => "K",
            Rank::Ten => "10",
            Rank::Ace => "A",
        };
        f.write_str(text)
    }
}
