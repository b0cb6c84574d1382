use crate::model::seat::Seat;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

/// The three contract families. Each variant carries exactly the payload its
/// rules need, so "suit missing" or "called ace missing" states cannot be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractKind {
    /// Calling game: the declarer recruits whoever holds the called Ace.
    Rufer { called_ace: Suit },
    /// Only Unters are trump; a chosen suit joins them in the suited variant.
    Wenz { trump_suit: Option<Suit> },
    /// The declarer names the trump suit outright.
    Solo { trump_suit: Suit },
}

impl ContractKind {
    /// A Solo announced without a suit plays Hearts.
    pub fn solo(trump_suit: Option<Suit>) -> Self {
        ContractKind::Solo {
            trump_suit: trump_suit.unwrap_or(Suit::Hearts),
        }
    }

    /// Auction priority. Strictly higher ranks may overbid; equal ranks never
    /// can, so all four Solo suits compete as peers.
    pub const fn bid_rank(self) -> u8 {
        match self {
            ContractKind::Rufer { .. } => 1,
            ContractKind::Wenz { trump_suit: None } => 2,
            ContractKind::Wenz { trump_suit: Some(_) } => 3,
            ContractKind::Solo { .. } => 4,
        }
    }

    /// Base game value before schneider/schwarz doubling.
    pub const fn base_value(self) -> i32 {
        match self {
            ContractKind::Rufer { .. } => 1,
            ContractKind::Wenz { .. } => 2,
            ContractKind::Solo { .. } => 3,
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractKind::Rufer { called_ace } => write!(f, "Rufer calling the {called_ace} Ace"),
            ContractKind::Wenz { trump_suit: None } => f.write_str("Wenz"),
            ContractKind::Wenz {
                trump_suit: Some(suit),
            } => write!(f, "Suited Wenz in {suit}"),
            ContractKind::Solo { trump_suit } => write!(f, "{trump_suit} Solo"),
        }
    }
}

/// A candidate contract offered during the auction. Bids are compared only by
/// rank; the payload becomes meaningful once the bid wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub bidder: Seat,
    pub kind: ContractKind,
}

impl Bid {
    pub const fn new(bidder: Seat, kind: ContractKind) -> Self {
        Self { bidder, kind }
    }

    pub const fn rank(self) -> u8 {
        self.kind.bid_rank()
    }
}

/// The installed contract for a round. Exactly one exists once bidding closes
/// with a winning bid. `partner` is the seat holding the called Ace for a
/// Rufer and `None` for the solo-type contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub declarer: Seat,
    pub kind: ContractKind,
    pub partner: Option<Seat>,
}

impl Contract {
    pub const fn new(declarer: Seat, kind: ContractKind, partner: Option<Seat>) -> Self {
        Self {
            declarer,
            kind,
            partner,
        }
    }

    pub fn is_declarer_team(&self, seat: Seat) -> bool {
        seat == self.declarer || self.partner == Some(seat)
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} declared by {}", self.kind, self.declarer)
    }
}
