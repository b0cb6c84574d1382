use crate::model::contract::ContractKind;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn points(self) -> u32 {
        self.rank.points()
    }

    /// Whether this card is trump under the given contract.
    ///
    /// Rufer: every Ober and Unter, plus every Hearts card. Wenz: every
    /// Unter, plus every card of the chosen suit in the suited variant.
    /// Solo: every Ober and Unter, plus every card of the chosen suit.
    pub fn is_trump(self, contract: &ContractKind) -> bool {
        match contract {
            ContractKind::Rufer { .. } => {
                matches!(self.rank, Rank::Ober | Rank::Unter) || self.suit.is_hearts()
            }
            ContractKind::Wenz { trump_suit } => {
                self.rank == Rank::Unter || *trump_suit == Some(self.suit)
            }
            ContractKind::Solo { trump_suit } => {
                matches!(self.rank, Rank::Ober | Rank::Unter) || self.suit == *trump_suit
            }
        }
    }

    /// Orders this card against another one played in the same trick.
    ///
    /// Any trump beats any non-trump; trumps order by tier (Obers, then
    /// Unters, then plain trumps), with Acorns > Leaves > Hearts > Bells
    /// inside the Ober and Unter tiers; non-trumps of the led suit order by
    /// plain rank, and a led-suit card beats an off-suit discard.
    ///
    /// # Panics
    ///
    /// Two off-suit non-trumps have no defined order. Valid trick evaluation
    /// never pairs them; asking for that comparison is a caller defect.
    pub fn compare_in_trick(
        self,
        other: Card,
        led_suit: Suit,
        contract: &ContractKind,
    ) -> Ordering {
        match (self.is_trump(contract), other.is_trump(contract)) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => self.compare_trumps(other, contract),
            (false, false) => match (self.suit == led_suit, other.suit == led_suit) {
                (true, true) => self.rank.cmp(&other.rank),
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => panic!(
                    "cannot order {self} against {other}: neither is trump or follows {led_suit}"
                ),
            },
        }
    }

    /// 2 = Ober tier, 1 = Unter tier, 0 = plain trump. In Wenz contracts no
    /// card occupies the Ober tier; a suited-Wenz trump-suit Ober is a plain
    /// trump that slots in after the King.
    fn trump_tier(self, contract: &ContractKind) -> u8 {
        match (contract, self.rank) {
            (ContractKind::Wenz { .. }, Rank::Unter) => 1,
            (ContractKind::Wenz { .. }, _) => 0,
            (_, Rank::Ober) => 2,
            (_, Rank::Unter) => 1,
            _ => 0,
        }
    }

    fn compare_trumps(self, other: Card, contract: &ContractKind) -> Ordering {
        let tier = self.trump_tier(contract);
        match tier.cmp(&other.trump_tier(contract)) {
            Ordering::Equal if tier > 0 => self
                .suit
                .trump_strength()
                .cmp(&other.suit.trump_strength()),
            Ordering::Equal => self.rank.cmp(&other.rank),
            ordering => ordering,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
