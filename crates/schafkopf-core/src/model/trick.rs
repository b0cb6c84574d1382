use crate::model::card::Card;
use crate::model::contract::ContractKind;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use core::cmp::Ordering;
use thiserror::Error;

/// One trick in progress: the leader plus up to four in-order plays.
#[derive(Debug, Clone)]
pub struct Trick {
    leader: Seat,
    plays: Vec<Play>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrickError {
    #[error("the trick already holds four cards")]
    TrickComplete,
    #[error("expected {expected} to play next but got {actual}")]
    OutOfTurn { expected: Seat, actual: Seat },
    #[error("{0} has already played this trick")]
    AlreadyPlayed(Seat),
}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(4),
        }
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn cards(&self) -> Vec<Card> {
        self.plays.iter().map(|play| play.card).collect()
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }

    pub fn led_card(&self) -> Option<Card> {
        self.plays.first().map(|play| play.card)
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.led_card().map(|card| card.suit)
    }

    pub fn play(&mut self, seat: Seat, card: Card) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::TrickComplete);
        }

        if self.plays.iter().any(|play| play.seat == seat) {
            return Err(TrickError::AlreadyPlayed(seat));
        }

        let expected = self.expected_seat();
        if expected != seat {
            return Err(TrickError::OutOfTurn {
                expected,
                actual: seat,
            });
        }

        self.plays.push(Play { seat, card });
        Ok(())
    }

    /// Folds the contract comparison over the plays, starting from the led
    /// card. Pure: the same trick and contract always yield the same seat.
    pub fn winner(&self, contract: &ContractKind) -> Option<Seat> {
        if !self.is_complete() {
            return None;
        }
        let lead_suit = self.lead_suit()?;
        let mut best = &self.plays[0];
        for play in &self.plays[1..] {
            if play.card.compare_in_trick(best.card, lead_suit, contract) == Ordering::Greater {
                best = play;
            }
        }
        Some(best.seat)
    }

    /// Card points carried by this trick.
    pub fn points(&self) -> u32 {
        self.plays.iter().map(|play| play.card.points()).sum()
    }

    fn expected_seat(&self) -> Seat {
        self.plays
            .last()
            .map(|play| play.seat.next())
            .unwrap_or(self.leader)
    }
}

#[cfg(test)]
mod tests {
    use super::{Trick, TrickError};
    use crate::model::card::Card;
    use crate::model::contract::ContractKind;
    use crate::model::rank::Rank;
    use crate::model::seat::Seat;
    use crate::model::suit::Suit;

    const RUFER: ContractKind = ContractKind::Rufer {
        called_ace: Suit::Bells,
    };
    const WENZ: ContractKind = ContractKind::Wenz { trump_suit: None };

    fn complete_trick(leader: Seat, cards: [Card; 4]) -> Trick {
        let mut trick = Trick::new(leader);
        let mut seat = leader;
        for card in cards {
            trick.play(seat, card).unwrap();
            seat = seat.next();
        }
        trick
    }

    #[test]
    fn plays_follow_turn_order() {
        let mut trick = Trick::new(Seat::North);
        trick
            .play(Seat::North, Card::new(Suit::Acorns, Rank::Nine))
            .unwrap();
        assert!(matches!(
            trick.play(Seat::South, Card::new(Suit::Acorns, Rank::Ten)),
            Err(TrickError::OutOfTurn { .. })
        ));
    }

    #[test]
    fn incomplete_trick_has_no_winner() {
        let mut trick = Trick::new(Seat::North);
        trick
            .play(Seat::North, Card::new(Suit::Acorns, Rank::Nine))
            .unwrap();
        assert_eq!(trick.winner(&RUFER), None);
    }

    #[test]
    fn highest_led_suit_card_wins_without_trumps() {
        let trick = complete_trick(
            Seat::East,
            [
                Card::new(Suit::Acorns, Rank::Nine),
                Card::new(Suit::Acorns, Rank::Ace),
                Card::new(Suit::Acorns, Rank::Ten),
                Card::new(Suit::Bells, Rank::Ace),
            ],
        );
        assert_eq!(trick.winner(&WENZ), Some(Seat::South));
    }

    #[test]
    fn any_trump_beats_the_led_suit() {
        let trick = complete_trick(
            Seat::North,
            [
                Card::new(Suit::Acorns, Rank::Ace),
                Card::new(Suit::Acorns, Rank::Ten),
                Card::new(Suit::Hearts, Rank::Seven),
                Card::new(Suit::Acorns, Rank::King),
            ],
        );
        // Hearts are trump in a Rufer, so the Seven of Hearts takes it.
        assert_eq!(trick.winner(&RUFER), Some(Seat::South));
    }

    #[test]
    fn later_higher_trump_overtakes_earlier_trump() {
        let trick = complete_trick(
            Seat::West,
            [
                Card::new(Suit::Hearts, Rank::Ten),
                Card::new(Suit::Leaves, Rank::Unter),
                Card::new(Suit::Acorns, Rank::Ober),
                Card::new(Suit::Hearts, Rank::Ace),
            ],
        );
        // West leads a plain trump, North's Unter beats it, East's Ober
        // beats the Unter, South's plain Ace cannot take it back.
        assert_eq!(trick.winner(&RUFER), Some(Seat::East));
    }

    #[test]
    fn winner_is_stable_across_re_evaluation() {
        let trick = complete_trick(
            Seat::North,
            [
                Card::new(Suit::Leaves, Rank::King),
                Card::new(Suit::Leaves, Rank::Ace),
                Card::new(Suit::Bells, Rank::Seven),
                Card::new(Suit::Leaves, Rank::Ten),
            ],
        );
        let first = trick.winner(&WENZ);
        for _ in 0..3 {
            assert_eq!(trick.winner(&WENZ), first);
        }
        assert_eq!(first, Some(Seat::East));
    }

    #[test]
    fn points_sum_the_played_cards() {
        let trick = complete_trick(
            Seat::North,
            [
                Card::new(Suit::Leaves, Rank::Ace),
                Card::new(Suit::Leaves, Rank::Ten),
                Card::new(Suit::Leaves, Rank::King),
                Card::new(Suit::Leaves, Rank::Seven),
            ],
        );
        assert_eq!(trick.points(), 25);
    }
}
