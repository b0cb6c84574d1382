use crate::model::card::Card;
use crate::model::contract::ContractKind;
use crate::model::hand::Hand;
use crate::model::suit::Suit;
use thiserror::Error;

/// Why a play is illegal. Messages cite the qualifying-card counts so the
/// hosting layer can show them to the player verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayViolation {
    #[error("the {card} is not in your hand")]
    CardNotInHand { card: Card },
    #[error("trump was led; you must play one of your {held} trump cards")]
    MustFollowTrump { held: usize },
    #[error("{suit} was led; you must play one of your {held} {suit} cards")]
    MustFollowSuit { suit: Suit, held: usize },
}

/// Every card the hand may legally play against the led card.
///
/// Leading allows the whole hand. A trump lead must be answered with a trump
/// when any is held; a plain lead must be answered with a non-trump card of
/// the led suit when any is held (a trump of that suit does not follow).
/// A void hand may play anything, trumps included.
pub fn valid_plays(hand: &Hand, led: Option<Card>, contract: &ContractKind) -> Vec<Card> {
    let Some(led) = led else {
        return hand.cards().to_vec();
    };

    let follows: Vec<Card> = if led.is_trump(contract) {
        hand.iter()
            .copied()
            .filter(|c| c.is_trump(contract))
            .collect()
    } else {
        hand.iter()
            .copied()
            .filter(|c| !c.is_trump(contract) && c.suit == led.suit)
            .collect()
    };

    if follows.is_empty() {
        hand.cards().to_vec()
    } else {
        follows
    }
}

/// Validates one candidate play, reporting the first rule it breaks.
pub fn check_play(
    hand: &Hand,
    card: Card,
    led: Option<Card>,
    contract: &ContractKind,
) -> Result<(), PlayViolation> {
    if !hand.contains(card) {
        return Err(PlayViolation::CardNotInHand { card });
    }

    let Some(led) = led else {
        return Ok(());
    };

    if led.is_trump(contract) {
        if card.is_trump(contract) {
            return Ok(());
        }
        let held = hand.iter().filter(|c| c.is_trump(contract)).count();
        if held > 0 {
            return Err(PlayViolation::MustFollowTrump { held });
        }
    } else {
        if !card.is_trump(contract) && card.suit == led.suit {
            return Ok(());
        }
        let held = hand
            .iter()
            .filter(|c| !c.is_trump(contract) && c.suit == led.suit)
            .count();
        if held > 0 {
            return Err(PlayViolation::MustFollowSuit {
                suit: led.suit,
                held,
            });
        }
    }

    Ok(())
}

pub fn is_valid_play(
    hand: &Hand,
    card: Card,
    led: Option<Card>,
    contract: &ContractKind,
) -> bool {
    check_play(hand, card, led, contract).is_ok()
}
