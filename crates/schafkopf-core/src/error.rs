use crate::model::bidding::BidRejection;
use crate::model::rules::PlayViolation;
use crate::model::seat::Seat;
use thiserror::Error;

/// Recoverable rejections surfaced to the hosting layer. Every variant's
/// display text is written for direct display to the acting player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("it is {expected}'s turn, not {actual}'s")]
    InvalidTurn { expected: Seat, actual: Seat },

    #[error("invalid bid: {0}")]
    InvalidBid(#[from] BidRejection),

    #[error("invalid play: {0}")]
    InvalidPlay(#[from] PlayViolation),

    #[error("cannot {action} while {state}")]
    InvalidPhase {
        action: &'static str,
        state: &'static str,
    },

    #[error("dealing requires an untouched 32-card deck, found {cards} cards")]
    DeckInvariantViolation { cards: usize },
}
