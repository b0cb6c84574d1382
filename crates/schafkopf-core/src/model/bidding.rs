use crate::error::GameError;
use crate::model::card::Card;
use crate::model::contract::{Bid, ContractKind};
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a structurally well-formed bid is still not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BidRejection {
    #[error("the {0} Ace is in your own hand; a Rufer must call an Ace you do not hold")]
    CalledAceInHand(Suit),
    #[error("{offered} does not outrank the standing bid of {standing}")]
    InsufficientRank {
        offered: ContractKind,
        standing: ContractKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionPhase {
    Open,
    ClosedWithContract,
    ClosedNeedsReshuffle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOutcome {
    Accepted { next_bidder: Seat },
    Closed { winning_bid: Bid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    Passed { next_bidder: Seat },
    Closed { winning_bid: Bid },
    /// Every seat passed without a bid; the round needs a reshuffle before
    /// the auction can reopen. The deck reset itself is the caller's job.
    AllPassed,
}

/// The strict-turn auction. One pass around the table, every seat bids or
/// passes exactly once; a bid must strictly outrank the standing one, so the
/// first bidder keeps priority on ties.
#[derive(Debug, Clone)]
pub struct BiddingState {
    phase: AuctionPhase,
    initial_bidder: Seat,
    current_bidder: Seat,
    highest_bid: Option<Bid>,
    consecutive_passes: u8,
    decisions: u8,
}

impl BiddingState {
    pub fn new(initial_bidder: Seat) -> Self {
        Self {
            phase: AuctionPhase::Open,
            initial_bidder,
            current_bidder: initial_bidder,
            highest_bid: None,
            consecutive_passes: 0,
            decisions: 0,
        }
    }

    pub fn phase(&self) -> AuctionPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == AuctionPhase::Open
    }

    pub fn initial_bidder(&self) -> Seat {
        self.initial_bidder
    }

    pub fn current_bidder(&self) -> Seat {
        self.current_bidder
    }

    pub fn highest_bid(&self) -> Option<Bid> {
        self.highest_bid
    }

    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    pub fn decisions_made(&self) -> u8 {
        self.decisions
    }

    /// Offers a contract for `seat`. The bidder's hand backs the Rufer
    /// called-Ace check.
    pub fn make_bid(
        &mut self,
        seat: Seat,
        kind: ContractKind,
        hand: &Hand,
    ) -> Result<BidOutcome, GameError> {
        self.check_open_and_turn(seat, "bid")?;

        if let ContractKind::Rufer { called_ace } = kind {
            if hand.contains(Card::new(called_ace, Rank::Ace)) {
                return Err(BidRejection::CalledAceInHand(called_ace).into());
            }
        }

        if let Some(standing) = self.highest_bid {
            if kind.bid_rank() <= standing.rank() {
                return Err(BidRejection::InsufficientRank {
                    offered: kind,
                    standing: standing.kind,
                }
                .into());
            }
        }

        self.highest_bid = Some(Bid::new(seat, kind));
        self.consecutive_passes = 0;
        self.decisions += 1;
        self.current_bidder = self.current_bidder.next();

        if self.decisions >= 4 {
            return Ok(BidOutcome::Closed {
                winning_bid: self.close_with_contract(),
            });
        }
        Ok(BidOutcome::Accepted {
            next_bidder: self.current_bidder,
        })
    }

    pub fn pass_bid(&mut self, seat: Seat) -> Result<PassOutcome, GameError> {
        self.check_open_and_turn(seat, "pass")?;

        self.consecutive_passes += 1;
        self.decisions += 1;
        self.current_bidder = self.current_bidder.next();

        if self.highest_bid.is_some() && (self.consecutive_passes >= 3 || self.decisions >= 4) {
            return Ok(PassOutcome::Closed {
                winning_bid: self.close_with_contract(),
            });
        }

        if self.decisions >= 4 {
            self.phase = AuctionPhase::ClosedNeedsReshuffle;
            return Ok(PassOutcome::AllPassed);
        }

        Ok(PassOutcome::Passed {
            next_bidder: self.current_bidder,
        })
    }

    /// Reopens the auction after an external reshuffle, rotating the opening
    /// bidder by one seat.
    pub fn reopen_rotated(&mut self) {
        *self = Self::new(self.initial_bidder.next());
    }

    fn close_with_contract(&mut self) -> Bid {
        self.phase = AuctionPhase::ClosedWithContract;
        self.highest_bid
            .expect("auction closed with a contract requires a highest bid")
    }

    fn check_open_and_turn(&self, seat: Seat, action: &'static str) -> Result<(), GameError> {
        if !self.is_open() {
            return Err(GameError::InvalidPhase {
                action,
                state: "the auction is closed",
            });
        }
        if seat != self.current_bidder {
            return Err(GameError::InvalidTurn {
                expected: self.current_bidder,
                actual: seat,
            });
        }
        Ok(())
    }
}
