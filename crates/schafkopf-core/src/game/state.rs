use crate::error::GameError;
use crate::game::snapshot::GameSnapshot;
use crate::model::bidding::{AuctionPhase, BidOutcome, BiddingState, PassOutcome};
use crate::model::card::Card;
use crate::model::contract::{Bid, Contract, ContractKind};
use crate::model::deck::Deck;
use crate::model::player::Player;
use crate::model::rank::Rank;
use crate::model::rules;
use crate::model::score::{self, RoundScore};
use crate::model::seat::Seat;
use crate::model::trick::{Trick, TrickError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::array;

/// Where a round currently stands. Derived from the auction state and trick
/// counter, never stored, so it cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    AwaitingDeal,
    Bidding,
    AwaitingReshuffle,
    Playing,
    RoundComplete,
}

impl GamePhase {
    pub const fn describe(self) -> &'static str {
        match self {
            GamePhase::AwaitingDeal => "the cards have not been dealt",
            GamePhase::Bidding => "the auction is open",
            GamePhase::AwaitingReshuffle => "the round awaits a reshuffle",
            GamePhase::Playing => "tricks are being played",
            GamePhase::RoundComplete => "the round is complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidEvent {
    Accepted { next_bidder: Seat },
    BiddingClosed { contract: Contract },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassEvent {
    Passed { next_bidder: Seat },
    BiddingClosed { contract: Contract },
    /// Every seat passed; the caller decides when to invoke
    /// [`GameState::reshuffle_and_reopen_bidding`].
    ReshuffleRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played { next_player: Seat },
    /// Four cards are down; the trick is ready for
    /// [`GameState::complete_trick`].
    TrickReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickResult {
    pub winner: Seat,
    pub cards: [Card; 4],
    pub points: u32,
}

/// One table playing one round at a time. Every operation is a synchronous
/// state transition; the hosting layer serializes access per game instance.
#[derive(Debug, Clone)]
pub struct GameState {
    players: [Player; 4],
    deck: Deck,
    bidding: BiddingState,
    contract: Option<Contract>,
    current_trick: Trick,
    trick_history: Vec<Trick>,
    current_player: Seat,
    trick_number: u8,
    round_number: u32,
    rng: StdRng,
    seed: u64,
}

impl GameState {
    pub fn new(names: [&str; 4]) -> Self {
        Self::with_seed(names, rand::random())
    }

    pub fn with_seed(names: [&str; 4], seed: u64) -> Self {
        let players = array::from_fn(|i| {
            let seat = Seat::from_index(i).expect("seat index in range");
            Player::new(seat, names[i])
        });

        Self {
            players,
            deck: Deck::full(),
            bidding: BiddingState::new(Seat::North),
            contract: None,
            current_trick: Trick::new(Seat::North),
            trick_history: Vec::new(),
            current_player: Seat::North,
            trick_number: 0,
            round_number: 0,
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn trick_number(&self) -> u8 {
        self.trick_number
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 4] {
        &self.players
    }

    pub fn bidding(&self) -> &BiddingState {
        &self.bidding
    }

    pub fn contract(&self) -> Option<&Contract> {
        self.contract.as_ref()
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    pub fn trick_history(&self) -> &[Trick] {
        &self.trick_history
    }

    pub fn current_player(&self) -> Seat {
        self.current_player
    }

    pub fn phase(&self) -> GamePhase {
        if self.round_number == 0 {
            return GamePhase::AwaitingDeal;
        }
        match self.bidding.phase() {
            AuctionPhase::Open => GamePhase::Bidding,
            AuctionPhase::ClosedNeedsReshuffle => GamePhase::AwaitingReshuffle,
            AuctionPhase::ClosedWithContract => {
                if self.is_round_complete() {
                    GamePhase::RoundComplete
                } else {
                    GamePhase::Playing
                }
            }
        }
    }

    /// Shuffles a fresh deck and deals the next round. Valid before the first
    /// deal and after a scored round; the opening bidder rotates one seat on
    /// every round after the first.
    pub fn deal_round(&mut self) -> Result<(), GameError> {
        match self.phase() {
            GamePhase::AwaitingDeal | GamePhase::RoundComplete => {}
            phase => {
                return Err(GameError::InvalidPhase {
                    action: "deal",
                    state: phase.describe(),
                });
            }
        }

        let opener = if self.round_number == 0 {
            self.bidding.initial_bidder()
        } else {
            self.bidding.initial_bidder().next()
        };
        self.bidding = BiddingState::new(opener);
        self.redeal(opener)?;
        self.round_number += 1;
        tracing::debug!(round = self.round_number, opener = %opener, "dealt round");
        Ok(())
    }

    /// Recovery path after every seat passed: one atomic reset that redeals
    /// the same round, rotates the opening bidder and reopens the auction.
    pub fn reshuffle_and_reopen_bidding(&mut self) -> Result<(), GameError> {
        if self.phase() != GamePhase::AwaitingReshuffle {
            return Err(GameError::InvalidPhase {
                action: "reshuffle",
                state: self.phase().describe(),
            });
        }

        self.bidding.reopen_rotated();
        let opener = self.bidding.initial_bidder();
        self.redeal(opener)?;
        tracing::debug!(opener = %opener, "redealt after all seats passed");
        Ok(())
    }

    pub fn make_bid(&mut self, seat: Seat, kind: ContractKind) -> Result<BidEvent, GameError> {
        self.check_phase(GamePhase::Bidding, "bid")?;

        let outcome = self
            .bidding
            .make_bid(seat, kind, self.players[seat.index()].hand())?;
        match outcome {
            BidOutcome::Accepted { next_bidder } => Ok(BidEvent::Accepted { next_bidder }),
            BidOutcome::Closed { winning_bid } => Ok(BidEvent::BiddingClosed {
                contract: self.install_contract(winning_bid),
            }),
        }
    }

    pub fn pass_bid(&mut self, seat: Seat) -> Result<PassEvent, GameError> {
        self.check_phase(GamePhase::Bidding, "pass")?;

        match self.bidding.pass_bid(seat)? {
            PassOutcome::Passed { next_bidder } => Ok(PassEvent::Passed { next_bidder }),
            PassOutcome::Closed { winning_bid } => Ok(PassEvent::BiddingClosed {
                contract: self.install_contract(winning_bid),
            }),
            PassOutcome::AllPassed => {
                tracing::debug!(round = self.round_number, "every seat passed");
                Ok(PassEvent::ReshuffleRequired)
            }
        }
    }

    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, GameError> {
        self.check_phase(GamePhase::Playing, "play a card")?;
        let contract = self.contract.expect("playing phase implies a contract");

        if seat != self.current_player {
            return Err(GameError::InvalidTurn {
                expected: self.current_player,
                actual: seat,
            });
        }
        if self.current_trick.is_complete() {
            return Err(GameError::InvalidPhase {
                action: "play a card",
                state: "the trick awaits completion",
            });
        }

        rules::check_play(
            self.players[seat.index()].hand(),
            card,
            self.current_trick.led_card(),
            &contract.kind,
        )
        .map_err(GameError::InvalidPlay)?;

        self.current_trick
            .play(seat, card)
            .map_err(|err| match err {
                TrickError::OutOfTurn { expected, actual } => {
                    GameError::InvalidTurn { expected, actual }
                }
                TrickError::AlreadyPlayed(seat) => GameError::InvalidTurn {
                    expected: self.current_player,
                    actual: seat,
                },
                TrickError::TrickComplete => GameError::InvalidPhase {
                    action: "play a card",
                    state: "the trick awaits completion",
                },
            })?;
        let _ = self.players[seat.index()].hand_mut().remove(card);

        if self.current_trick.is_complete() {
            Ok(PlayOutcome::TrickReady)
        } else {
            self.current_player = self.current_player.next();
            Ok(PlayOutcome::Played {
                next_player: self.current_player,
            })
        }
    }

    /// Resolves a full trick: the winner takes the cards and their points and
    /// leads the next trick.
    ///
    /// # Panics
    ///
    /// Calling this with fewer than four cards down, or before a contract is
    /// installed, is a caller defect and panics.
    pub fn complete_trick(&mut self) -> TrickResult {
        let contract = self
            .contract
            .expect("complete_trick requires an installed contract");
        assert!(
            self.current_trick.is_complete(),
            "complete_trick requires 4 played cards, the trick has {}",
            self.current_trick.len()
        );

        let winner = self
            .current_trick
            .winner(&contract.kind)
            .expect("complete trick has a winner");
        let points = self.current_trick.points();
        let cards: [Card; 4] = self
            .current_trick
            .cards()
            .try_into()
            .expect("complete trick has four cards");

        let finished = std::mem::replace(&mut self.current_trick, Trick::new(winner));
        self.players[winner.index()].add_trick(finished.clone());
        self.trick_history.push(finished);
        self.trick_number += 1;
        self.current_player = winner;
        tracing::debug!(
            winner = %winner,
            points,
            trick_number = self.trick_number,
            "trick completed"
        );

        TrickResult {
            winner,
            cards,
            points,
        }
    }

    pub fn is_round_complete(&self) -> bool {
        usize::from(self.trick_number) >= score::TRICKS_PER_ROUND
    }

    pub fn calculate_scores(&self) -> Result<RoundScore, GameError> {
        if self.phase() != GamePhase::RoundComplete {
            return Err(GameError::InvalidPhase {
                action: "score the round",
                state: self.phase().describe(),
            });
        }
        let contract = self.contract.expect("completed round implies a contract");

        let result = score::score_round(&contract, &self.players);
        tracing::info!(
            round = self.round_number,
            game_points = result.game_points,
            won = result.won,
            "round scored"
        );
        Ok(result)
    }

    /// Legal cards for `seat` against the current trick; empty until a
    /// contract is installed.
    pub fn valid_plays(&self, seat: Seat) -> Vec<Card> {
        match &self.contract {
            Some(contract) => rules::valid_plays(
                self.players[seat.index()].hand(),
                self.current_trick.led_card(),
                &contract.kind,
            ),
            None => Vec::new(),
        }
    }

    pub fn snapshot(&self, viewer: Seat) -> GameSnapshot {
        GameSnapshot::capture(self, viewer)
    }

    fn check_phase(&self, wanted: GamePhase, action: &'static str) -> Result<(), GameError> {
        let phase = self.phase();
        if phase != wanted {
            return Err(GameError::InvalidPhase {
                action,
                state: phase.describe(),
            });
        }
        Ok(())
    }

    fn redeal(&mut self, opener: Seat) -> Result<(), GameError> {
        for player in &mut self.players {
            player.reset_round();
        }
        self.deck.reset();
        self.deck.shuffle_in_place(&mut self.rng);
        let hands = self.deck.deal()?;
        for (player, hand) in self.players.iter_mut().zip(hands) {
            player.set_hand(hand);
        }

        self.contract = None;
        self.trick_history.clear();
        self.trick_number = 0;
        self.current_trick = Trick::new(opener);
        self.current_player = opener;
        Ok(())
    }

    fn install_contract(&mut self, winning_bid: Bid) -> Contract {
        let partner = match winning_bid.kind {
            ContractKind::Rufer { called_ace } => {
                let ace = Card::new(called_ace, Rank::Ace);
                Seat::LOOP.iter().copied().find(|&seat| {
                    seat != winning_bid.bidder && self.players[seat.index()].hand().contains(ace)
                })
            }
            _ => None,
        };

        let contract = Contract::new(winning_bid.bidder, winning_bid.kind, partner);
        self.contract = Some(contract);
        self.current_player = contract.declarer;
        self.current_trick = Trick::new(contract.declarer);
        tracing::debug!(contract = %contract, "auction closed");
        contract
    }
}

#[cfg(test)]
mod tests {
    use super::{BidEvent, GamePhase, GameState, PassEvent, PlayOutcome};
    use crate::error::GameError;
    use crate::model::card::Card;
    use crate::model::contract::ContractKind;
    use crate::model::rank::Rank;
    use crate::model::seat::Seat;
    use crate::model::suit::Suit;

    const NAMES: [&str; 4] = ["Anna", "Beate", "Clara", "Doris"];

    fn dealt_game(seed: u64) -> GameState {
        let mut game = GameState::with_seed(NAMES, seed);
        game.deal_round().unwrap();
        game
    }

    /// A suit whose Ace the seat does not hold. Deterministic for the seeded
    /// deals used here.
    fn callable_ace(game: &GameState, seat: Seat) -> Suit {
        Suit::ALL
            .into_iter()
            .find(|&suit| !game.player(seat).hand().contains(Card::new(suit, Rank::Ace)))
            .expect("seeded hand holds all four Aces")
    }

    #[test]
    fn new_game_awaits_the_first_deal() {
        let game = GameState::with_seed(NAMES, 1);
        assert_eq!(game.phase(), GamePhase::AwaitingDeal);
        assert!(matches!(
            GameState::with_seed(NAMES, 1).pass_bid(Seat::North),
            Err(GameError::InvalidPhase { .. })
        ));
    }

    #[test]
    fn dealing_gives_every_seat_eight_cards() {
        let game = dealt_game(5);
        for seat in Seat::LOOP {
            assert_eq!(game.player(seat).hand().len(), 8);
        }
        assert_eq!(game.phase(), GamePhase::Bidding);
        assert_eq!(game.round_number(), 1);
        assert_eq!(game.bidding().current_bidder(), Seat::North);
    }

    #[test]
    fn rufer_bid_then_three_passes_installs_the_contract() {
        let mut game = dealt_game(5);
        let called_ace = callable_ace(&game, Seat::North);

        let event = game
            .make_bid(Seat::North, ContractKind::Rufer { called_ace })
            .unwrap();
        assert_eq!(
            event,
            BidEvent::Accepted {
                next_bidder: Seat::East
            }
        );

        game.pass_bid(Seat::East).unwrap();
        game.pass_bid(Seat::South).unwrap();
        let event = game.pass_bid(Seat::West).unwrap();

        let contract = match event {
            PassEvent::BiddingClosed { contract } => contract,
            other => panic!("expected closure, got {other:?}"),
        };
        assert_eq!(contract.declarer, Seat::North);
        assert!(matches!(contract.kind, ContractKind::Rufer { .. }));
        // The called Ace sits in some non-declarer hand.
        let partner = contract.partner.expect("called ace is dealt to someone");
        assert_ne!(partner, Seat::North);
        assert!(
            game.player(partner)
                .hand()
                .contains(Card::new(called_ace, Rank::Ace))
        );

        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.current_player(), Seat::North);
        assert_eq!(game.current_trick().leader(), Seat::North);
    }

    #[test]
    fn all_passes_require_a_reshuffle() {
        let mut game = dealt_game(9);
        for seat in Seat::LOOP.into_iter().take(3) {
            game.pass_bid(seat).unwrap();
        }
        assert_eq!(game.pass_bid(Seat::West).unwrap(), PassEvent::ReshuffleRequired);
        assert_eq!(game.phase(), GamePhase::AwaitingReshuffle);
        assert_eq!(game.bidding().highest_bid(), None);

        // No play is possible until the recovery operation runs.
        let any_card = game.player(Seat::North).hand().cards()[0];
        assert!(matches!(
            game.play_card(Seat::North, any_card),
            Err(GameError::InvalidPhase { .. })
        ));

        game.reshuffle_and_reopen_bidding().unwrap();
        assert_eq!(game.phase(), GamePhase::Bidding);
        assert_eq!(game.bidding().initial_bidder(), Seat::East);
        assert_eq!(game.bidding().current_bidder(), Seat::East);
        assert_eq!(game.round_number(), 1);
        for seat in Seat::LOOP {
            assert_eq!(game.player(seat).hand().len(), 8);
        }
    }

    #[test]
    fn playing_out_of_turn_is_always_rejected() {
        let mut game = dealt_game(5);
        game.make_bid(Seat::North, ContractKind::Wenz { trump_suit: None })
            .unwrap();
        game.pass_bid(Seat::East).unwrap();
        game.pass_bid(Seat::South).unwrap();
        game.pass_bid(Seat::West).unwrap();

        // Declarer leads; East may not jump in.
        let card = game.player(Seat::East).hand().cards()[0];
        assert_eq!(
            game.play_card(Seat::East, card),
            Err(GameError::InvalidTurn {
                expected: Seat::North,
                actual: Seat::East,
            })
        );
    }

    #[test]
    fn trick_flow_awards_the_winner() {
        let mut game = dealt_game(5);
        game.make_bid(Seat::North, ContractKind::Wenz { trump_suit: None })
            .unwrap();
        game.pass_bid(Seat::East).unwrap();
        game.pass_bid(Seat::South).unwrap();
        game.pass_bid(Seat::West).unwrap();

        let mut seat = game.current_player();
        for play in 0..4 {
            let card = game.valid_plays(seat)[0];
            let outcome = game.play_card(seat, card).unwrap();
            if play < 3 {
                seat = match outcome {
                    PlayOutcome::Played { next_player } => next_player,
                    other => panic!("expected Played, got {other:?}"),
                };
            } else {
                assert_eq!(outcome, PlayOutcome::TrickReady);
            }
        }

        let result = game.complete_trick();
        assert_eq!(game.trick_number(), 1);
        assert_eq!(game.current_player(), result.winner);
        assert_eq!(game.player(result.winner).tricks_won().len(), 1);
        assert_eq!(game.player(result.winner).points(), result.points);
        assert_eq!(game.trick_history().len(), 1);
    }

    #[test]
    #[should_panic(expected = "complete_trick requires 4 played cards")]
    fn completing_a_short_trick_is_a_defect() {
        let mut game = dealt_game(5);
        game.make_bid(Seat::North, ContractKind::Wenz { trump_suit: None })
            .unwrap();
        game.pass_bid(Seat::East).unwrap();
        game.pass_bid(Seat::South).unwrap();
        game.pass_bid(Seat::West).unwrap();

        let card = game.valid_plays(Seat::North)[0];
        game.play_card(Seat::North, card).unwrap();
        let _ = game.complete_trick();
    }

    #[test]
    fn scoring_before_the_round_ends_is_rejected() {
        let mut game = dealt_game(5);
        game.make_bid(Seat::North, ContractKind::Wenz { trump_suit: None })
            .unwrap();
        game.pass_bid(Seat::East).unwrap();
        game.pass_bid(Seat::South).unwrap();
        game.pass_bid(Seat::West).unwrap();

        assert!(matches!(
            game.calculate_scores(),
            Err(GameError::InvalidPhase { .. })
        ));
    }

    #[test]
    fn solo_bid_closes_with_hearts_default() {
        let mut game = dealt_game(5);
        game.make_bid(Seat::North, ContractKind::solo(None)).unwrap();
        game.pass_bid(Seat::East).unwrap();
        game.pass_bid(Seat::South).unwrap();
        let event = game.pass_bid(Seat::West).unwrap();
        match event {
            PassEvent::BiddingClosed { contract } => {
                assert_eq!(
                    contract.kind,
                    ContractKind::Solo {
                        trump_suit: Suit::Hearts
                    }
                );
                assert_eq!(contract.partner, None);
            }
            other => panic!("expected closure, got {other:?}"),
        }
    }
}
