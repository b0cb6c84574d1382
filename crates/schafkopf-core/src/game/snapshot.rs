use crate::game::state::{GamePhase, GameState};
use crate::model::card::Card;
use crate::model::contract::{Bid, Contract};
use crate::model::seat::Seat;
use serde::{Deserialize, Serialize};
use std::array;

/// What one seat is allowed to see: its own cards, everyone else's hand
/// sizes, and the public table state. Built per viewer so the transport can
/// broadcast without leaking hidden cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round_number: u32,
    pub phase: GamePhase,
    pub viewer: Seat,
    pub players: [String; 4],
    pub hand: Vec<Card>,
    /// `None` at the viewer's own index, a card count everywhere else.
    pub other_hand_sizes: [Option<usize>; 4],
    pub current_trick: Vec<Card>,
    pub current_player: Seat,
    pub current_bidder: Seat,
    pub contract: Option<Contract>,
    pub highest_bid: Option<Bid>,
    pub consecutive_passes: u8,
    pub trick_number: u8,
    pub round_complete: bool,
}

impl GameSnapshot {
    pub fn capture(state: &GameState, viewer: Seat) -> Self {
        let players = array::from_fn(|i| {
            let seat = Seat::from_index(i).expect("seat index in range");
            state.player(seat).name().to_string()
        });
        let other_hand_sizes = array::from_fn(|i| {
            if i == viewer.index() {
                None
            } else {
                let seat = Seat::from_index(i).expect("seat index in range");
                Some(state.player(seat).hand().len())
            }
        });

        GameSnapshot {
            round_number: state.round_number(),
            phase: state.phase(),
            viewer,
            players,
            hand: state.player(viewer).hand().cards().to_vec(),
            other_hand_sizes,
            current_trick: state.current_trick().cards(),
            current_player: state.current_player(),
            current_bidder: state.bidding().current_bidder(),
            contract: state.contract().copied(),
            highest_bid: state.bidding().highest_bid(),
            consecutive_passes: state.bidding().consecutive_passes(),
            trick_number: state.trick_number(),
            round_complete: state.is_round_complete(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
