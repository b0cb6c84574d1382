use crate::model::contract::Contract;
use crate::model::player::Player;
use crate::model::seat::Seat;
use serde::{Deserialize, Serialize};

/// Points the declaring team needs to win the round.
pub const WINNING_POINTS: u32 = 61;
/// Points from which the win counts as schneider.
pub const SCHNEIDER_POINTS: u32 = 91;
/// Tricks in a round; taking all of them is schwarz.
pub const TRICKS_PER_ROUND: usize = 8;

/// The round result reported to the table once all tricks are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    pub declarer_points: u32,
    pub team_points: u32,
    pub opponent_points: u32,
    pub won: bool,
    pub schneider: bool,
    pub schwarz: bool,
    pub declarer_tricks: usize,
    pub game_points: i32,
}

/// Scores a finished round. The declaring team is the declarer plus the
/// Rufer partner when one was called; everyone else defends.
pub fn score_round(contract: &Contract, players: &[Player; 4]) -> RoundScore {
    let mut team_points = 0;
    let mut opponent_points = 0;
    let mut team_tricks = 0;

    for seat in Seat::LOOP {
        let player = &players[seat.index()];
        if contract.is_declarer_team(seat) {
            team_points += player.points();
            team_tricks += player.tricks_won().len();
        } else {
            opponent_points += player.points();
        }
    }

    let won = team_points >= WINNING_POINTS;
    let schneider = team_points >= SCHNEIDER_POINTS;
    let schwarz = team_tricks == TRICKS_PER_ROUND;

    let mut game_points = contract.kind.base_value();
    if schneider {
        game_points *= 2;
    }
    if schwarz {
        game_points *= 2;
    }
    if !won {
        game_points = -game_points;
    }

    RoundScore {
        declarer_points: players[contract.declarer.index()].points(),
        team_points,
        opponent_points,
        won,
        schneider,
        schwarz,
        declarer_tricks: players[contract.declarer.index()].tricks_won().len(),
        game_points,
    }
}
