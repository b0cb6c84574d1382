use crate::model::hand::Hand;
use crate::model::seat::Seat;
use crate::model::trick::Trick;

/// Per-seat round state: the exclusively owned hand, the tricks taken so far
/// and the card points they carry. Cleared at every round boundary.
#[derive(Debug, Clone)]
pub struct Player {
    seat: Seat,
    name: String,
    hand: Hand,
    tricks_won: Vec<Trick>,
    points: u32,
}

impl Player {
    pub fn new(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            hand: Hand::new(),
            tricks_won: Vec::new(),
            points: 0,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }

    pub fn tricks_won(&self) -> &[Trick] {
        &self.tricks_won
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Awards a completed trick, accumulating its card points.
    pub fn add_trick(&mut self, trick: Trick) {
        self.points += trick.points();
        self.tricks_won.push(trick);
    }

    pub fn reset_round(&mut self) {
        self.hand = Hand::new();
        self.tricks_won.clear();
        self.points = 0;
    }
}
