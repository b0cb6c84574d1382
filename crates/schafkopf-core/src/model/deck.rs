use crate::error::GameError;
use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::array;

pub const FULL_DECK_SIZE: usize = 32;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full ordered 32-card Schafkopf deck.
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(FULL_DECK_SIZE);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::full();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the whole deck round-robin into four 8-card hands, emptying the
    /// deck. Only an untouched 32-card deck may be dealt; anything else is a
    /// caller defect surfaced as `DeckInvariantViolation`.
    pub fn deal(&mut self) -> Result<[Hand; 4], GameError> {
        if self.cards.len() != FULL_DECK_SIZE {
            return Err(GameError::DeckInvariantViolation {
                cards: self.cards.len(),
            });
        }

        let mut hands = array::from_fn(|_| Hand::new());
        for (index, card) in self.cards.drain(..).enumerate() {
            hands[index % 4].add(card);
        }
        Ok(hands)
    }

    /// Discards whatever is left and recreates the full ordered deck.
    pub fn reset(&mut self) {
        *self = Self::full();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
