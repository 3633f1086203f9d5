//! Draw and discard piles.
//!
//! The `DeckManager` owns the shared piles and handles:
//! - Drawing from the top (end of the backing `Vec`)
//! - Discarding in submission order, last card on top
//! - Reshuffling the discard pile into a new draw pile once the
//!   draw pile runs dry

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::rng::GameRng;

/// Shared draw and discard piles.
///
/// ## Usage
///
/// ```
/// use sleeping_queens::cards::{Card, CardKind};
/// use sleeping_queens::core::{CardId, GameRng};
/// use sleeping_queens::deck::DeckManager;
///
/// let cards = (0..3).map(|i| Card::new(CardId::new(i), CardKind::Number(1))).collect();
/// let mut deck = DeckManager::new(cards);
/// let mut rng = GameRng::new(42);
///
/// // Top is the end of the pile
/// let drawn = deck.draw(2, &mut rng);
/// assert_eq!(drawn[0].id, CardId::new(2));
///
/// deck.discard(drawn);
/// assert_eq!(deck.peek_discard_top().map(|c| c.id), Some(CardId::new(1)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckManager {
    /// Face-down draw pile (top = end).
    draw_pile: Vec<Card>,

    /// Face-up discard pile (top = end).
    discard_pile: Vec<Card>,
}

impl DeckManager {
    /// Create a manager with the given draw pile and an empty discard pile.
    #[must_use]
    pub fn new(draw_pile: Vec<Card>) -> Self {
        Self {
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    /// Rebuild a manager from both piles, bottom (oldest) first.
    #[must_use]
    pub fn from_piles(draw_pile: Vec<Card>, discard_pile: Vec<Card>) -> Self {
        Self { draw_pile, discard_pile }
    }

    /// Draw pile, bottom first.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    /// Discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Number of cards in the draw pile.
    #[must_use]
    pub fn draw_size(&self) -> usize {
        self.draw_pile.len()
    }

    /// Number of cards in the discard pile.
    #[must_use]
    pub fn discard_size(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards held by the piles (draw + discard).
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// True iff the draw pile is empty and the discard pile is not.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.draw_pile.is_empty() && !self.discard_pile.is_empty()
    }

    /// True iff at least one card can still be drawn.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        !self.draw_pile.is_empty() || !self.discard_pile.is_empty()
    }

    /// Shuffle the whole discard pile into a new draw pile.
    ///
    /// Any cards still in the draw pile stay underneath.
    pub fn reshuffle(&mut self, rng: &mut GameRng) {
        let mut recycled = std::mem::take(&mut self.discard_pile);
        rng.shuffle(&mut recycled);
        debug!("reshuffled {} discarded cards into the draw pile", recycled.len());
        self.draw_pile.append(&mut recycled);
    }

    /// Draw one card, reshuffling first if the draw pile is empty.
    pub fn draw_one(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.needs_reshuffle() {
            self.reshuffle(rng);
        }
        self.draw_pile.pop()
    }

    /// Draw up to `n` cards, reshuffling as needed.
    ///
    /// Returns fewer than `n` cards only when both piles are exhausted.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n);
        while drawn.len() < n {
            match self.draw_one(rng) {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Put cards on the discard pile in the given order.
    pub fn discard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard_pile.extend(cards);
    }

    /// The most recently discarded card.
    #[must_use]
    pub fn peek_discard_top(&self) -> Option<&Card> {
        self.discard_pile.last()
    }
}
