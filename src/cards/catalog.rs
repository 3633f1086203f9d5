//! The standard card and queen set.
//!
//! Counts and queen values are rule-table constants. Ids are assigned in
//! catalog order, so the same catalog always produces the same ids and a
//! seeded shuffle always produces the same deck.

use super::card::{Card, CardKind};
use super::queen::{Queen, QueenPower};
use crate::core::entity::{CardId, QueenId};
use crate::core::rng::GameRng;

/// Copies of each number value (1-10).
pub const NUMBER_COPIES: usize = 4;

/// Highest number card value.
pub const MAX_NUMBER: u8 = 10;

/// Power card counts.
pub const POWER_CARDS: [(CardKind, usize); 6] = [
    (CardKind::King, 8),
    (CardKind::Knight, 4),
    (CardKind::Dragon, 3),
    (CardKind::Jester, 5),
    (CardKind::Potion, 4),
    (CardKind::Wand, 3),
];

/// Non-queen cards in the standard deck.
pub const DECK_SIZE: usize = 67;

/// Queens in the standard set.
pub const QUEEN_COUNT: usize = 12;

/// Name, points and power of every queen.
pub const QUEENS: [(&str, u32, Option<QueenPower>); QUEEN_COUNT] = [
    ("Rose Queen", 5, Some(QueenPower::Rose)),
    ("Cake Queen", 5, None),
    ("Rainbow Queen", 5, None),
    ("Starfish Queen", 5, None),
    ("Moon Queen", 10, None),
    ("Sunflower Queen", 10, None),
    ("Ladybug Queen", 10, None),
    ("Peacock Queen", 10, None),
    ("Cat Queen", 15, Some(QueenPower::Cat)),
    ("Dog Queen", 15, Some(QueenPower::Dog)),
    ("Pancake Queen", 15, None),
    ("Heart Queen", 20, None),
];

/// Build the standard deck in catalog order (numbers first, then power cards).
///
/// ```
/// use sleeping_queens::cards::catalog::{standard_deck, DECK_SIZE};
///
/// assert_eq!(standard_deck().len(), DECK_SIZE);
/// ```
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let numbers = (1..=MAX_NUMBER)
        .flat_map(|value| std::iter::repeat(CardKind::Number(value)).take(NUMBER_COPIES));
    let powers = POWER_CARDS
        .iter()
        .flat_map(|&(kind, count)| std::iter::repeat(kind).take(count));

    numbers
        .chain(powers)
        .zip(0u32..)
        .map(|(kind, id)| Card::new(CardId::new(id), kind))
        .collect()
}

/// Build the standard queen set, all asleep.
#[must_use]
pub fn standard_queens() -> Vec<Queen> {
    QUEENS
        .iter()
        .zip(0u8..)
        .map(|(&(name, points, power), id)| Queen::new(QueenId::new(id), name, points, power))
        .collect()
}

/// Build and shuffle the standard deck.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}

/// Build and shuffle the queen set.
#[must_use]
pub fn shuffled_queens(rng: &mut GameRng) -> Vec<Queen> {
    let mut queens = standard_queens();
    rng.shuffle(&mut queens);
    queens
}
