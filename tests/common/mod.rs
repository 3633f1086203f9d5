//! Shared helpers for integration tests.
//!
//! Rigging helpers only move cards and queens between places, so the
//! totals (67 cards, 12 queens) are the same before and after.

#![allow(dead_code)]

use sleeping_queens::cards::{Card, CardKind, Queen, QueenPower};
use sleeping_queens::core::{CardId, GameConfig, GameState, PlayerId, QueenId};
use sleeping_queens::deck::DeckManager;
use sleeping_queens::rules::SleepingQueens;

pub const TOTAL_CARDS: usize = 67;
pub const TOTAL_QUEENS: usize = 12;

pub fn engine() -> SleepingQueens {
    SleepingQueens::new(GameConfig::default()).unwrap()
}

/// Player id for a seat created by `started`.
pub fn pid(seat: usize) -> PlayerId {
    PlayerId::new(format!("p{seat}"))
}

/// A started game with players `p0..p{n-1}`.
pub fn started(engine: &SleepingQueens, n: usize, seed: u64) -> GameState {
    let mut state = engine.create_game(Some(seed));
    for seat in 0..n {
        state = engine.add_player(&state, pid(seat), format!("Player {seat}")).unwrap();
    }
    engine.start_game(&state).unwrap()
}

/// Re-deal every hand: each seat gets the listed kinds, then number cards
/// up to the hand size. Everything else goes back into the draw pile.
///
/// Assumes an empty discard pile (call right after `start_game`).
pub fn deal(state: &mut GameState, hands: &[&[CardKind]]) {
    deal_stacked(state, hands, &[]);
}

/// Like `deal`, and also puts cards of the `top` kinds on top of the draw
/// pile (last one drawn first).
pub fn deal_stacked(state: &mut GameState, hands: &[&[CardKind]], top: &[CardKind]) {
    let mut pool: Vec<Card> = state.players.iter_mut().flat_map(|p| p.hand.drain(..)).collect();
    pool.extend_from_slice(state.deck.draw_pile());
    let discard = state.deck.discard_pile().to_vec();

    fn take(pool: &mut Vec<Card>, kind: CardKind) -> Card {
        let pos = pool.iter().position(|c| c.kind == kind).expect("card kind exhausted");
        pool.remove(pos)
    }

    for (seat, kinds) in hands.iter().enumerate() {
        for &kind in kinds.iter() {
            let card = take(&mut pool, kind);
            state.players[seat].hand.push(card);
        }
    }
    let stacked: Vec<Card> = top.iter().map(|&kind| take(&mut pool, kind)).collect();

    let hand_size = state.config.hand_size;
    for player in &mut state.players {
        while player.hand.len() < hand_size {
            let pos = pool.iter().position(|c| !c.is_power()).expect("number cards exhausted");
            player.hand.push(pool.remove(pos));
        }
    }

    pool.extend(stacked);
    state.deck = DeckManager::from_piles(pool, discard);
}

/// First card of `kind` in a seat's hand.
pub fn hand_card(state: &GameState, seat: usize, kind: CardKind) -> CardId {
    state.players[seat]
        .hand
        .iter()
        .find(|c| c.kind == kind)
        .map(|c| c.id)
        .expect("card not in hand")
}

/// Wake the first sleeping queen matching `pred` directly into a seat's collection.
pub fn give_queen(state: &mut GameState, seat: usize, pred: impl Fn(&Queen) -> bool) -> QueenId {
    let id = state
        .sleeping_queens()
        .find(|q| pred(q))
        .map(|q| q.id)
        .expect("no such sleeping queen");
    let mut queen = state.take_sleeping(id).unwrap();
    queen.awake = true;
    state.players[seat].queens.push(queen);
    id
}

/// Id of the sleeping queen with a given power.
pub fn sleeping_with(state: &GameState, power: QueenPower) -> QueenId {
    state
        .sleeping_queens()
        .find(|q| q.power == Some(power))
        .map(|q| q.id)
        .expect("queen not asleep")
}

/// Id of a sleeping queen without any power.
pub fn plain_sleeping(state: &GameState) -> QueenId {
    state
        .sleeping_queens()
        .find(|q| q.power.is_none())
        .map(|q| q.id)
        .expect("no plain queen asleep")
}

pub fn assert_conserved(state: &GameState) {
    assert_eq!(state.total_cards(), TOTAL_CARDS, "card count changed");
    assert_eq!(state.total_queens(), TOTAL_QUEENS, "queen count changed");
}
