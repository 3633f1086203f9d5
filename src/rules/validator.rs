//! Move validation.
//!
//! Pure checks of a proposed move against a snapshot. Nothing here
//! mutates state; `validate` either accepts or names the rule that was
//! broken.
//!
//! ## Check order
//!
//! Turn moves (King, Knight, Potion, Jester, Discard):
//! 1. game in play, else `NotYourTurn`
//! 2. no interrupt pending, else `InterruptActive`
//! 3. mover is the current player, else `NotYourTurn`
//! 4. cards and targets
//!
//! Responses (Dragon, Wand, Allow*, Jester selection, Rose bonus):
//! 1. game in play, else `NotYourTurn`
//! 2. matching interrupt pending, else `NoValidTarget`
//! 3. mover is the player it waits on, else `WrongPlayerForSelection`
//! 4. cards and targets

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::{Card, CardKind};
use crate::core::action::{Move, MoveKind};
use crate::core::entity::{CardId, QueenId};
use crate::core::player::{Player, PlayerId};
use crate::core::state::{GameState, Interrupt, PendingAttack, Phase};
use crate::error::{GameError, Result};

/// Accepted discard shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscardShape {
    /// Any one card.
    Single,
    /// Two number cards of equal value.
    Pair,
    /// Three or more number cards where the largest is the sum of the rest.
    Equation,
}

/// Validate a move against the snapshot.
pub fn validate(state: &GameState, mv: &Move) -> Result<()> {
    if state.phase != Phase::Playing {
        return Err(GameError::NotYourTurn);
    }

    match &mv.kind {
        MoveKind::PlayKing { card, queen } => {
            let mover = turn_mover(state, mv)?;
            require_card(mover, *card, CardKind::King)?;
            require_sleeping(state, *queen)
        }
        MoveKind::PlayKnight { card, target, queen } => {
            let mover = turn_mover(state, mv)?;
            require_card(mover, *card, CardKind::Knight)?;
            require_attack_target(state, mover, target, *queen)
        }
        MoveKind::PlayPotion { card, target, queen } => {
            let mover = turn_mover(state, mv)?;
            require_card(mover, *card, CardKind::Potion)?;
            require_attack_target(state, mover, target, *queen)
        }
        MoveKind::PlayJester { card } => {
            let mover = turn_mover(state, mv)?;
            require_card(mover, *card, CardKind::Jester)?;
            if state.deck.can_draw() {
                Ok(())
            } else {
                Err(GameError::NoValidTarget)
            }
        }
        MoveKind::Discard { cards } => {
            let mover = turn_mover(state, mv)?;
            validate_discard(mover, cards)
        }
        MoveKind::PlayDragon { card } => {
            let attack = knight_attack(state)?;
            let mover = responder(state, &attack.target, mv)?;
            require_card(mover, *card, CardKind::Dragon)
        }
        MoveKind::PlayWand { card } => {
            let attack = potion_attack(state)?;
            let mover = responder(state, &attack.target, mv)?;
            require_card(mover, *card, CardKind::Wand)
        }
        MoveKind::AllowKnightAttack => {
            let attack = knight_attack(state)?;
            responder(state, &attack.target, mv).map(|_| ())
        }
        MoveKind::AllowPotionAttack => {
            let attack = potion_attack(state)?;
            responder(state, &attack.target, mv).map(|_| ())
        }
        MoveKind::SelectJesterQueen { queen } => {
            let Interrupt::JesterSelection { target, .. } = &state.interrupt else {
                return Err(GameError::NoValidTarget);
            };
            responder(state, target, mv)?;
            require_sleeping(state, *queen)
        }
        MoveKind::RoseQueenBonus { queen } => {
            let Interrupt::RoseBonus { player, .. } = &state.interrupt else {
                return Err(GameError::NoValidTarget);
            };
            responder(state, player, mv)?;
            require_sleeping(state, *queen)
        }
    }
}

/// Classify a discard selection, or `None` if it matches no shape.
///
/// ```
/// use sleeping_queens::cards::{Card, CardKind};
/// use sleeping_queens::core::CardId;
/// use sleeping_queens::rules::validator::{classify_discard, DiscardShape};
///
/// let cards: Vec<_> = [2, 3, 5]
///     .iter()
///     .zip(0u32..)
///     .map(|(&v, id)| Card::new(CardId::new(id), CardKind::Number(v)))
///     .collect();
///
/// assert_eq!(classify_discard(&cards), Some(DiscardShape::Equation));
/// assert_eq!(classify_discard(&cards[..2]), None);
/// ```
#[must_use]
pub fn classify_discard(cards: &[Card]) -> Option<DiscardShape> {
    match cards {
        [] => None,
        [_] => Some(DiscardShape::Single),
        [a, b] => match (a.value(), b.value()) {
            (Some(x), Some(y)) if x == y => Some(DiscardShape::Pair),
            _ => None,
        },
        _ => {
            let values: Option<SmallVec<[u8; 5]>> = cards.iter().map(Card::value).collect();
            values
                .filter(|values| is_equation(values))
                .map(|_| DiscardShape::Equation)
        }
    }
}

/// True if the largest value equals the sum of all the others,
/// using at least three values.
#[must_use]
pub fn is_equation(values: &[u8]) -> bool {
    if values.len() < 3 {
        return false;
    }
    let total: u32 = values.iter().map(|&v| u32::from(v)).sum();
    let largest = values.iter().copied().max().map_or(0, u32::from);
    total == 2 * largest
}

fn validate_discard(mover: &Player, ids: &[CardId]) -> Result<()> {
    let mut seen = FxHashSet::default();
    let mut cards: SmallVec<[Card; 5]> = SmallVec::new();
    for &id in ids {
        if !seen.insert(id) {
            return Err(GameError::MissingRequiredCard);
        }
        cards.push(*mover.card(id).ok_or(GameError::MissingRequiredCard)?);
    }

    classify_discard(&cards)
        .map(|_| ())
        .ok_or(GameError::InvalidCardCombination)
}

fn turn_mover<'a>(state: &'a GameState, mv: &Move) -> Result<&'a Player> {
    if !state.interrupt.is_none() {
        return Err(GameError::InterruptActive);
    }
    state
        .current_player()
        .filter(|p| p.id == mv.player)
        .ok_or(GameError::NotYourTurn)
}

fn responder<'a>(state: &'a GameState, expected: &PlayerId, mv: &Move) -> Result<&'a Player> {
    if &mv.player != expected {
        return Err(GameError::WrongPlayerForSelection);
    }
    state
        .player(&mv.player)
        .ok_or(GameError::WrongPlayerForSelection)
}

fn knight_attack(state: &GameState) -> Result<&PendingAttack> {
    match &state.interrupt {
        Interrupt::KnightDefense(attack) => Ok(attack),
        _ => Err(GameError::NoValidTarget),
    }
}

fn potion_attack(state: &GameState) -> Result<&PendingAttack> {
    match &state.interrupt {
        Interrupt::PotionDefense(attack) => Ok(attack),
        _ => Err(GameError::NoValidTarget),
    }
}

fn require_card(player: &Player, id: CardId, kind: CardKind) -> Result<()> {
    player
        .card(id)
        .filter(|c| c.kind == kind)
        .map(|_| ())
        .ok_or(GameError::MissingRequiredCard)
}

fn require_sleeping(state: &GameState, queen: QueenId) -> Result<()> {
    state
        .sleeping_queen(queen)
        .map(|_| ())
        .ok_or(GameError::NoValidTarget)
}

fn require_attack_target(
    state: &GameState,
    mover: &Player,
    target: &PlayerId,
    queen: QueenId,
) -> Result<()> {
    if &mover.id == target {
        return Err(GameError::NoValidTarget);
    }
    state
        .player(target)
        .and_then(|p| p.queen(queen))
        .map(|_| ())
        .ok_or(GameError::NoValidTarget)
}
