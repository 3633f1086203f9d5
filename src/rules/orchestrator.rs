//! Sleeping Queens turn and attack state machine.
//!
//! Logical states (derived from `Phase` and `Interrupt`):
//!
//! | State | Representation |
//! |-------|----------------|
//! | normal play | `Playing` + `Interrupt::None` |
//! | awaiting defense | `Playing` + `KnightDefense` / `PotionDefense` |
//! | awaiting Jester selection | `Playing` + `JesterSelection` |
//! | awaiting Rose bonus | `Playing` + `RoseBonus` |
//! | ended | `Ended` |
//!
//! Every change of the turn pointer goes through `end_move`, and each
//! move kind calls it exactly once (or not at all when it opens an
//! interrupt or grants an extra turn).

use std::time::Duration;

use log::{debug, info};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::engine::{GameResult, RulesEngine};
use super::{validator, win};
use crate::cards::{Card, CardKind, Queen};
use crate::core::action::{Move, MoveKind};
use crate::core::config::GameConfig;
use crate::core::entity::{CardId, QueenId};
use crate::core::player::PlayerId;
use crate::core::state::{GameState, Interrupt, PendingAttack, Phase};
use crate::error::{GameError, Result};

/// The Sleeping Queens rules engine.
#[derive(Clone, Debug, Default)]
pub struct SleepingQueens {
    pub(crate) config: GameConfig,
}

impl SleepingQueens {
    // === Queries ===

    /// The player whose turn it is, while the game is in play.
    #[must_use]
    pub fn current_player<'a>(&self, state: &'a GameState) -> Option<&'a PlayerId> {
        if state.phase != Phase::Playing {
            return None;
        }
        state.current_player().map(|p| &p.id)
    }

    /// The pending interrupt, if any.
    #[must_use]
    pub fn pending_interrupt<'a>(&self, state: &'a GameState) -> Option<&'a Interrupt> {
        (!state.interrupt.is_none()).then_some(&state.interrupt)
    }

    /// Time left in the current defense window, measured against the
    /// caller's clock `now` (ms). `None` if no attack is pending.
    #[must_use]
    pub fn defense_time_remaining(&self, state: &GameState, now: u64) -> Option<Duration> {
        state
            .interrupt
            .attack()
            .map(|attack| Duration::from_millis(attack.deadline.saturating_sub(now)))
    }

    /// Whether `player` may play a Dragon or Wand right now.
    #[must_use]
    pub fn can_play_counter(&self, state: &GameState, player: &PlayerId) -> bool {
        let counter = match &state.interrupt {
            Interrupt::KnightDefense(attack) if &attack.target == player => CardKind::Dragon,
            Interrupt::PotionDefense(attack) if &attack.target == player => CardKind::Wand,
            _ => return false,
        };
        state.phase == Phase::Playing
            && state
                .player(player)
                .is_some_and(|p| p.has_card(|c| c.kind == counter))
    }

    /// Let an attack through on the target's behalf once its deadline
    /// has passed on the caller's clock.
    ///
    /// Returns `Ok(None)` when no attack is pending or its window is
    /// still open.
    pub fn resolve_expired_defense(
        &self,
        state: &GameState,
        now: u64,
    ) -> Result<Option<GameState>> {
        let kind = match &state.interrupt {
            Interrupt::KnightDefense(attack) if now >= attack.deadline => {
                MoveKind::AllowKnightAttack
            }
            Interrupt::PotionDefense(attack) if now >= attack.deadline => {
                MoveKind::AllowPotionAttack
            }
            _ => return Ok(None),
        };
        let Some(target) = state.interrupt.responder().cloned() else {
            return Ok(None);
        };

        debug!("defense window for {target} expired");
        self.submit_move(state, &Move::new(target, kind).at(now)).map(Some)
    }
}

impl RulesEngine for SleepingQueens {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn validate(&self, state: &GameState, mv: &Move) -> Result<()> {
        validator::validate(state, mv)
    }

    fn apply(&self, state: &mut GameState, mv: &Move) -> Result<()> {
        let mover = state.player_index(&mv.player).ok_or(GameError::NotYourTurn)?;

        match &mv.kind {
            MoveKind::PlayKing { card, queen } => {
                spend(state, mover, *card)?;
                let rose = wake(state, mover, *queen)?;
                state.refill_hand(mover);
                if !open_rose_bonus(state, mover, rose, mover) {
                    end_move(state, mover, Some(mover));
                }
            }
            MoveKind::PlayKnight { card, target, queen } => {
                spend(state, mover, *card)?;
                let attack = pending_attack(state, mv, target, *queen);
                debug!("{} attacks {} with a Knight", attack.attacker, attack.target);
                state.interrupt = Interrupt::KnightDefense(attack);
            }
            MoveKind::PlayPotion { card, target, queen } => {
                spend(state, mover, *card)?;
                let attack = pending_attack(state, mv, target, *queen);
                debug!("{} attacks {} with a Potion", attack.attacker, attack.target);
                state.interrupt = Interrupt::PotionDefense(attack);
            }
            MoveKind::PlayDragon { card } | MoveKind::PlayWand { card } => {
                let attack = take_attack(state)?;
                let attacker = state
                    .player_index(&attack.attacker)
                    .ok_or(GameError::NoValidTarget)?;
                spend(state, mover, *card)?;
                state.draw_into(attacker, 1);
                state.draw_into(mover, 1);
                debug!("{} blocked the attack from {}", attack.target, attack.attacker);
                end_move(state, attacker, Some(attacker));
            }
            MoveKind::AllowKnightAttack => {
                let attack = take_attack(state)?;
                let attacker = state
                    .player_index(&attack.attacker)
                    .ok_or(GameError::NoValidTarget)?;
                let queen = state.players[mover]
                    .take_queen(attack.queen)
                    .ok_or(GameError::NoValidTarget)?;
                acquire(state, attacker, queen);
                state.refill_hand(attacker);
                end_move(state, attacker, Some(attacker));
            }
            MoveKind::AllowPotionAttack => {
                let attack = take_attack(state)?;
                let attacker = state
                    .player_index(&attack.attacker)
                    .ok_or(GameError::NoValidTarget)?;
                let queen = state.players[mover]
                    .take_queen(attack.queen)
                    .ok_or(GameError::NoValidTarget)?;
                debug!("{} put {} back to sleep", attack.attacker, queen.name);
                state.put_to_sleep(queen);
                state.refill_hand(attacker);
                end_move(state, attacker, Some(attacker));
            }
            MoveKind::PlayJester { card } => {
                // Reveal before the Jester reaches the discard pile, so a
                // reshuffle can never bring the played Jester back.
                let jester = state.players[mover]
                    .take_card(*card)
                    .ok_or(GameError::MissingRequiredCard)?;
                let revealed = state
                    .deck
                    .draw_one(&mut state.rng)
                    .ok_or(GameError::NoValidTarget)?;
                match revealed.kind.value() {
                    None => {
                        debug!("Jester revealed {}: {} plays again", revealed.kind, mv.player);
                        state.deck.discard([jester]);
                        state.players[mover].hand.push(revealed);
                        state.refill_hand(mover);
                        end_move(state, mover, None);
                    }
                    Some(value) => {
                        state.deck.discard([jester, revealed]);
                        state.refill_hand(mover);
                        let n = state.player_count();
                        let target = (state.current + usize::from(value) - 1) % n;
                        let target_id = state.players[target].id.clone();
                        debug!("Jester revealed {value}: {target_id} picks a queen");
                        state.interrupt = Interrupt::JesterSelection {
                            jester_player: mv.player.clone(),
                            target: target_id,
                            revealed_value: value,
                        };
                    }
                }
            }
            MoveKind::SelectJesterQueen { queen } => {
                let Interrupt::JesterSelection { jester_player, .. } =
                    std::mem::take(&mut state.interrupt)
                else {
                    return Err(GameError::NoValidTarget);
                };
                let resume = state.player_index(&jester_player).ok_or(GameError::NoValidTarget)?;
                let rose = wake(state, mover, *queen)?;
                if !open_rose_bonus(state, mover, rose, resume) {
                    end_move(state, mover, Some(resume));
                }
            }
            MoveKind::RoseQueenBonus { queen } => {
                let Interrupt::RoseBonus { resume_after, .. } =
                    std::mem::take(&mut state.interrupt)
                else {
                    return Err(GameError::NoValidTarget);
                };
                let resume = state.player_index(&resume_after).ok_or(GameError::NoValidTarget)?;
                wake(state, mover, *queen)?;
                end_move(state, mover, Some(resume));
            }
            MoveKind::Discard { cards } => {
                let discarded = cards
                    .iter()
                    .map(|&id| {
                        state.players[mover]
                            .take_card(id)
                            .ok_or(GameError::MissingRequiredCard)
                    })
                    .collect::<Result<SmallVec<[Card; 5]>>>()?;
                state.deck.discard(discarded);
                state.refill_hand(mover);
                end_move(state, mover, Some(mover));
            }
        }

        Ok(())
    }

    fn legal_moves(&self, state: &GameState, player: &PlayerId) -> Vec<Move> {
        let mut moves = Vec::new();
        if state.phase != Phase::Playing {
            return moves;
        }
        let Some(me) = state.player(player) else {
            return moves;
        };
        let first = |kind: CardKind| me.hand.iter().find(|c| c.kind == kind).map(|c| c.id);
        let sleeping: Vec<QueenId> = state.sleeping_queens().map(|q| q.id).collect();
        let push =
            |moves: &mut Vec<Move>, kind: MoveKind| moves.push(Move::new(player.clone(), kind));

        match &state.interrupt {
            Interrupt::None => {
                if state.current_player().is_some_and(|p| &p.id == player) {
                    turn_moves(state, player, &mut moves);
                }
            }
            Interrupt::KnightDefense(attack) if &attack.target == player => {
                if let Some(card) = first(CardKind::Dragon) {
                    push(&mut moves, MoveKind::PlayDragon { card });
                }
                push(&mut moves, MoveKind::AllowKnightAttack);
            }
            Interrupt::PotionDefense(attack) if &attack.target == player => {
                if let Some(card) = first(CardKind::Wand) {
                    push(&mut moves, MoveKind::PlayWand { card });
                }
                push(&mut moves, MoveKind::AllowPotionAttack);
            }
            Interrupt::JesterSelection { target, .. } if target == player => {
                for &queen in &sleeping {
                    push(&mut moves, MoveKind::SelectJesterQueen { queen });
                }
            }
            Interrupt::RoseBonus { player: chooser, .. } if chooser == player => {
                for &queen in &sleeping {
                    push(&mut moves, MoveKind::RoseQueenBonus { queen });
                }
            }
            _ => {}
        }

        moves
    }
}

/// Moves available to the current player in normal play.
///
/// Interchangeable cards (same kind, same values) produce one move each.
fn turn_moves(state: &GameState, player: &PlayerId, moves: &mut Vec<Move>) {
    let Some(me) = state.player(player) else {
        return;
    };
    let first = |kind: CardKind| me.hand.iter().find(|c| c.kind == kind).map(|c| c.id);
    let push = |moves: &mut Vec<Move>, kind: MoveKind| moves.push(Move::new(player.clone(), kind));

    if let Some(card) = first(CardKind::King) {
        for queen in state.sleeping_queens() {
            push(moves, MoveKind::PlayKing { card, queen: queen.id });
        }
    }

    let opponents = state.players.iter().filter(|p| &p.id != player);
    for opponent in opponents {
        for queen in &opponent.queens {
            if let Some(card) = first(CardKind::Knight) {
                let target = opponent.id.clone();
                push(moves, MoveKind::PlayKnight { card, target, queen: queen.id });
            }
            if let Some(card) = first(CardKind::Potion) {
                let target = opponent.id.clone();
                push(moves, MoveKind::PlayPotion { card, target, queen: queen.id });
            }
        }
    }

    if let Some(card) = first(CardKind::Jester) {
        if state.deck.can_draw() {
            push(moves, MoveKind::PlayJester { card });
        }
    }

    let mut singles = FxHashSet::default();
    for card in &me.hand {
        if singles.insert(card.kind) {
            moves.push(Move::discard(player.clone(), &[card.id]));
        }
    }

    // Pairs and equations, one per multiset of values.
    let numbers: SmallVec<[&Card; 5]> = me.hand.iter().filter(|c| !c.is_power()).collect();
    let mut seen: FxHashSet<SmallVec<[u8; 5]>> = FxHashSet::default();
    for mask in 1u32..(1 << numbers.len()) {
        if mask.count_ones() < 2 {
            continue;
        }
        let picked: SmallVec<[Card; 5]> = numbers
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, &&c)| c)
            .collect();
        if validator::classify_discard(&picked).is_none() {
            continue;
        }
        let mut values: SmallVec<[u8; 5]> = picked.iter().filter_map(Card::value).collect();
        values.sort_unstable();
        if seen.insert(values) {
            let ids: SmallVec<[CardId; 5]> = picked.iter().map(|c| c.id).collect();
            moves.push(Move::discard(player.clone(), &ids));
        }
    }
}

// === Transition helpers ===

/// Remove a card from a hand and put it on the discard pile.
fn spend(state: &mut GameState, index: usize, card: CardId) -> Result<Card> {
    let spent = state.players[index]
        .take_card(card)
        .ok_or(GameError::MissingRequiredCard)?;
    state.deck.discard([spent]);
    Ok(spent)
}

/// Wake a sleeping queen for the player at `index`.
///
/// Returns true if the Rose Queen was woken and kept.
fn wake(state: &mut GameState, index: usize, queen: QueenId) -> Result<bool> {
    let mut woken = state.take_sleeping(queen).ok_or(GameError::NoValidTarget)?;
    woken.awake = true;
    let rose = woken.is_rose();
    debug!("{} woke {}", state.players[index].id, woken.name);
    Ok(acquire(state, index, woken) && rose)
}

/// Hand a queen to a player, enforcing Cat/Dog exclusivity.
///
/// Returns false if the queen had to go back to sleep.
fn acquire(state: &mut GameState, index: usize, queen: Queen) -> bool {
    let clash = queen
        .power
        .and_then(|power| power.rival())
        .is_some_and(|rival| state.players[index].has_power(rival));

    if clash {
        debug!("{} cannot keep {}: back to sleep", state.players[index].id, queen.name);
        state.put_to_sleep(queen);
        false
    } else {
        state.players[index].queens.push(queen);
        true
    }
}

/// Open the Rose Queen bonus if the Rose was kept and a queen is left to wake.
fn open_rose_bonus(state: &mut GameState, index: usize, rose: bool, resume: usize) -> bool {
    if !rose || state.sleeping_count() == 0 {
        return false;
    }
    let player = state.players[index].id.clone();
    let resume_after = state.players[resume].id.clone();
    debug!("{player} earned the Rose Queen bonus");
    state.interrupt = Interrupt::RoseBonus { player, resume_after };
    true
}

fn pending_attack(
    state: &GameState,
    mv: &Move,
    target: &PlayerId,
    queen: QueenId,
) -> PendingAttack {
    PendingAttack {
        attacker: mv.player.clone(),
        target: target.clone(),
        queen,
        deadline: mv.timestamp.saturating_add(state.config.defense_window_ms),
    }
}

fn take_attack(state: &mut GameState) -> Result<PendingAttack> {
    match std::mem::take(&mut state.interrupt) {
        Interrupt::KnightDefense(attack) | Interrupt::PotionDefense(attack) => Ok(attack),
        Interrupt::None | Interrupt::JesterSelection { .. } | Interrupt::RoseBonus { .. } => {
            Err(GameError::NoValidTarget)
        }
    }
}

/// Finish a move in normal play: evaluate the win conditions, then move
/// the turn pointer past `advance_past` (or keep it for an extra turn).
fn end_move(state: &mut GameState, actor: usize, advance_past: Option<usize>) {
    if let Some(result) = win::evaluate(state, actor) {
        match &result {
            GameResult::Winner(winner) => info!("game over: {winner} wins"),
            GameResult::Winners(winners) => {
                info!("game over: {} players share the win", winners.len())
            }
        }
        state.phase = Phase::Ended;
        state.result = Some(result);
        return;
    }

    if let Some(past) = advance_past {
        state.current = state.next_index(past);
    }
}
