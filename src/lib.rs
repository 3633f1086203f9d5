//! # sleeping-queens
//!
//! A rules engine for the Sleeping Queens card game.
//!
//! ## Design Principles
//!
//! 1. **Snapshots In, Snapshots Out**: Every operation takes an immutable
//!    `GameState` and returns a new one. A rejected move leaves the input
//!    untouched.
//!
//! 2. **N-Player First**: Two to five seats; nothing assumes a two-player
//!    table.
//!
//! 3. **Deterministic**: All randomness flows from a seeded RNG stored in
//!    the snapshot, so a seed plus a move list reproduces a game.
//!
//! ## Usage
//!
//! ```
//! use sleeping_queens::{GameConfig, PlayerId, RulesEngine, SleepingQueens};
//!
//! let engine = SleepingQueens::new(GameConfig::default()).unwrap();
//! let mut state = engine.create_game(Some(7));
//! for id in ["alice", "bob", "carol"] {
//!     state = engine.add_player(&state, PlayerId::from(id), id).unwrap();
//! }
//! let state = engine.start_game(&state).unwrap();
//!
//! let mover = state.current_player().unwrap().id.clone();
//! let mv = engine.legal_moves(&state, &mover).remove(0);
//! let next = engine.submit_move(&state, &mv).unwrap();
//!
//! assert_eq!(next.version, state.version + 1);
//! ```
//!
//! ## Modules
//!
//! - `core`: ids, players, state, moves, RNG, configuration
//! - `cards`: card and queen types, the standard catalog
//! - `deck`: draw and discard piles
//! - `rules`: validation, the turn state machine, win evaluation
//! - `error`: rejection reasons

pub mod cards;
pub mod core;
pub mod deck;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CardId, QueenId, PlayerId, Player,
    GameRng, GameRngState, GameConfig,
    Move, MoveKind, MoveRecord,
    GameState, Interrupt, PendingAttack, Phase,
};

pub use crate::cards::{Card, CardKind, Queen, QueenPower};

pub use crate::deck::DeckManager;

pub use crate::rules::{DiscardShape, GameResult, RulesEngine, SleepingQueens};

pub use crate::error::{GameError, Result, SnapshotError};
