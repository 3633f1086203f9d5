//! Core engine types: ids, players, state, moves, RNG, configuration.
//!
//! This module holds the plain data every other module works on.

pub mod action;
pub mod config;
pub mod entity;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveKind, MoveRecord};
pub use config::GameConfig;
pub use entity::{CardId, QueenId};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Interrupt, PendingAttack, Phase};
