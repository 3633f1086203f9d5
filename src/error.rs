//! Error types.
//!
//! Every engine error is a deterministic rule violation returned as a
//! value. The engine performs no I/O, so there is no retryable class;
//! callers decide how to surface rejections to their users.

use thiserror::Error;

/// Rule violations and setup failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum GameError {
    /// The game is not in play, or it is someone else's turn.
    #[error("not your turn")]
    NotYourTurn,

    /// The card the move needs is not in the mover's hand.
    #[error("required card not in hand")]
    MissingRequiredCard,

    /// The targeted player, queen or pile cannot be used.
    #[error("no valid target")]
    NoValidTarget,

    /// The discard selection is not a single, a pair or an equation.
    #[error("invalid card combination")]
    InvalidCardCombination,

    /// An ordinary move was attempted while an interrupt is outstanding.
    #[error("waiting for another player to respond")]
    InterruptActive,

    /// A response was submitted by someone other than the player it waits on.
    #[error("wrong player for this selection")]
    WrongPlayerForSelection,

    /// Seating changes are only allowed before the game starts.
    #[error("game already started")]
    GameAlreadyStarted,

    /// Every seat is taken.
    #[error("game is full")]
    GameFull,

    /// A player with this id is already seated.
    #[error("player id already in use")]
    DuplicateId,

    /// Not enough players to start.
    #[error("not enough players to start")]
    TooFewPlayers,

    /// The game configuration is not playable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// Snapshot codec failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Encoding or decoding failed.
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}
