//! Rules of Sleeping Queens.
//!
//! - `engine`: the `RulesEngine` trait (validate, apply, submit)
//! - `validator`: pure legality checks
//! - `orchestrator`: the `SleepingQueens` state machine
//! - `setup`: game creation, seating and the deal
//! - `win`: end-of-game evaluation
//!
//! Callers only talk to `SleepingQueens`; everything else is reachable
//! for tests and tooling.

pub mod engine;
pub mod orchestrator;
pub mod setup;
pub mod validator;
pub mod win;

pub use engine::{GameResult, RulesEngine};
pub use orchestrator::SleepingQueens;
pub use validator::DiscardShape;
