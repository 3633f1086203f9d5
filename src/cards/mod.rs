//! Card and queen types and the standard catalog.
//!
//! ## Key Types
//!
//! - `Card` / `CardKind`: Number and power cards
//! - `Queen` / `QueenPower`: Scoring pieces and their special rules
//! - `catalog`: Rule-table counts and shuffled deck/queen construction

pub mod card;
pub mod catalog;
pub mod queen;

pub use card::{Card, CardKind};
pub use queen::{Queen, QueenPower};
