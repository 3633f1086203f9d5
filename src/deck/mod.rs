//! Shared draw and discard piles.
//!
//! ## Key Types
//!
//! - `DeckManager`: Drawing, discarding and automatic reshuffling

pub mod manager;

pub use manager::DeckManager;
