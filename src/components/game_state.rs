// src/components/game_state.rs

use serde::{Deserialize, Serialize};

use crate::components::pile::StackType;

/// Whether the current deal is still in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    /// All 52 cards are on the foundations.
    Won,
}

/// What a stock click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// Turned this many cards from the stock onto the waste.
    Drew(usize),
    /// Moved this many cards from the waste back into the stock.
    Recycled(usize),
    /// Stock and waste are empty, or the redeal limit is used up.
    NoCardsAvailable,
}

/// How a pointer release was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// Nothing was being held.
    NotHolding,
    /// The held run landed on this pile.
    Placed(StackType),
    /// No candidate accepted; the run went back where it came from.
    Returned(StackType),
}
