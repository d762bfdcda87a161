// src/components/interaction.rs

use serde::Serialize;

use crate::components::card::Card;
use crate::components::pile::StackType;

/// Pointer interaction state.
///
/// `Idle` until a liftable card is pressed, then `Holding` the lifted run
/// until the pointer is released. The run is never empty while held.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum Interaction {
    #[default]
    Idle,
    Holding { run: Vec<Card> },
}

impl Interaction {
    /// Whether a run is currently in hand.
    pub fn is_holding(&self) -> bool {
        matches!(self, Interaction::Holding { .. })
    }

    /// The cards in hand, bottom first. Empty when idle.
    pub fn held_run(&self) -> &[Card] {
        match self {
            Interaction::Holding { run, .. } => run,
            Interaction::Idle => &[],
        }
    }

    /// The pile the held run was lifted from.
    ///
    /// Lifted cards keep the owner handle of the pile they left, so the bottom
    /// card of the run names the origin.
    pub fn origin(&self) -> Option<StackType> {
        self.held_run().first().and_then(|card| card.owner)
    }
}
