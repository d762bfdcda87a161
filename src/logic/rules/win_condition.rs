//! Win detection.

use crate::components::table::DECK_SIZE;

/// The game is won once every card sits on a foundation.
pub fn check_win_condition(foundation_card_count: usize) -> bool {
    foundation_card_count == DECK_SIZE
}
